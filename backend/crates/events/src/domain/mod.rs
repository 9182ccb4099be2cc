//! Events Domain Layer

pub mod category;
pub mod entity;
pub mod repository;
