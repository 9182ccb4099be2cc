//! Domain Layer

pub mod entity;
pub mod repository;
pub mod slug;
