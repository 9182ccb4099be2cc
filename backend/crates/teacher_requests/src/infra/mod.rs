//! Teacher Requests Infrastructure Layer

pub mod sheets;
