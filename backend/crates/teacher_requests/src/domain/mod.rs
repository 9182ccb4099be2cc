//! Teacher Requests Domain Layer

pub mod roster;
pub mod source;
