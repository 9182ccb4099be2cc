//! Volunteer Domain Layer

pub mod calendar_link;
pub mod sink;
pub mod submission;
