//! Events Application Layer

pub mod config;
pub mod fallback;
pub mod list_events;
