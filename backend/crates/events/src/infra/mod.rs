//! Events Infrastructure Layer

pub mod google_calendar;
