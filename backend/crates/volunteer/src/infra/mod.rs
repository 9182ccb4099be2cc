//! Volunteer Infrastructure Layer

pub mod resend;
pub mod sheets_log;
