//! Volunteer Signup Module
//!
//! Accepts volunteer signups and fans each one out to independent sinks: a
//! spreadsheet log, a confirmation email, a best-effort capacity decrement,
//! and a notification to the organization inbox. A failing sink never fails
//! the signup; the response reports what each sink did.
//!
//! Clean Architecture structure:
//! - `domain/` - Submission sanitization, the signup record, sink traits,
//!   calendar deep links
//! - `application/` - The orchestrator, email builders, signup listing
//! - `infra/` - Sheets-backed log, Resend mailer
//! - `presentation/` - HTTP handlers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SignupConfig;
pub use application::submit_signup::{CapacityStatus, SignupOutcome, SinkStatus};
pub use domain::sink::{Mailer, SignupLog, SignupRow};
pub use domain::submission::{SignupRecord, SignupSubmission};
pub use error::{SignupError, SignupResult};
pub use infra::resend::ResendMailer;
pub use infra::sheets_log::SheetsSignupLog;
pub use presentation::router::volunteer_router;

#[cfg(test)]
mod tests;
