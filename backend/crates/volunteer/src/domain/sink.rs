//! Sink Interfaces
//!
//! Each fan-out target is a trait so the orchestrator can be exercised with
//! in-memory fakes. The capacity sink reuses the content crate's
//! `CapacityRepository` rather than redefining it here.

use std::collections::BTreeMap;

use crate::domain::submission::SignupRecord;
use crate::error::SignupResult;

/// One logged signup, keyed by the log's own column headers.
pub type SignupRow = BTreeMap<String, String>;

/// Durable, append-only signup log.
#[trait_variant::make(SignupLog: Send)]
pub trait LocalSignupLog {
    /// Append one signup, returning a reference to where it landed.
    async fn append(&self, record: &SignupRecord) -> SignupResult<String>;

    /// Every logged signup, header-keyed, blank rows dropped.
    async fn list(&self) -> SignupResult<Vec<SignupRow>>;
}

/// Outbound transactional email.
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Send one HTML email, returning the provider's message id.
    async fn send(&self, to: &str, subject: &str, html: &str) -> SignupResult<String>;
}
