//! Teacher Requests Configuration

use std::time::Duration;

/// Default form-response range; row 1 holds the form's question headers.
pub const DEFAULT_RANGE: &str = "Form Responses 1!A:Z";

/// Teacher requests configuration
#[derive(Debug, Clone)]
pub struct TeacherRequestsConfig {
    /// Header of the consent question, verbatim from the form
    pub consent_column: String,
    /// How long one processed payload is reused
    pub cache_ttl: Duration,
}

impl Default for TeacherRequestsConfig {
    fn default() -> Self {
        Self {
            consent_column:
                "My answers may be shared with families via the PTO Facebook page, website, emails, etc."
                    .to_string(),
            cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}
