//! Volunteer Application Configuration

use platform::rate_limit::RateLimitConfig;

/// Declared request bodies above this are rejected before reading.
pub const MAX_BODY_BYTES: u64 = 10 * 1024;

/// Volunteer application configuration
#[derive(Debug, Clone)]
pub struct SignupConfig {
    /// Sender for both outbound emails
    pub email_from: String,
    /// Inbox notified of every signup
    pub pto_email: String,
    /// Per-client signup throttle
    pub rate_limit: RateLimitConfig,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            email_from: "PTO <noreply@example.org>".to_string(),
            pto_email: "pto@example.org".to_string(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}
