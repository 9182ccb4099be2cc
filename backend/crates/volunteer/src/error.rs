//! Volunteer Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::kind::ErrorKind;
use platform::google::GoogleError;
use thiserror::Error;

/// Volunteer-specific result type alias
pub type SignupResult<T> = Result<T, SignupError>;

/// Volunteer-specific error variants
#[derive(Debug, Error)]
pub enum SignupError {
    /// Submission failed a validation rule
    #[error("{0}")]
    Validation(String),

    /// Declared request body exceeds the accepted size
    #[error("Request too large")]
    PayloadTooLarge,

    /// Caller exceeded the signup rate limit
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    /// The queried sink has no credentials configured
    #[error("Signup storage is not configured")]
    NotConfigured,

    /// Google authentication or Sheets call failed
    #[error("Signup storage request failed: {0}")]
    Sheets(#[from] GoogleError),

    /// The email API is unreachable or misbehaving
    #[error("Email request failed: {0}")]
    Email(#[from] reqwest::Error),

    /// The email API answered with a non-success status
    #[error("Email API returned status {0}")]
    EmailStatus(u16),
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::Validation(_) => StatusCode::BAD_REQUEST,
            SignupError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            SignupError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            SignupError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            SignupError::Sheets(_) | SignupError::Email(_) | SignupError::EmailStatus(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SignupError::Validation(_) => ErrorKind::BadRequest,
            SignupError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            SignupError::RateLimited => ErrorKind::TooManyRequests,
            SignupError::NotConfigured => ErrorKind::ServiceUnavailable,
            SignupError::Sheets(_) | SignupError::Email(_) | SignupError::EmailStatus(_) => {
                ErrorKind::BadGateway
            }
        }
    }

    /// Message safe to put in the envelope. Upstream details stay in the log.
    fn public_message(&self) -> String {
        match self {
            SignupError::Validation(message) => message.clone(),
            SignupError::PayloadTooLarge => "Request too large".to_string(),
            SignupError::RateLimited => {
                "Too many requests. Please try again later.".to_string()
            }
            SignupError::NotConfigured => "Signup storage is not configured".to_string(),
            SignupError::Sheets(_) => "Failed to fetch signups".to_string(),
            SignupError::Email(_) | SignupError::EmailStatus(_) => {
                "Failed to send email".to_string()
            }
        }
    }

    fn log(&self) {
        match self {
            SignupError::Sheets(e) => {
                tracing::error!(error = %e, "Signup storage request failed");
            }
            SignupError::Email(e) => {
                tracing::error!(error = %e, "Email request failed");
            }
            SignupError::EmailStatus(status) => {
                tracing::error!(status, "Email API returned an error status");
            }
            SignupError::RateLimited => {
                tracing::warn!("Signup rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Signup error");
            }
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Envelope::<()>::failure(self.public_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SignupError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignupError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            SignupError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            SignupError::NotConfigured.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            SignupError::EmailStatus(500).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = SignupError::Validation("Missing required fields".into());
        assert_eq!(err.public_message(), "Missing required fields");
    }
}
