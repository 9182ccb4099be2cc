//! Content Error Types
//!
//! Content-specific error variants that integrate with the unified
//! `kernel::error::AppError` system and the response envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// No entry matched after all resolution stages
    #[error("Article not found")]
    NotFound,

    /// Caller-side validation failure
    #[error("{0}")]
    Validation(String),

    /// The content store is unreachable or misbehaving
    #[error("Content store request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The content store answered with a non-success status
    #[error("Content store returned status {0}")]
    UpstreamStatus(u16),

    /// Stale-version conflict reported by the management API
    #[error("Entry was modified by another process")]
    VersionConflict,

    /// Required credentials are absent from the environment
    #[error("Content store is not configured")]
    NotConfigured,
}

impl ContentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::NotFound => StatusCode::NOT_FOUND,
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::Upstream(_) | ContentError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            ContentError::VersionConflict => StatusCode::CONFLICT,
            ContentError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::NotFound => ErrorKind::NotFound,
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::Upstream(_) | ContentError::UpstreamStatus(_) => ErrorKind::BadGateway,
            ContentError::VersionConflict => ErrorKind::Conflict,
            ContentError::NotConfigured => ErrorKind::ServiceUnavailable,
        }
    }

    /// Message safe to put in the envelope. Upstream details stay in the log.
    fn public_message(&self) -> &'static str {
        match self {
            ContentError::NotFound => "Article not found",
            ContentError::Validation(_) => "Invalid request",
            ContentError::Upstream(_) | ContentError::UpstreamStatus(_) => {
                "Failed to fetch content"
            }
            ContentError::VersionConflict => {
                "Entry was modified by another process. Please try again."
            }
            ContentError::NotConfigured => "Content store is not configured",
        }
    }

    fn log(&self) {
        match self {
            ContentError::Upstream(e) => {
                tracing::error!(error = %e, "Content store request failed");
            }
            ContentError::UpstreamStatus(status) => {
                tracing::error!(status, "Content store returned an error status");
            }
            ContentError::VersionConflict => {
                tracing::warn!("Content store version conflict");
            }
            ContentError::NotConfigured => {
                tracing::warn!("Content store credentials missing");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = if let ContentError::Validation(message) = &self {
            Envelope::<()>::failure(message.clone())
        } else {
            Envelope::<()>::failure(self.public_message())
        };
        (status, Json(body)).into_response()
    }
}
