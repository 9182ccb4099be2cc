//! Events Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::kind::ErrorKind;
use platform::google::GoogleError;
use thiserror::Error;

/// Events-specific result type alias
pub type EventsResult<T> = Result<T, EventsError>;

/// Events-specific error variants
#[derive(Debug, Error)]
pub enum EventsError {
    /// Token minting or signing failed
    #[error("Calendar authentication failed: {0}")]
    Auth(#[from] GoogleError),

    /// The calendar API is unreachable or misbehaving
    #[error("Calendar request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The calendar API answered with a non-success status
    #[error("Calendar returned status {0}")]
    UpstreamStatus(u16),
}

impl EventsError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::BadGateway
    }

    fn log(&self) {
        match self {
            EventsError::Auth(e) => {
                tracing::error!(error = %e, "Calendar authentication failed");
            }
            EventsError::Upstream(e) => {
                tracing::error!(error = %e, "Calendar request failed");
            }
            EventsError::UpstreamStatus(status) => {
                tracing::error!(status, "Calendar returned an error status");
            }
        }
    }
}

impl IntoResponse for EventsError {
    fn into_response(self) -> Response {
        self.log();
        let body = Envelope::<()>::failure("Failed to fetch events");
        (self.status_code(), Json(body)).into_response()
    }
}
