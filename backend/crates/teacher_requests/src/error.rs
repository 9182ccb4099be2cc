//! Teacher Requests Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::kind::ErrorKind;
use platform::google::GoogleError;
use thiserror::Error;

/// Teacher-requests result type alias
pub type TeacherRequestsResult<T> = Result<T, TeacherRequestsError>;

/// Teacher-requests error variants
#[derive(Debug, Error)]
pub enum TeacherRequestsError {
    /// The response sheet has no rows at all
    #[error("No data found")]
    Empty,

    /// Google authentication or Sheets call failed
    #[error("Response sheet request failed: {0}")]
    Upstream(#[from] GoogleError),

    /// Required credentials are absent from the environment
    #[error("Teacher requests are not configured")]
    NotConfigured,
}

impl TeacherRequestsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TeacherRequestsError::Empty => StatusCode::NOT_FOUND,
            TeacherRequestsError::Upstream(_) => StatusCode::BAD_GATEWAY,
            TeacherRequestsError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TeacherRequestsError::Empty => ErrorKind::NotFound,
            TeacherRequestsError::Upstream(_) => ErrorKind::BadGateway,
            TeacherRequestsError::NotConfigured => ErrorKind::ServiceUnavailable,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            TeacherRequestsError::Empty => "No data found",
            TeacherRequestsError::Upstream(_) => "Failed to fetch teacher requests",
            TeacherRequestsError::NotConfigured => "Teacher requests are not configured",
        }
    }

    fn log(&self) {
        match self {
            TeacherRequestsError::Upstream(e) => {
                tracing::error!(error = %e, "Response sheet request failed");
            }
            TeacherRequestsError::NotConfigured => {
                tracing::warn!("Teacher requests credentials missing");
            }
            TeacherRequestsError::Empty => {
                tracing::debug!("Response sheet is empty");
            }
        }
    }
}

impl IntoResponse for TeacherRequestsError {
    fn into_response(self) -> Response {
        self.log();
        let body = Envelope::<()>::failure(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}
