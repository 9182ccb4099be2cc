//! Response Envelope
//!
//! Every endpoint answers `{"success": bool, "data": ..., "error": ...}` with
//! a matching HTTP status code. Handlers build the success side; the failure
//! side is produced by `AppError`'s `IntoResponse` (or a domain error enum
//! that converts into it).

use serde::Serialize;

/// Uniform JSON envelope for every API response.
///
/// `data` and `error` are mutually exclusive and the absent one is omitted
/// from the serialized body.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Success envelope carrying a payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope carrying a caller-safe message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
