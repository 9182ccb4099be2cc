//! Teacher Requests Module
//!
//! Serves teacher wishlist form responses straight from the spreadsheet the
//! form writes into. Responses whose consent answer says "no" stay out of
//! the public roster but still contribute anonymized wishlist items. The
//! processed payload is cached briefly to stay inside API quotas.
//!
//! Clean Architecture structure:
//! - `domain/` - Roster assembly: header keying, consent split, wishlist
//!   extraction
//! - `application/` - Cached fetch use case
//! - `infra/` - Sheets-backed response source
//! - `presentation/` - HTTP handlers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TeacherRequestsConfig;
pub use application::fetch_requests::{FetchTeacherRequestsUseCase, TeacherRequestsPayload};
pub use domain::roster::{ResponseRow, TeacherRoster, WishlistItem};
pub use domain::source::ResponseSource;
pub use error::{TeacherRequestsError, TeacherRequestsResult};
pub use infra::sheets::SheetsResponseSource;
pub use presentation::router::teacher_requests_router;
