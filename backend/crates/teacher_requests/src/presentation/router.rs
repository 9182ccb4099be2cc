//! Teacher Requests Router

use axum::{Router, routing::get};

use crate::presentation::handlers::{self, TeacherRequestsAppState};

/// Create the teacher-requests router. Nested under `/api` by the binary.
pub fn teacher_requests_router(state: TeacherRequestsAppState) -> Router {
    Router::new()
        .route("/teacher-requests", get(handlers::get_teacher_requests))
        .with_state(state)
}
