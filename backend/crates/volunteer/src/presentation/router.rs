//! Volunteer Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::handlers::{self, VolunteerAppState};

/// Create the volunteer router. Nested under `/api` by the binary.
pub fn volunteer_router(state: VolunteerAppState) -> Router {
    Router::new()
        .route("/volunteer/signup", post(handlers::submit_signup))
        .route("/volunteer/signups", get(handlers::list_signups))
        .with_state(state)
}
