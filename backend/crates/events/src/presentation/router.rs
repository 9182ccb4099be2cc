//! Events Router

use axum::{Router, routing::get};

use crate::presentation::handlers::{self, EventsAppState};

/// Create the events router. Nested under `/api` by the binary.
pub fn events_router(state: EventsAppState) -> Router {
    Router::new()
        .route("/events", get(handlers::list_events))
        .with_state(state)
}
