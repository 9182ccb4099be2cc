//! Content Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::handlers::{self, ContentAppState};

/// Create the content router. Nested under `/api` by the binary.
pub fn content_router(state: ContentAppState) -> Router {
    Router::new()
        .route("/contentful/news", get(handlers::list_news))
        .route("/contentful/news/{slug}", get(handlers::get_article))
        .route("/contentful/volunteer", get(handlers::list_opportunities))
        .route("/contentful/volunteer/update", post(handlers::update_spots))
        .route("/fundraising", get(handlers::list_fundraisers))
        .with_state(state)
}
