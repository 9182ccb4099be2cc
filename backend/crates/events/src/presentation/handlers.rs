//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use kernel::envelope::Envelope;
use serde::Deserialize;

use crate::application::config::EventsConfig;
use crate::application::list_events::ListEventsUseCase;
use crate::error::EventsResult;
use crate::infra::google_calendar::GoogleCalendarClient;
use crate::presentation::dto::EventListDto;

/// Shared state for event handlers
#[derive(Clone)]
pub struct EventsAppState {
    pub calendar: Option<Arc<GoogleCalendarClient>>,
    pub config: Arc<EventsConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsQuery {
    /// Parsed leniently: a non-numeric value falls back to the default
    /// instead of rejecting the request.
    max_results: Option<String>,
    calendar_id: Option<String>,
}

/// GET /api/events
pub async fn list_events(
    State(state): State<EventsAppState>,
    Query(query): Query<EventsQuery>,
) -> EventsResult<Json<Envelope<EventListDto>>> {
    let max_results = query.max_results.as_deref().and_then(|raw| raw.parse().ok());

    let use_case = ListEventsUseCase::new(state.calendar.clone(), state.config.clone());
    let events = use_case
        .execute(max_results, query.calendar_id.as_deref())
        .await?;

    Ok(Json(Envelope::success(EventListDto::from_events(events))))
}
