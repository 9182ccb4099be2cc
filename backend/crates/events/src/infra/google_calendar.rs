//! Google Calendar v3 Client
//!
//! Thin client for the `events.list` endpoint, authenticated through the
//! shared service-account token cache with the read-only calendar scope.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::google::{GoogleAuthenticator, SCOPE_CALENDAR_READONLY};
use serde::Deserialize;

use crate::domain::entity::CalendarEvent;
use crate::domain::repository::CalendarRepository;
use crate::error::{EventsError, EventsResult};

const CALENDAR_BASE_URL: &str = "https://www.googleapis.com/calendar/v3/calendars";

#[derive(Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct RawEvent {
    id: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    start: Option<EventTime>,
    end: Option<EventTime>,
}

/// Either a timed instant or an all-day date, never both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventTime {
    date_time: Option<String>,
    date: Option<String>,
}

impl EventTime {
    fn into_raw(self) -> Option<String> {
        self.date_time.or(self.date)
    }
}

pub struct GoogleCalendarClient {
    http: reqwest::Client,
    auth: Arc<GoogleAuthenticator>,
}

impl GoogleCalendarClient {
    pub fn new(http: reqwest::Client, auth: Arc<GoogleAuthenticator>) -> Self {
        Self { http, auth }
    }
}

impl CalendarRepository for GoogleCalendarClient {
    async fn upcoming(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        max_results: u32,
    ) -> EventsResult<Vec<CalendarEvent>> {
        let token = self.auth.bearer_token(SCOPE_CALENDAR_READONLY).await?;

        let url = format!("{}/{}/events", CALENDAR_BASE_URL, encode_calendar_id(calendar_id));
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("timeMin", time_min.to_rfc3339().as_str()),
                ("maxResults", max_results.to_string().as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EventsError::UpstreamStatus(response.status().as_u16()));
        }

        let body: EventList = response.json().await?;

        Ok(body
            .items
            .into_iter()
            .filter_map(event_from_raw)
            .collect())
    }
}

/// Events without a start (cancelled instances) are dropped.
fn event_from_raw(raw: RawEvent) -> Option<CalendarEvent> {
    let start = raw.start.and_then(EventTime::into_raw)?;
    let end = raw.end.and_then(EventTime::into_raw);
    Some(CalendarEvent::from_provider(
        raw.id,
        raw.summary.unwrap_or_default(),
        raw.description,
        start,
        end,
        raw.location,
    ))
}

/// Calendar ids are email-shaped and land in the URL path.
fn encode_calendar_id(calendar_id: &str) -> String {
    calendar_id.replace('@', "%40").replace('#', "%23")
}
