//! List Events Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::EventsConfig;
use crate::application::fallback::fallback_events;
use crate::domain::entity::CalendarEvent;
use crate::domain::repository::CalendarRepository;
use crate::error::EventsResult;

/// List Events Use Case
///
/// Upcoming events from the configured calendar. Requests may override both
/// the result count and the calendar. When the integration is unconfigured
/// the static fallback schedule is served instead; upstream failures are
/// propagated, not masked.
pub struct ListEventsUseCase<C>
where
    C: CalendarRepository,
{
    repo: Option<Arc<C>>,
    config: Arc<EventsConfig>,
}

impl<C> ListEventsUseCase<C>
where
    C: CalendarRepository,
{
    pub fn new(repo: Option<Arc<C>>, config: Arc<EventsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        max_results: Option<u32>,
        calendar_id: Option<&str>,
    ) -> EventsResult<Vec<CalendarEvent>> {
        let max_results = max_results.unwrap_or(self.config.default_max_results);
        let calendar_id = calendar_id.or(self.config.calendar_id.as_deref());

        let (Some(repo), Some(calendar_id)) = (&self.repo, calendar_id) else {
            tracing::warn!("Calendar unconfigured; serving fallback events");
            let mut events = fallback_events();
            events.truncate(max_results as usize);
            return Ok(events);
        };

        let events = repo.upcoming(calendar_id, Utc::now(), max_results).await?;
        tracing::debug!(count = events.len(), calendar_id, "Fetched calendar events");
        Ok(events)
    }
}
