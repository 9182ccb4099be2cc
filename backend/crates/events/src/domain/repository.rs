//! Calendar Repository Interface

use chrono::{DateTime, Utc};

use crate::domain::entity::CalendarEvent;
use crate::error::EventsResult;

/// Read access to upcoming events on a calendar.
#[trait_variant::make(CalendarRepository: Send)]
pub trait LocalCalendarRepository {
    /// Up to `max_results` events starting at or after `time_min`, in
    /// start order, recurring events expanded to single instances.
    async fn upcoming(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        max_results: u32,
    ) -> EventsResult<Vec<CalendarEvent>>;
}
