//! Fallback Events
//!
//! Served when the calendar integration is unconfigured so the events page
//! still renders a plausible schedule.

use crate::domain::entity::CalendarEvent;

pub fn fallback_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::from_provider(
            "fallback-event-1".to_string(),
            "PTO General Meeting".to_string(),
            Some("Monthly meeting - all parents welcome".to_string()),
            "2026-09-08T18:30:00-04:00".to_string(),
            Some("2026-09-08T19:30:00-04:00".to_string()),
            Some("School Library".to_string()),
        ),
        CalendarEvent::from_provider(
            "fallback-event-2".to_string(),
            "Fall Book Fair".to_string(),
            Some("Shop the book fair all week in the gym".to_string()),
            "2026-10-12".to_string(),
            Some("2026-10-16".to_string()),
            Some("School Gym".to_string()),
        ),
        CalendarEvent::from_provider(
            "fallback-event-3".to_string(),
            "Family Movie Night".to_string(),
            Some("Bring blankets and chairs".to_string()),
            "2026-10-24T18:00:00-04:00".to_string(),
            Some("2026-10-24T20:00:00-04:00".to_string()),
            Some("Cafeteria".to_string()),
        ),
    ]
}
