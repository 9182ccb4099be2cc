//! Calendar Event Entity

use chrono::{DateTime, NaiveDate};

use crate::domain::category::EventCategory;

/// A single upcoming event, already shaped for display.
///
/// `start` and `end` carry the provider's raw value: an RFC 3339 dateTime
/// for timed events or a plain `YYYY-MM-DD` date for all-day ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: String,
    pub end: Option<String>,
    pub location: Option<String>,
    pub formatted_date: String,
    pub formatted_time: String,
    pub category: EventCategory,
}

impl CalendarEvent {
    /// Build an event from provider fields, deriving the display strings
    /// and the category.
    pub fn from_provider(
        id: String,
        title: String,
        description: Option<String>,
        start: String,
        end: Option<String>,
        location: Option<String>,
    ) -> Self {
        let category = EventCategory::infer(&title, description.as_deref().unwrap_or(""));
        let formatted_date = format_event_date(&start);
        let formatted_time = format_event_time(&start);
        Self {
            id,
            title,
            description,
            start,
            end,
            location,
            formatted_date,
            formatted_time,
            category,
        }
    }
}

/// `"Monday, January 5, 2026"`, locale-fixed. Unparseable values pass
/// through untouched so the page still has something to show.
pub fn format_event_date(start: &str) -> String {
    if let Ok(timed) = DateTime::parse_from_rfc3339(start) {
        return timed.format("%A, %B %-d, %Y").to_string();
    }
    if let Ok(all_day) = NaiveDate::parse_from_str(start, "%Y-%m-%d") {
        return all_day.format("%A, %B %-d, %Y").to_string();
    }
    start.to_string()
}

/// `"3:00 PM"` for timed events; all-day and unparseable starts have no
/// time of day.
pub fn format_event_time(start: &str) -> String {
    match DateTime::parse_from_rfc3339(start) {
        Ok(timed) => timed.format("%-I:%M %p").to_string(),
        Err(_) => "All day".to_string(),
    }
}
