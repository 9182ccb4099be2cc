//! Events DTOs

use serde::Serialize;

use crate::domain::entity::CalendarEvent;

/// Response payload: the event list keeps its own key so the shape can grow
/// without breaking clients.
#[derive(Debug, Serialize)]
pub struct EventListDto {
    pub events: Vec<EventDto>,
}

impl EventListDto {
    pub fn from_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: events.into_iter().map(EventDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub formatted_date: String,
    pub formatted_time: String,
    pub event_type: &'static str,
}

impl From<CalendarEvent> for EventDto {
    fn from(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            start: event.start,
            end: event.end,
            location: event.location,
            formatted_date: event.formatted_date,
            formatted_time: event.formatted_time,
            event_type: event.category.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_dto_field_names() {
        let event = CalendarEvent::from_provider(
            "evt1".to_string(),
            "Spirit Night".to_string(),
            None,
            "2026-11-06T17:00:00-05:00".to_string(),
            None,
            None,
        );
        let json = serde_json::to_value(EventDto::from(event)).unwrap();
        assert_eq!(json["formattedDate"], "Friday, November 6, 2026");
        assert_eq!(json["formattedTime"], "5:00 PM");
        assert_eq!(json["eventType"], "social");
        assert!(json.get("location").is_none());
    }
}
