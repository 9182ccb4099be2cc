//! Event Categorization
//!
//! The calendar has no category field, so the category is inferred from the
//! event text. The checks run in a fixed order and the first hit wins, which
//! matters for titles that mention several keywords ("Fundraiser Night" is a
//! fundraiser, not a social).

use serde::Serialize;

/// Display category of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Meeting,
    Fundraiser,
    Appreciation,
    Social,
    School,
    Fitness,
}

impl EventCategory {
    /// Infer a category from the event title and description.
    ///
    /// Only "meeting" and "volunteer" are also matched against the
    /// description; everything else looks at the title alone. Events nothing
    /// matches default to meetings.
    pub fn infer(title: &str, description: &str) -> Self {
        let title = title.to_lowercase();
        let description = description.to_lowercase();

        if title.contains("meeting") || description.contains("meeting") {
            return EventCategory::Meeting;
        }
        if title.contains("fundraiser") || title.contains("sale") || title.contains("fair") {
            return EventCategory::Fundraiser;
        }
        if title.contains("appreciation") || title.contains("thank") {
            return EventCategory::Appreciation;
        }
        if title.contains("social") || title.contains("fun") || title.contains("night") {
            return EventCategory::Social;
        }
        if title.contains("volunteer") || description.contains("volunteer") {
            return EventCategory::School;
        }
        if title.contains("fitness") || title.contains("sport") {
            return EventCategory::Fitness;
        }

        EventCategory::Meeting
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "meeting",
            EventCategory::Fundraiser => "fundraiser",
            EventCategory::Appreciation => "appreciation",
            EventCategory::Social => "social",
            EventCategory::School => "school",
            EventCategory::Fitness => "fitness",
        }
    }
}
