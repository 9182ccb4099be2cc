//! Calendar Proxy Module
//!
//! Read-only proxy over the organization's shared Google Calendar. Events are
//! fetched with a service account, categorized by keyword, and returned with
//! display-ready date and time strings so every page renders them the same
//! way.
//!
//! Clean Architecture structure:
//! - `domain/` - Event entity, category inference, repository trait
//! - `application/` - List use case and the unconfigured-mode fallback
//! - `infra/` - Google Calendar v3 client
//! - `presentation/` - HTTP handlers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::EventsConfig;
pub use domain::category::EventCategory;
pub use domain::entity::CalendarEvent;
pub use domain::repository::CalendarRepository;
pub use error::{EventsError, EventsResult};
pub use infra::google_calendar::GoogleCalendarClient;
pub use presentation::router::events_router;
