//! Events Application Configuration

/// Events application configuration
#[derive(Debug, Clone)]
pub struct EventsConfig {
    /// Events returned when the request does not ask for a count
    pub default_max_results: u32,
    /// Calendar queried when the request does not name one
    pub calendar_id: Option<String>,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            default_max_results: 5,
            calendar_id: None,
        }
    }
}
