//! Google Calendar Deep Links
//!
//! The confirmation email carries an "add to calendar" button. Google's
//! render endpoint takes the event inline, so no calendar API call is needed
//! to build it.

use chrono::{DateTime, Duration, NaiveDate, Utc};

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const EVENT_DURATION_HOURS: i64 = 1;

/// Deep link pre-filling a one-hour event, or `"#"` when the opportunity
/// has no usable date.
pub fn calendar_link(title: &str, date: Option<&str>, location: Option<&str>) -> String {
    let Some(start) = date.and_then(parse_start) else {
        return "#".to_string();
    };
    let end = start + Duration::hours(EVENT_DURATION_HOURS);

    let url = reqwest::Url::parse_with_params(
        RENDER_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", title),
            ("dates", &format!("{}/{}", stamp(start), stamp(end))),
            ("details", "PTO volunteer opportunity"),
            ("location", location.unwrap_or("School")),
        ],
    );

    match url {
        Ok(url) => url.to_string(),
        Err(_) => "#".to_string(),
    }
}

/// Accepts full timestamps or bare dates; bare dates start at midnight UTC.
fn parse_start(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(timed) = DateTime::parse_from_rfc3339(date) {
        return Some(timed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
}

fn stamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_for_bare_date() {
        let link = calendar_link("Book Fair Setup", Some("2026-10-12"), Some("School Gym"));
        assert!(link.starts_with(RENDER_URL));
        assert!(link.contains("action=TEMPLATE"));
        assert!(link.contains("20261012T000000Z%2F20261012T010000Z"));
    }

    #[test]
    fn test_link_for_timed_date() {
        let link = calendar_link("Setup", Some("2026-10-12T15:00:00-04:00"), None);
        // 3 PM EDT is 7 PM UTC, one-hour duration.
        assert!(link.contains("20261012T190000Z%2F20261012T200000Z"));
        assert!(link.contains("location=School"));
    }

    #[test]
    fn test_missing_or_unparseable_date_yields_anchor() {
        assert_eq!(calendar_link("Setup", None, None), "#");
        assert_eq!(calendar_link("Setup", Some("next Tuesday"), None), "#");
    }
}
