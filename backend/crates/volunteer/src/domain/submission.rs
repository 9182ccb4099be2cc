//! Signup Submission
//!
//! Sanitization happens once, at the boundary: every later stage (sheet row,
//! emails, capacity decrement) works from the cleaned submission and never
//! re-validates.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::SignupError;

const NAME_CAP: usize = 100;
const EMAIL_CAP: usize = 254;
const PHONE_CAP: usize = 20;
const MESSAGE_CAP: usize = 1000;
const TITLE_CAP: usize = 200;
const DATE_CAP: usize = 50;
const TIME_CAP: usize = 50;
const LOCATION_CAP: usize = 200;

/// Untrusted request fields, exactly as deserialized.
#[derive(Debug, Default, Clone)]
pub struct SignupDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub opportunity_id: Option<String>,
    pub opportunity_title: Option<String>,
    pub opportunity_date: Option<String>,
    pub opportunity_time: Option<String>,
    pub opportunity_location: Option<String>,
}

/// A validated signup, trimmed and capped.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub opportunity_id: String,
    pub opportunity_title: Option<String>,
    pub opportunity_date: Option<String>,
    pub opportunity_time: Option<String>,
    pub opportunity_location: Option<String>,
}

impl SignupSubmission {
    /// Trim, cap, and validate a draft. Fails without any side effects.
    pub fn sanitize(draft: SignupDraft) -> Result<Self, SignupError> {
        let name = clean(draft.name, NAME_CAP);
        let email = clean(draft.email, EMAIL_CAP).map(|e| e.to_lowercase());
        let opportunity_id = draft
            .opportunity_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let (Some(name), Some(email), Some(opportunity_id)) = (name, email, opportunity_id) else {
            return Err(SignupError::Validation("Missing required fields".to_string()));
        };

        if !valid_email(&email) {
            return Err(SignupError::Validation("Invalid email format".to_string()));
        }

        Ok(Self {
            name,
            email,
            phone: clean(draft.phone, PHONE_CAP),
            message: clean(draft.message, MESSAGE_CAP),
            opportunity_id,
            opportunity_title: clean(draft.opportunity_title, TITLE_CAP),
            opportunity_date: clean(draft.opportunity_date, DATE_CAP),
            opportunity_time: clean(draft.opportunity_time, TIME_CAP),
            opportunity_location: clean(draft.opportunity_location, LOCATION_CAP),
        })
    }

    pub fn title(&self) -> &str {
        self.opportunity_title.as_deref().unwrap_or("")
    }
}

/// A submission stamped at receipt time, ready for the sinks.
#[derive(Debug, Clone)]
pub struct SignupRecord {
    pub timestamp: String,
    pub submission: SignupSubmission,
}

impl SignupRecord {
    pub fn new(submission: SignupSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            submission,
        }
    }
}

fn clean(value: Option<String>, cap: usize) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(cap).collect())
}

/// Syntactic check only: one `@` with a dotted, whitespace-free domain.
fn valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
