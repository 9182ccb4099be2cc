//! Sheets-Backed Signup Log
//!
//! Signups land as one row per submission on a dedicated tab. Column order
//! is the tab's contract; the listing side reads the header row back instead
//! of hard-coding it, so operators can relabel columns without a deploy.

use std::sync::Arc;

use platform::google::SheetsClient;

use crate::domain::sink::{SignupLog, SignupRow};
use crate::domain::submission::SignupRecord;
use crate::error::SignupResult;

pub const DEFAULT_RANGE: &str = "VolunteerSignups!A:K";

pub struct SheetsSignupLog {
    sheets: Arc<SheetsClient>,
    range: String,
}

impl SheetsSignupLog {
    pub fn new(sheets: Arc<SheetsClient>, range: impl Into<String>) -> Self {
        Self {
            sheets,
            range: range.into(),
        }
    }
}

impl SignupLog for SheetsSignupLog {
    async fn append(&self, record: &SignupRecord) -> SignupResult<String> {
        let row = sheet_row(record);
        let updated_range = self.sheets.values_append(&self.range, row).await?;
        Ok(updated_range)
    }

    async fn list(&self) -> SignupResult<Vec<SignupRow>> {
        let rows = self.sheets.values_get(&self.range).await?;
        Ok(rows_to_records(rows))
    }
}

/// The A:K column layout. New signups always enter as `pending`; status is
/// advanced by hand in the sheet.
fn sheet_row(record: &SignupRecord) -> Vec<String> {
    let submission = &record.submission;
    let opt = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        record.timestamp.clone(),
        submission.opportunity_id.clone(),
        opt(&submission.opportunity_title),
        submission.name.clone(),
        submission.email.clone(),
        opt(&submission.phone),
        opt(&submission.message),
        opt(&submission.opportunity_date),
        opt(&submission.opportunity_time),
        opt(&submission.opportunity_location),
        "pending".to_string(),
    ]
}

/// First row is the header; remaining rows become header-keyed maps. Short
/// rows pad with empty strings, fully blank rows are dropped.
fn rows_to_records(rows: Vec<Vec<String>>) -> Vec<SignupRow> {
    let mut rows = rows.into_iter();
    let Some(headers) = rows.next() else {
        return Vec::new();
    };

    rows.filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}
