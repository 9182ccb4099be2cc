//! Volunteer DTOs

use serde::{Deserialize, Serialize};

use crate::application::submit_signup::{CapacityStatus, SignupOutcome, SinkStatus};
use crate::domain::sink::SignupRow;
use crate::domain::submission::SignupDraft;

/// Raw signup body. Everything optional; validation happens in the domain.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
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

impl From<SignupRequest> for SignupDraft {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
            opportunity_id: req.opportunity_id,
            opportunity_title: req.opportunity_title,
            opportunity_date: req.opportunity_date,
            opportunity_time: req.opportunity_time,
            opportunity_location: req.opportunity_location,
        }
    }
}

/// Per-sink signup report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupReportDto {
    pub google_sheets: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_row: Option<String>,
    pub volunteer_email: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volunteer_email_id: Option<String>,
    pub pto_email: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pto_email_id: Option<String>,
    pub contentful: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contentful_update: Option<CapacityUpdateDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityUpdateDto {
    pub previous_spots: i64,
    pub current_spots: i64,
}

impl From<SignupOutcome> for SignupReportDto {
    fn from(outcome: SignupOutcome) -> Self {
        let (google_sheets, sheet_row) = split_sink(outcome.sheet, "logged");
        let (volunteer_email, volunteer_email_id) =
            split_sink(outcome.confirmation_email, "sent");
        let (pto_email, pto_email_id) = split_sink(outcome.notification_email, "sent");
        let (contentful, contentful_update) = match outcome.capacity {
            CapacityStatus::Updated { previous, current } => (
                "updated",
                Some(CapacityUpdateDto {
                    previous_spots: previous,
                    current_spots: current,
                }),
            ),
            CapacityStatus::SoldOut => ("sold_out", None),
            CapacityStatus::Failed => ("failed", None),
            CapacityStatus::Disabled => ("disabled", None),
        };

        Self {
            google_sheets,
            sheet_row,
            volunteer_email,
            volunteer_email_id,
            pto_email,
            pto_email_id,
            contentful,
            contentful_update,
        }
    }
}

fn split_sink(status: SinkStatus, completed: &'static str) -> (&'static str, Option<String>) {
    match status {
        SinkStatus::Completed(reference) => (completed, Some(reference)),
        SinkStatus::Failed => ("failed", None),
        SinkStatus::Disabled => ("disabled", None),
    }
}

/// Listing payload with an explicit count for quick dashboards.
#[derive(Debug, Serialize)]
pub struct SignupListDto {
    pub signups: Vec<SignupRow>,
    pub count: usize,
}

impl SignupListDto {
    pub fn from_rows(signups: Vec<SignupRow>) -> Self {
        let count = signups.len();
        Self { signups, count }
    }
}
