//! Submit Signup Use Case
//!
//! The fan-out orchestrator. After validation and the rate-limit gate, each
//! sink runs in order inside its own error boundary: a broken spreadsheet,
//! mailer, or capacity store downgrades that sink's report entry, never the
//! signup itself. There is no rollback between sinks.

use std::sync::Arc;

use chrono::Utc;
use content::{CapacityRepository, SpotsUpdate};
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};

use crate::application::config::SignupConfig;
use crate::application::emails;
use crate::domain::sink::{Mailer, SignupLog};
use crate::domain::submission::{SignupDraft, SignupRecord, SignupSubmission};
use crate::error::{SignupError, SignupResult};

/// What a single sink did with the signup.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkStatus {
    /// Sink ran; carries its reference (sheet range or message id)
    Completed(String),
    /// Sink ran and failed; the signup still succeeded
    Failed,
    /// Sink has no configuration
    Disabled,
}

/// What the capacity decrement did.
#[derive(Debug, Clone, PartialEq)]
pub enum CapacityStatus {
    Updated { previous: i64, current: i64 },
    /// No spots left; skipping is not an error
    SoldOut,
    Failed,
    Disabled,
}

/// Per-sink report returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupOutcome {
    pub sheet: SinkStatus,
    pub confirmation_email: SinkStatus,
    pub capacity: CapacityStatus,
    pub notification_email: SinkStatus,
}

/// Submit Signup Use Case
pub struct SubmitSignupUseCase<L, M, C>
where
    L: SignupLog,
    M: Mailer,
    C: CapacityRepository,
{
    limiter: Arc<InMemoryRateLimitStore>,
    log: Option<Arc<L>>,
    mailer: Option<Arc<M>>,
    capacity: Option<Arc<C>>,
    config: Arc<SignupConfig>,
}

impl<L, M, C> SubmitSignupUseCase<L, M, C>
where
    L: SignupLog,
    M: Mailer,
    C: CapacityRepository,
{
    pub fn new(
        limiter: Arc<InMemoryRateLimitStore>,
        log: Option<Arc<L>>,
        mailer: Option<Arc<M>>,
        capacity: Option<Arc<C>>,
        config: Arc<SignupConfig>,
    ) -> Self {
        Self {
            limiter,
            log,
            mailer,
            capacity,
            config,
        }
    }

    /// Returns `Ok` whenever the submission itself is acceptable; sink
    /// failures surface only in the outcome.
    pub async fn execute(
        &self,
        client_key: &str,
        draft: SignupDraft,
    ) -> SignupResult<SignupOutcome> {
        if !self.limiter.allow(client_key, &self.config.rate_limit).await {
            return Err(SignupError::RateLimited);
        }

        let submission = SignupSubmission::sanitize(draft)?;
        let record = SignupRecord::new(submission, Utc::now());

        let sheet = self.log_signup(&record).await;
        let confirmation_email = self.send_confirmation(&record.submission).await;
        let capacity = self.decrement_capacity(&record.submission).await;
        let notification_email = self.send_notification(&record.submission).await;

        let outcome = SignupOutcome {
            sheet,
            confirmation_email,
            capacity,
            notification_email,
        };
        tracing::info!(
            opportunity_id = %record.submission.opportunity_id,
            outcome = ?outcome,
            "Processed volunteer signup"
        );
        Ok(outcome)
    }

    async fn log_signup(&self, record: &SignupRecord) -> SinkStatus {
        let Some(log) = &self.log else {
            return SinkStatus::Disabled;
        };
        match log.append(record).await {
            Ok(row_ref) => SinkStatus::Completed(row_ref),
            Err(e) => {
                tracing::warn!(error = %e, "Signup log append failed");
                SinkStatus::Failed
            }
        }
    }

    async fn send_confirmation(&self, submission: &SignupSubmission) -> SinkStatus {
        let Some(mailer) = &self.mailer else {
            return SinkStatus::Disabled;
        };
        let subject = format!("Volunteer Signup Confirmation - {}", submission.title());
        let html = emails::confirmation_html(submission);
        match mailer.send(&submission.email, &subject, &html).await {
            Ok(id) => SinkStatus::Completed(id),
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation email failed");
                SinkStatus::Failed
            }
        }
    }

    async fn decrement_capacity(&self, submission: &SignupSubmission) -> CapacityStatus {
        let Some(capacity) = &self.capacity else {
            return CapacityStatus::Disabled;
        };
        match capacity.decrement_spots(&submission.opportunity_id).await {
            Ok(SpotsUpdate::Updated { previous, current }) => {
                CapacityStatus::Updated { previous, current }
            }
            Ok(SpotsUpdate::SoldOut) => {
                tracing::debug!(
                    opportunity_id = %submission.opportunity_id,
                    "No spots left; capacity unchanged"
                );
                CapacityStatus::SoldOut
            }
            Err(e) => {
                tracing::warn!(error = %e, "Capacity decrement failed");
                CapacityStatus::Failed
            }
        }
    }

    async fn send_notification(&self, submission: &SignupSubmission) -> SinkStatus {
        let Some(mailer) = &self.mailer else {
            return SinkStatus::Disabled;
        };
        let subject = format!("New Volunteer Signup: {}", submission.title());
        let html = emails::notification_html(submission);
        match mailer.send(&self.config.pto_email, &subject, &html).await {
            Ok(id) => SinkStatus::Completed(id),
            Err(e) => {
                tracing::warn!(error = %e, "Notification email failed");
                SinkStatus::Failed
            }
        }
    }
}
