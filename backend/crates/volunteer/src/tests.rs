//! Cross-module tests for the volunteer crate
//!
//! Exercises the signup orchestrator against in-memory fakes, one per sink.

use std::sync::{Arc, Mutex};

use content::{CapacityRepository, ContentError, ContentResult, SpotsUpdate};
use platform::google::GoogleError;
use platform::rate_limit::InMemoryRateLimitStore;

use crate::application::config::SignupConfig;
use crate::application::submit_signup::{CapacityStatus, SinkStatus, SubmitSignupUseCase};
use crate::domain::sink::{Mailer, SignupLog, SignupRow};
use crate::domain::submission::{SignupDraft, SignupRecord};
use crate::error::{SignupError, SignupResult};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct MemoryLog {
    appended: Mutex<Vec<SignupRecord>>,
    fail: bool,
}

impl SignupLog for MemoryLog {
    async fn append(&self, record: &SignupRecord) -> SignupResult<String> {
        if self.fail {
            return Err(SignupError::Sheets(GoogleError::Status(500)));
        }
        let mut appended = self.appended.lock().unwrap();
        appended.push(record.clone());
        Ok(format!("Signups!A{0}:K{0}", appended.len() + 1))
    }

    async fn list(&self) -> SignupResult<Vec<SignupRow>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct MemoryMailer {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl Mailer for MemoryMailer {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> SignupResult<String> {
        if self.fail {
            return Err(SignupError::EmailStatus(500));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((to.to_string(), subject.to_string()));
        Ok(format!("msg-{}", sent.len()))
    }
}

struct FakeCapacity {
    spots: Mutex<i64>,
    fail: bool,
}

impl FakeCapacity {
    fn with_spots(spots: i64) -> Self {
        Self {
            spots: Mutex::new(spots),
            fail: false,
        }
    }
}

impl CapacityRepository for FakeCapacity {
    async fn decrement_spots(&self, _entry_id: &str) -> ContentResult<SpotsUpdate> {
        if self.fail {
            return Err(ContentError::UpstreamStatus(500));
        }
        let mut spots = self.spots.lock().unwrap();
        if *spots <= 0 {
            return Ok(SpotsUpdate::SoldOut);
        }
        let previous = *spots;
        *spots -= 1;
        Ok(SpotsUpdate::Updated {
            previous,
            current: *spots,
        })
    }
}

struct Harness {
    limiter: Arc<InMemoryRateLimitStore>,
    log: Arc<MemoryLog>,
    mailer: Arc<MemoryMailer>,
    capacity: Arc<FakeCapacity>,
}

impl Harness {
    fn new(spots: i64) -> Self {
        Self {
            limiter: Arc::new(InMemoryRateLimitStore::new()),
            log: Arc::new(MemoryLog::default()),
            mailer: Arc::new(MemoryMailer::default()),
            capacity: Arc::new(FakeCapacity::with_spots(spots)),
        }
    }

    fn use_case(&self) -> SubmitSignupUseCase<MemoryLog, MemoryMailer, FakeCapacity> {
        SubmitSignupUseCase::new(
            self.limiter.clone(),
            Some(self.log.clone()),
            Some(self.mailer.clone()),
            Some(self.capacity.clone()),
            Arc::new(SignupConfig::default()),
        )
    }
}

fn draft() -> SignupDraft {
    SignupDraft {
        name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        opportunity_id: Some("opp1".to_string()),
        opportunity_title: Some("Book Fair".to_string()),
        opportunity_date: Some("2026-10-12".to_string()),
        ..SignupDraft::default()
    }
}

// ============================================================================
// Orchestration
// ============================================================================

#[tokio::test]
async fn test_happy_path_runs_every_sink() {
    let harness = Harness::new(3);
    let outcome = harness.use_case().execute("1.2.3.4", draft()).await.unwrap();

    assert!(matches!(outcome.sheet, SinkStatus::Completed(_)));
    assert!(matches!(outcome.confirmation_email, SinkStatus::Completed(_)));
    assert_eq!(
        outcome.capacity,
        CapacityStatus::Updated {
            previous: 3,
            current: 2
        }
    );
    assert!(matches!(outcome.notification_email, SinkStatus::Completed(_)));

    let sent = harness.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "jane@example.com");
    assert_eq!(sent[0].1, "Volunteer Signup Confirmation - Book Fair");
    assert_eq!(sent[1].0, "pto@example.org");
    assert_eq!(sent[1].1, "New Volunteer Signup: Book Fair");
}

#[tokio::test]
async fn test_invalid_submission_touches_no_sink() {
    let harness = Harness::new(3);
    let bad = SignupDraft {
        email: None,
        ..draft()
    };
    let err = harness.use_case().execute("1.2.3.4", bad).await.unwrap_err();

    assert!(matches!(err, SignupError::Validation(_)));
    assert!(harness.log.appended.lock().unwrap().is_empty());
    assert!(harness.mailer.sent.lock().unwrap().is_empty());
    assert_eq!(*harness.capacity.spots.lock().unwrap(), 3);
}

#[tokio::test]
async fn test_sixth_request_in_window_is_throttled() {
    let harness = Harness::new(100);
    let use_case = harness.use_case();

    for _ in 0..5 {
        use_case.execute("9.9.9.9", draft()).await.unwrap();
    }
    let err = use_case.execute("9.9.9.9", draft()).await.unwrap_err();

    assert!(matches!(err, SignupError::RateLimited));
    // The throttled request reached no sink.
    assert_eq!(harness.log.appended.lock().unwrap().len(), 5);
    assert_eq!(harness.mailer.sent.lock().unwrap().len(), 10);
}

#[tokio::test]
async fn test_rate_limit_is_per_client() {
    let harness = Harness::new(100);
    let use_case = harness.use_case();

    for _ in 0..5 {
        use_case.execute("1.1.1.1", draft()).await.unwrap();
    }
    assert!(use_case.execute("2.2.2.2", draft()).await.is_ok());
}

#[tokio::test]
async fn test_sold_out_is_a_skip_not_a_failure() {
    let harness = Harness::new(0);
    let outcome = harness.use_case().execute("1.2.3.4", draft()).await.unwrap();

    assert_eq!(outcome.capacity, CapacityStatus::SoldOut);
    assert_eq!(*harness.capacity.spots.lock().unwrap(), 0);
    // The other sinks still ran.
    assert!(matches!(outcome.sheet, SinkStatus::Completed(_)));
    assert_eq!(harness.mailer.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_failing_log_does_not_fail_the_signup() {
    let harness = Harness::new(3);
    let log = Arc::new(MemoryLog {
        appended: Mutex::new(Vec::new()),
        fail: true,
    });
    let use_case = SubmitSignupUseCase::new(
        harness.limiter.clone(),
        Some(log),
        Some(harness.mailer.clone()),
        Some(harness.capacity.clone()),
        Arc::new(SignupConfig::default()),
    );

    let outcome = use_case.execute("1.2.3.4", draft()).await.unwrap();
    assert_eq!(outcome.sheet, SinkStatus::Failed);
    assert!(matches!(outcome.confirmation_email, SinkStatus::Completed(_)));
    assert_eq!(
        outcome.capacity,
        CapacityStatus::Updated {
            previous: 3,
            current: 2
        }
    );
}

#[tokio::test]
async fn test_failing_mailer_still_decrements_capacity() {
    let harness = Harness::new(3);
    let mailer = Arc::new(MemoryMailer {
        sent: Mutex::new(Vec::new()),
        fail: true,
    });
    let use_case = SubmitSignupUseCase::new(
        harness.limiter.clone(),
        Some(harness.log.clone()),
        Some(mailer),
        Some(harness.capacity.clone()),
        Arc::new(SignupConfig::default()),
    );

    let outcome = use_case.execute("1.2.3.4", draft()).await.unwrap();
    assert_eq!(outcome.confirmation_email, SinkStatus::Failed);
    assert_eq!(outcome.notification_email, SinkStatus::Failed);
    assert_eq!(*harness.capacity.spots.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_unconfigured_sinks_report_disabled() {
    let harness = Harness::new(3);
    let use_case = SubmitSignupUseCase::<MemoryLog, MemoryMailer, FakeCapacity>::new(
        harness.limiter.clone(),
        None,
        None,
        None,
        Arc::new(SignupConfig::default()),
    );

    let outcome = use_case.execute("1.2.3.4", draft()).await.unwrap();
    assert_eq!(outcome.sheet, SinkStatus::Disabled);
    assert_eq!(outcome.confirmation_email, SinkStatus::Disabled);
    assert_eq!(outcome.capacity, CapacityStatus::Disabled);
    assert_eq!(outcome.notification_email, SinkStatus::Disabled);
}

#[tokio::test]
async fn test_failing_capacity_reports_failed() {
    let harness = Harness::new(3);
    let capacity = Arc::new(FakeCapacity {
        spots: Mutex::new(3),
        fail: true,
    });
    let use_case = SubmitSignupUseCase::new(
        harness.limiter.clone(),
        Some(harness.log.clone()),
        Some(harness.mailer.clone()),
        Some(capacity),
        Arc::new(SignupConfig::default()),
    );

    let outcome = use_case.execute("1.2.3.4", draft()).await.unwrap();
    assert_eq!(outcome.capacity, CapacityStatus::Failed);
    assert!(matches!(outcome.notification_email, SinkStatus::Completed(_)));
}
