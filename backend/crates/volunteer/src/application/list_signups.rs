//! List Signups Use Case

use std::sync::Arc;

use crate::domain::sink::{SignupLog, SignupRow};
use crate::error::{SignupError, SignupResult};

/// List Signups Use Case
///
/// The read side of the signup log. Unlike the write path this does not
/// degrade: with no log configured there is nothing meaningful to return.
pub struct ListSignupsUseCase<L>
where
    L: SignupLog,
{
    log: Option<Arc<L>>,
}

impl<L> ListSignupsUseCase<L>
where
    L: SignupLog,
{
    pub fn new(log: Option<Arc<L>>) -> Self {
        Self { log }
    }

    pub async fn execute(&self) -> SignupResult<Vec<SignupRow>> {
        let log = self.log.as_ref().ok_or(SignupError::NotConfigured)?;
        let rows = log.list().await?;
        tracing::debug!(count = rows.len(), "Listed signups");
        Ok(rows)
    }
}
