//! Decrement Spots Use Case
//!
//! The single write this system performs against the content store. Used by
//! the standalone update endpoint and as one step of the signup orchestrator.

use std::sync::Arc;

use crate::domain::repository::{CapacityRepository, SpotsUpdate};
use crate::error::{ContentError, ContentResult};

/// Decrement Spots Use Case
pub struct DecrementSpotsUseCase<C>
where
    C: CapacityRepository,
{
    repo: Option<Arc<C>>,
}

impl<C> DecrementSpotsUseCase<C>
where
    C: CapacityRepository,
{
    pub fn new(repo: Option<Arc<C>>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, entry_id: &str) -> ContentResult<SpotsUpdate> {
        let repo = self.repo.as_ref().ok_or(ContentError::NotConfigured)?;

        let update = repo.decrement_spots(entry_id).await?;

        match update {
            SpotsUpdate::Updated { previous, current } => {
                tracing::info!(entry_id, previous, current, "Decremented spots");
            }
            SpotsUpdate::SoldOut => {
                tracing::info!(entry_id, "Spots already at zero; decrement skipped");
            }
        }

        Ok(update)
    }
}
