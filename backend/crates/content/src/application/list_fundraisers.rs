//! List Fundraisers Use Case

use std::sync::Arc;

use crate::application::fallback::FallbackProvider;
use crate::domain::entity::Fundraiser;
use crate::domain::repository::FundraiserRepository;
use crate::error::ContentResult;

/// List Fundraisers Use Case
pub struct ListFundraisersUseCase<F>
where
    F: FundraiserRepository,
{
    repo: Option<Arc<F>>,
    fallback: Arc<dyn FallbackProvider>,
}

impl<F> ListFundraisersUseCase<F>
where
    F: FundraiserRepository,
{
    pub fn new(repo: Option<Arc<F>>, fallback: Arc<dyn FallbackProvider>) -> Self {
        Self { repo, fallback }
    }

    pub async fn execute(&self) -> ContentResult<Vec<Fundraiser>> {
        let Some(repo) = &self.repo else {
            tracing::warn!("Content store unconfigured; serving fallback fundraisers");
            return Ok(self.fallback.fundraisers());
        };

        repo.list_active().await
    }
}
