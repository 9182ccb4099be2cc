//! List Opportunities Use Case

use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::application::fallback::FallbackProvider;
use crate::domain::entity::VolunteerOpportunity;
use crate::domain::repository::OpportunityRepository;
use crate::error::ContentResult;

/// List Opportunities Use Case
///
/// Recent opportunities with at least one open spot. This list backs the
/// public signup form, so availability wins over strictness: both a missing
/// configuration and an upstream failure degrade to the fallback dataset
/// with a success response.
pub struct ListOpportunitiesUseCase<O>
where
    O: OpportunityRepository,
{
    repo: Option<Arc<O>>,
    fallback: Arc<dyn FallbackProvider>,
    config: Arc<ContentConfig>,
}

impl<O> ListOpportunitiesUseCase<O>
where
    O: OpportunityRepository,
{
    pub fn new(
        repo: Option<Arc<O>>,
        fallback: Arc<dyn FallbackProvider>,
        config: Arc<ContentConfig>,
    ) -> Self {
        Self {
            repo,
            fallback,
            config,
        }
    }

    pub async fn execute(&self) -> ContentResult<Vec<VolunteerOpportunity>> {
        let opportunities = match &self.repo {
            None => {
                tracing::warn!("Content store unconfigured; serving fallback opportunities");
                self.fallback.opportunities()
            }
            Some(repo) => match repo.list_recent(self.config.opportunity_limit).await {
                Ok(list) => list,
                Err(e) => {
                    tracing::error!(error = %e, "Opportunity fetch failed; serving fallback");
                    self.fallback.opportunities()
                }
            },
        };

        Ok(opportunities
            .into_iter()
            .filter(|opp| opp.spots > 0)
            .collect())
    }
}
