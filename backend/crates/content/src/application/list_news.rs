//! List News Use Case

use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::application::fallback::FallbackProvider;
use crate::domain::entity::NewsArticle;
use crate::domain::repository::NewsRepository;
use crate::error::ContentResult;

/// List News Use Case
///
/// Latest articles, newest first. With no configured content store the
/// fallback dataset is served so the page stays renderable; a runtime
/// upstream failure is surfaced as an error.
pub struct ListNewsUseCase<N>
where
    N: NewsRepository,
{
    repo: Option<Arc<N>>,
    fallback: Arc<dyn FallbackProvider>,
    config: Arc<ContentConfig>,
}

impl<N> ListNewsUseCase<N>
where
    N: NewsRepository,
{
    pub fn new(
        repo: Option<Arc<N>>,
        fallback: Arc<dyn FallbackProvider>,
        config: Arc<ContentConfig>,
    ) -> Self {
        Self {
            repo,
            fallback,
            config,
        }
    }

    pub async fn execute(&self) -> ContentResult<Vec<NewsArticle>> {
        let Some(repo) = &self.repo else {
            tracing::warn!("Content store unconfigured; serving fallback news");
            return Ok(self.fallback.articles());
        };

        repo.recent(self.config.news_limit).await
    }
}
