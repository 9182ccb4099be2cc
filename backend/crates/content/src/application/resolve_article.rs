//! Resolve Article Use Case
//!
//! Three-stage slug resolution. Slugs are not stored consistently - some
//! entries have an explicit slug field, most do not - so the resolver runs an
//! ordered list of strategies and stops at the first hit: explicit data beats
//! fuzzy text match beats the bounded derived-slug scan.

use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::domain::entity::NewsArticle;
use crate::domain::repository::NewsRepository;
use crate::domain::slug::slugify;
use crate::error::{ContentError, ContentResult};

/// Resolve Article Use Case
pub struct ResolveArticleUseCase<N>
where
    N: NewsRepository,
{
    repo: Arc<N>,
    config: Arc<ContentConfig>,
}

impl<N> ResolveArticleUseCase<N>
where
    N: NewsRepository,
{
    pub fn new(repo: Arc<N>, config: Arc<ContentConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, slug: &str) -> ContentResult<NewsArticle> {
        // Stage 1: dedicated slug field, exact match
        if let Some(article) = self.repo.find_by_slug(slug).await? {
            tracing::debug!(slug, stage = "exact", "Resolved article");
            return Ok(article);
        }

        // Stage 2: title phrase match, hyphens read as spaces
        let phrase = slug.replace('-', " ");
        if let Some(article) = self.repo.find_by_title_phrase(&phrase).await? {
            tracing::debug!(slug, stage = "title", "Resolved article");
            return Ok(article);
        }

        // Stage 3: bounded scan comparing slugs derived from titles
        let page = self.repo.recent(self.config.scan_page_size).await?;
        if let Some(article) = page.into_iter().find(|a| slugify(&a.title) == slug) {
            tracing::debug!(slug, stage = "derived", "Resolved article");
            return Ok(article);
        }

        Err(ContentError::NotFound)
    }
}
