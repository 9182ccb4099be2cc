//! Cross-module tests for the content crate
//!
//! Exercises the use cases against in-memory fake repositories.

use std::sync::{Arc, Mutex};

use crate::application::config::ContentConfig;
use crate::application::fallback::{FallbackProvider, StaticFallback};
use crate::application::list_opportunities::ListOpportunitiesUseCase;
use crate::application::resolve_article::ResolveArticleUseCase;
use crate::domain::entity::{NewsArticle, VolunteerOpportunity};
use crate::domain::repository::{NewsRepository, OpportunityRepository};
use crate::domain::slug::slugify;
use crate::error::{ContentError, ContentResult};

// ============================================================================
// Fakes
// ============================================================================

struct StoredArticle {
    explicit_slug: Option<String>,
    article: NewsArticle,
}

/// In-memory news store that records which resolution stages were queried.
struct FakeNewsRepository {
    articles: Vec<StoredArticle>,
    stages_hit: Mutex<Vec<&'static str>>,
    fail: bool,
}

impl FakeNewsRepository {
    fn new(articles: Vec<StoredArticle>) -> Self {
        Self {
            articles,
            stages_hit: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            articles: Vec::new(),
            stages_hit: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn stages(&self) -> Vec<&'static str> {
        self.stages_hit.lock().unwrap().clone()
    }

    fn check_fail(&self) -> ContentResult<()> {
        if self.fail {
            Err(ContentError::UpstreamStatus(500))
        } else {
            Ok(())
        }
    }
}

fn article(title: &str, explicit_slug: Option<&str>) -> StoredArticle {
    StoredArticle {
        explicit_slug: explicit_slug.map(str::to_string),
        article: NewsArticle {
            id: slugify(title),
            title: title.to_string(),
            excerpt: None,
            content: None,
            publish_date: None,
            category: None,
            slug: explicit_slug
                .map(str::to_string)
                .unwrap_or_else(|| slugify(title)),
            featured_image: None,
            image_alt: None,
        },
    }
}

impl NewsRepository for FakeNewsRepository {
    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<NewsArticle>> {
        self.check_fail()?;
        self.stages_hit.lock().unwrap().push("exact");
        Ok(self
            .articles
            .iter()
            .find(|stored| stored.explicit_slug.as_deref() == Some(slug))
            .map(|stored| stored.article.clone()))
    }

    async fn find_by_title_phrase(&self, phrase: &str) -> ContentResult<Option<NewsArticle>> {
        self.check_fail()?;
        self.stages_hit.lock().unwrap().push("title");
        let phrase = phrase.to_lowercase();
        Ok(self
            .articles
            .iter()
            .find(|stored| stored.article.title.to_lowercase().contains(&phrase))
            .map(|stored| stored.article.clone()))
    }

    async fn recent(&self, limit: u32) -> ContentResult<Vec<NewsArticle>> {
        self.check_fail()?;
        self.stages_hit.lock().unwrap().push("derived");
        Ok(self
            .articles
            .iter()
            .take(limit as usize)
            .map(|stored| stored.article.clone())
            .collect())
    }
}

struct FakeOpportunityRepository {
    opportunities: Vec<VolunteerOpportunity>,
    fail: bool,
}

impl OpportunityRepository for FakeOpportunityRepository {
    async fn list_recent(&self, _limit: u32) -> ContentResult<Vec<VolunteerOpportunity>> {
        if self.fail {
            return Err(ContentError::UpstreamStatus(503));
        }
        Ok(self.opportunities.clone())
    }
}

fn opportunity(title: &str, spots: i64) -> VolunteerOpportunity {
    VolunteerOpportunity {
        id: slugify(title),
        title: title.to_string(),
        description: None,
        spots,
        date: None,
        time: None,
        location: None,
        google_form_url: None,
        image: None,
    }
}

fn config() -> Arc<ContentConfig> {
    Arc::new(ContentConfig::default())
}

// ============================================================================
// Resolver staging
// ============================================================================

#[tokio::test]
async fn test_explicit_slug_resolves_without_later_stages() {
    let repo = Arc::new(FakeNewsRepository::new(vec![article(
        "Fall Festival Recap",
        Some("fall-festival"),
    )]));
    let use_case = ResolveArticleUseCase::new(repo.clone(), config());

    let resolved = use_case.execute("fall-festival").await.unwrap();
    assert_eq!(resolved.title, "Fall Festival Recap");
    assert_eq!(repo.stages(), vec!["exact"]);
}

#[tokio::test]
async fn test_title_phrase_resolves_at_stage_two() {
    let repo = Arc::new(FakeNewsRepository::new(vec![article(
        "Fall Festival Success!",
        None,
    )]));
    let use_case = ResolveArticleUseCase::new(repo.clone(), config());

    let resolved = use_case.execute("fall-festival").await.unwrap();
    assert_eq!(resolved.title, "Fall Festival Success!");
    assert_eq!(repo.stages(), vec!["exact", "title"]);
}

#[tokio::test]
async fn test_derived_slug_resolves_at_stage_three() {
    // "back to school night" is not a phrase of the hyphenated title, so
    // stage 2 misses and only the derived-slug scan can find it.
    let repo = Arc::new(FakeNewsRepository::new(vec![
        article("Bake Sale Totals", None),
        article("Back-to-School Night", None),
    ]));
    let use_case = ResolveArticleUseCase::new(repo.clone(), config());

    let resolved = use_case.execute("back-to-school-night").await.unwrap();
    assert_eq!(resolved.title, "Back-to-School Night");
    assert_eq!(repo.stages(), vec!["exact", "title", "derived"]);
}

#[tokio::test]
async fn test_exhaustion_is_not_found() {
    let repo = Arc::new(FakeNewsRepository::new(vec![article("Bake Sale", None)]));
    let use_case = ResolveArticleUseCase::new(repo.clone(), config());

    let err = use_case.execute("movie-night").await.unwrap_err();
    assert!(matches!(err, ContentError::NotFound));
    assert_eq!(repo.stages(), vec!["exact", "title", "derived"]);
}

#[tokio::test]
async fn test_upstream_failure_is_not_conflated_with_not_found() {
    let repo = Arc::new(FakeNewsRepository::failing());
    let use_case = ResolveArticleUseCase::new(repo, config());

    let err = use_case.execute("anything").await.unwrap_err();
    assert!(matches!(err, ContentError::UpstreamStatus(_)));
}

#[tokio::test]
async fn test_scan_respects_page_bound() {
    // The matching article sits beyond the configured scan page.
    let repo = Arc::new(FakeNewsRepository::new(vec![
        article("Bake Sale", None),
        article("Movie Night!", None),
    ]));
    let use_case = ResolveArticleUseCase::new(
        repo,
        Arc::new(ContentConfig {
            scan_page_size: 1,
            ..ContentConfig::default()
        }),
    );

    let err = use_case.execute("movie-night").await.unwrap_err();
    assert!(matches!(err, ContentError::NotFound));
}

// ============================================================================
// Opportunity list degradation
// ============================================================================

#[tokio::test]
async fn test_opportunities_filtered_to_open_spots() {
    let repo = Arc::new(FakeOpportunityRepository {
        opportunities: vec![opportunity("Full", 0), opportunity("Open", 3)],
        fail: false,
    });
    let use_case = ListOpportunitiesUseCase::new(Some(repo), Arc::new(StaticFallback), config());

    let list = use_case.execute().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Open");
}

#[tokio::test]
async fn test_opportunities_fall_back_on_upstream_failure() {
    let repo = Arc::new(FakeOpportunityRepository {
        opportunities: Vec::new(),
        fail: true,
    });
    let use_case = ListOpportunitiesUseCase::new(Some(repo), Arc::new(StaticFallback), config());

    let list = use_case.execute().await.unwrap();
    assert_eq!(list, StaticFallback.opportunities());
}

#[tokio::test]
async fn test_opportunities_fall_back_when_unconfigured() {
    let use_case = ListOpportunitiesUseCase::<FakeOpportunityRepository>::new(
        None,
        Arc::new(StaticFallback),
        config(),
    );

    let list = use_case.execute().await.unwrap();
    assert!(!list.is_empty());
}
