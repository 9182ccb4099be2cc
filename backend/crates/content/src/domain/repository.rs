//! Repository Traits
//!
//! Interfaces over the content store. Implementations live in the
//! infrastructure layer; tests substitute in-memory fakes.

use crate::domain::entity::{Fundraiser, NewsArticle, VolunteerOpportunity};
use crate::error::ContentResult;

/// Outcome of a capacity decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotsUpdate {
    /// The counter was decremented and the entry republished.
    Updated { previous: i64, current: i64 },
    /// The counter was already zero; nothing was written.
    SoldOut,
}

/// News article queries
#[trait_variant::make(NewsRepository: Send)]
pub trait LocalNewsRepository {
    /// Entry whose dedicated slug field equals `slug` exactly.
    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<NewsArticle>>;

    /// Entry whose title contains `phrase` (case-insensitive full-text match).
    async fn find_by_title_phrase(&self, phrase: &str) -> ContentResult<Option<NewsArticle>>;

    /// Most recent articles by publish date, newest first.
    async fn recent(&self, limit: u32) -> ContentResult<Vec<NewsArticle>>;
}

/// Volunteer opportunity queries
#[trait_variant::make(OpportunityRepository: Send)]
pub trait LocalOpportunityRepository {
    /// Most recently created opportunities, newest first.
    async fn list_recent(&self, limit: u32) -> ContentResult<Vec<VolunteerOpportunity>>;
}

/// Fundraiser queries
#[trait_variant::make(FundraiserRepository: Send)]
pub trait LocalFundraiserRepository {
    /// Active fundraisers, newest start date first.
    async fn list_active(&self) -> ContentResult<Vec<Fundraiser>>;
}

/// Capacity counter mutation - the only write this system performs
#[trait_variant::make(CapacityRepository: Send)]
pub trait LocalCapacityRepository {
    /// Decrement the opportunity's spots counter by one, guarded by a
    /// positive-count check. Not transactional: two concurrent calls can
    /// both observe the same count.
    async fn decrement_spots(&self, entry_id: &str) -> ContentResult<SpotsUpdate>;
}
