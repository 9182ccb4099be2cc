//! Content Entities
//!
//! Read-shaped views over externally managed CMS entries. This system never
//! owns these records; it fetches, reshapes, and forwards them. Free-form
//! fields (rich text bodies, image link objects) stay as raw JSON values.

use serde_json::Value;

/// A published news article.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<Value>,
    pub publish_date: Option<String>,
    pub category: Option<String>,
    /// Explicit slug field when the entry has one, otherwise derived
    /// from the title.
    pub slug: String,
    /// Absolute HTTPS URL of the featured image, when present.
    pub featured_image: Option<String>,
    pub image_alt: Option<String>,
}

/// A volunteer activity with a remaining-capacity counter.
#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerOpportunity {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub spots: i64,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub google_form_url: Option<String>,
    pub image: Option<Value>,
}

/// An active fundraising campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct Fundraiser {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub fundraiser_type: Option<String>,
    pub goal: Option<f64>,
    pub raised: Option<f64>,
    pub unit: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
    pub pdf_url: Option<String>,
    pub category: Option<String>,
}
