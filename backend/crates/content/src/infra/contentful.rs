//! Contentful Delivery API Client
//!
//! Read-only queries against `cdn.contentful.com`. Entries arrive as loose
//! `sys`/`fields` JSON with linked assets delivered separately under
//! `includes.Asset`; the shaping functions here flatten that into the domain
//! entities.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entity::{Fundraiser, NewsArticle, VolunteerOpportunity};
use crate::domain::repository::{
    FundraiserRepository, NewsRepository, OpportunityRepository,
};
use crate::domain::slug::slugify;
use crate::error::{ContentError, ContentResult};

const DELIVERY_BASE_URL: &str = "https://cdn.contentful.com";

// ============================================================================
// Raw wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct EntryCollection {
    #[serde(default)]
    pub items: Vec<RawEntry>,
    #[serde(default)]
    pub includes: Option<Includes>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Sys {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<RawEntry>,
}

// ============================================================================
// Client
// ============================================================================

/// Read client for the delivery API.
pub struct ContentfulDeliveryClient {
    http: reqwest::Client,
    space_id: String,
    environment: String,
    access_token: String,
}

impl ContentfulDeliveryClient {
    pub fn new(
        http: reqwest::Client,
        space_id: impl Into<String>,
        environment: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            space_id: space_id.into(),
            environment: environment.into(),
            access_token: access_token.into(),
        }
    }

    async fn get_entries(&self, params: &[(&str, &str)]) -> ContentResult<EntryCollection> {
        let url = format!(
            "{}/spaces/{}/environments/{}/entries",
            DELIVERY_BASE_URL, self.space_id, self.environment
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ContentError::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

// ============================================================================
// Field extraction
// ============================================================================

fn str_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields.get(name).and_then(Value::as_str).map(str::to_string)
}

fn num_field(fields: &Map<String, Value>, name: &str) -> Option<f64> {
    fields.get(name).and_then(Value::as_f64)
}

fn int_field(fields: &Map<String, Value>, name: &str) -> Option<i64> {
    fields.get(name).and_then(Value::as_i64)
}

fn bool_field(fields: &Map<String, Value>, name: &str) -> Option<bool> {
    fields.get(name).and_then(Value::as_bool)
}

/// Entry fields reference assets as `{"sys": {"linkType": "Asset", "id": ..}}`.
fn linked_asset_id<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name)?.pointer("/sys/id")?.as_str()
}

/// Protocol-relative asset URLs are forced to HTTPS.
fn absolute_https(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        url.to_string()
    }
}

pub(crate) fn article_from_entry(entry: &RawEntry, includes: Option<&Includes>) -> NewsArticle {
    let fields = &entry.fields;
    let title = str_field(fields, "title").unwrap_or_default();

    let (featured_image, image_alt) = linked_asset_id(fields, "featuredImage")
        .and_then(|asset_id| {
            let assets = &includes?.assets;
            let asset = assets.iter().find(|a| a.sys.id == asset_id)?;
            let url = asset.fields.get("file")?.pointer("/url")?.as_str()?;
            let alt = str_field(&asset.fields, "description").unwrap_or_else(|| title.clone());
            Some((absolute_https(url), alt))
        })
        .map(|(url, alt)| (Some(url), Some(alt)))
        .unwrap_or((None, None));

    NewsArticle {
        id: entry.sys.id.clone(),
        excerpt: str_field(fields, "excerpt"),
        content: fields.get("content").cloned(),
        publish_date: str_field(fields, "publishDate"),
        category: str_field(fields, "category"),
        slug: str_field(fields, "slug").unwrap_or_else(|| slugify(&title)),
        featured_image,
        image_alt,
        title,
    }
}

pub(crate) fn opportunity_from_entry(entry: &RawEntry) -> VolunteerOpportunity {
    let fields = &entry.fields;
    VolunteerOpportunity {
        id: entry.sys.id.clone(),
        title: str_field(fields, "title").unwrap_or_default(),
        description: str_field(fields, "description"),
        spots: int_field(fields, "spots").unwrap_or(0),
        date: str_field(fields, "date"),
        time: str_field(fields, "time"),
        location: str_field(fields, "location"),
        google_form_url: str_field(fields, "googleFormUrl"),
        image: fields.get("image").cloned(),
    }
}

pub(crate) fn fundraiser_from_entry(entry: &RawEntry) -> Fundraiser {
    let fields = &entry.fields;
    Fundraiser {
        id: entry.sys.id.clone(),
        title: str_field(fields, "title").unwrap_or_default(),
        description: str_field(fields, "description"),
        fundraiser_type: str_field(fields, "fundraiserType"),
        goal: num_field(fields, "goal"),
        raised: num_field(fields, "raised"),
        unit: str_field(fields, "unit"),
        start_date: str_field(fields, "startDate"),
        end_date: str_field(fields, "endDate"),
        is_active: bool_field(fields, "isActive").unwrap_or(false),
        pdf_url: str_field(fields, "pdfUrl"),
        category: str_field(fields, "category"),
    }
}

// ============================================================================
// Repository implementations
// ============================================================================

impl NewsRepository for ContentfulDeliveryClient {
    async fn find_by_slug(&self, slug: &str) -> ContentResult<Option<NewsArticle>> {
        let collection = self
            .get_entries(&[
                ("content_type", "newsArticle"),
                ("fields.slug", slug),
                ("limit", "1"),
            ])
            .await?;

        Ok(collection
            .items
            .first()
            .map(|entry| article_from_entry(entry, collection.includes.as_ref())))
    }

    async fn find_by_title_phrase(&self, phrase: &str) -> ContentResult<Option<NewsArticle>> {
        let collection = self
            .get_entries(&[
                ("content_type", "newsArticle"),
                ("fields.title[match]", phrase),
                ("limit", "1"),
            ])
            .await?;

        Ok(collection
            .items
            .first()
            .map(|entry| article_from_entry(entry, collection.includes.as_ref())))
    }

    async fn recent(&self, limit: u32) -> ContentResult<Vec<NewsArticle>> {
        let limit = limit.to_string();
        let collection = self
            .get_entries(&[
                ("content_type", "newsArticle"),
                ("order", "-fields.publishDate"),
                ("limit", &limit),
            ])
            .await?;

        Ok(collection
            .items
            .iter()
            .map(|entry| article_from_entry(entry, collection.includes.as_ref()))
            .collect())
    }
}

impl OpportunityRepository for ContentfulDeliveryClient {
    async fn list_recent(&self, limit: u32) -> ContentResult<Vec<VolunteerOpportunity>> {
        let limit = limit.to_string();
        let collection = self
            .get_entries(&[
                ("content_type", "volunteerOpportunity"),
                ("order", "-sys.createdAt"),
                ("limit", &limit),
            ])
            .await?;

        Ok(collection.items.iter().map(opportunity_from_entry).collect())
    }
}

impl FundraiserRepository for ContentfulDeliveryClient {
    async fn list_active(&self) -> ContentResult<Vec<Fundraiser>> {
        let collection = self
            .get_entries(&[
                ("content_type", "fundraiser"),
                ("fields.isActive", "true"),
                ("order", "-fields.startDate"),
            ])
            .await?;

        Ok(collection.items.iter().map(fundraiser_from_entry).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(fields: Value) -> RawEntry {
        serde_json::from_value(json!({ "sys": { "id": "entry-1" }, "fields": fields })).unwrap()
    }

    #[test]
    fn test_article_derives_slug_when_field_absent() {
        let entry = entry(json!({
            "title": "Fall Festival Success!",
            "excerpt": "What a day.",
            "publishDate": "2024-10-16",
            "category": "event",
        }));

        let article = article_from_entry(&entry, None);
        assert_eq!(article.slug, "fall-festival-success");
        assert_eq!(article.excerpt.as_deref(), Some("What a day."));
    }

    #[test]
    fn test_article_prefers_explicit_slug() {
        let entry = entry(json!({ "title": "Fall Festival Success!", "slug": "fall-festival" }));
        assert_eq!(article_from_entry(&entry, None).slug, "fall-festival");
    }

    #[test]
    fn test_article_resolves_featured_image_from_includes() {
        let entry = entry(json!({
            "title": "Art Night",
            "featuredImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "asset-9" } },
        }));
        let includes: Includes = serde_json::from_value(json!({
            "Asset": [{
                "sys": { "id": "asset-9" },
                "fields": {
                    "description": "Kids painting",
                    "file": { "url": "//images.ctfassets.net/x/art.jpg" }
                }
            }]
        }))
        .unwrap();

        let article = article_from_entry(&entry, Some(&includes));
        assert_eq!(
            article.featured_image.as_deref(),
            Some("https://images.ctfassets.net/x/art.jpg")
        );
        assert_eq!(article.image_alt.as_deref(), Some("Kids painting"));
    }

    #[test]
    fn test_article_image_alt_falls_back_to_title() {
        let entry = entry(json!({
            "title": "Art Night",
            "featuredImage": { "sys": { "id": "asset-9" } },
        }));
        let includes: Includes = serde_json::from_value(json!({
            "Asset": [{
                "sys": { "id": "asset-9" },
                "fields": { "file": { "url": "https://images.ctfassets.net/x/art.jpg" } }
            }]
        }))
        .unwrap();

        let article = article_from_entry(&entry, Some(&includes));
        assert_eq!(article.image_alt.as_deref(), Some("Art Night"));
    }

    #[test]
    fn test_opportunity_missing_spots_reads_as_zero() {
        let entry = entry(json!({ "title": "Bake Sale Table" }));
        assert_eq!(opportunity_from_entry(&entry).spots, 0);
    }

    #[test]
    fn test_fundraiser_shape() {
        let entry = entry(json!({
            "title": "Read-a-thon",
            "goal": 1000,
            "raised": 250.5,
            "isActive": true,
        }));

        let fundraiser = fundraiser_from_entry(&entry);
        assert_eq!(fundraiser.goal, Some(1000.0));
        assert_eq!(fundraiser.raised, Some(250.5));
        assert!(fundraiser.is_active);
    }

    #[test]
    fn test_collection_tolerates_missing_includes() {
        let collection: EntryCollection =
            serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(collection.items.is_empty());
        assert!(collection.includes.is_none());
    }
}
