//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entity::{Fundraiser, NewsArticle, VolunteerOpportunity};
use crate::domain::repository::SpotsUpdate;

/// One article in GET /api/contentful/news responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<Value>,
    pub publish_date: Option<String>,
    pub category: Option<String>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

impl From<NewsArticle> for ArticleDto {
    fn from(article: NewsArticle) -> Self {
        Self {
            id: article.id,
            title: article.title,
            excerpt: article.excerpt,
            content: article.content,
            publish_date: article.publish_date,
            category: article.category,
            slug: article.slug,
            featured_image: article.featured_image,
            image_alt: article.image_alt,
        }
    }
}

/// One opportunity in GET /api/contentful/volunteer responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub spots: i64,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_form_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
}

impl From<VolunteerOpportunity> for OpportunityDto {
    fn from(opp: VolunteerOpportunity) -> Self {
        Self {
            id: opp.id,
            title: opp.title,
            description: opp.description,
            spots: opp.spots,
            date: opp.date,
            time: opp.time,
            location: opp.location,
            google_form_url: opp.google_form_url,
            image: opp.image,
        }
    }
}

/// One fundraiser in GET /api/fundraising responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundraiserDto {
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

impl From<Fundraiser> for FundraiserDto {
    fn from(f: Fundraiser) -> Self {
        Self {
            id: f.id,
            title: f.title,
            description: f.description,
            fundraiser_type: f.fundraiser_type,
            goal: f.goal,
            raised: f.raised,
            unit: f.unit,
            start_date: f.start_date,
            end_date: f.end_date,
            is_active: f.is_active,
            pdf_url: f.pdf_url,
            category: f.category,
        }
    }
}

/// Request for POST /api/contentful/volunteer/update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpotsRequest {
    #[serde(default)]
    pub opportunity_id: Option<String>,
}

/// Response data for POST /api/contentful/volunteer/update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotsUpdateDto {
    pub opportunity_id: String,
    pub previous_spots: i64,
    pub current_spots: i64,
}

impl SpotsUpdateDto {
    pub fn from_update(opportunity_id: &str, update: &SpotsUpdate) -> Option<Self> {
        match update {
            SpotsUpdate::Updated { previous, current } => Some(Self {
                opportunity_id: opportunity_id.to_string(),
                previous_spots: *previous,
                current_spots: *current,
            }),
            SpotsUpdate::SoldOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::slugify;

    #[test]
    fn test_article_dto_camel_case() {
        let dto = ArticleDto::from(NewsArticle {
            id: "a1".into(),
            title: "Fall Festival".into(),
            excerpt: None,
            content: None,
            publish_date: Some("2024-10-15".into()),
            category: None,
            slug: slugify("Fall Festival"),
            featured_image: None,
            image_alt: None,
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["publishDate"], "2024-10-15");
        assert_eq!(json["slug"], "fall-festival");
        assert!(json.get("featuredImage").is_none());
    }

    #[test]
    fn test_update_request_tolerates_missing_id() {
        let req: UpdateSpotsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.opportunity_id.is_none());
    }

    #[test]
    fn test_spots_update_dto_sold_out_is_none() {
        assert!(SpotsUpdateDto::from_update("x", &SpotsUpdate::SoldOut).is_none());
        let dto = SpotsUpdateDto::from_update(
            "x",
            &SpotsUpdate::Updated {
                previous: 3,
                current: 2,
            },
        )
        .unwrap();
        assert_eq!(dto.previous_spots, 3);
        assert_eq!(dto.current_spots, 2);
    }
}
