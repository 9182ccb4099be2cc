//! Fallback Content
//!
//! When the content store is unconfigured (or, for the volunteer list, simply
//! failing) the pages still need something to render. The fallback dataset is
//! an injectable strategy so tests can assert on degradation behavior without
//! simulating a real outage.

use crate::domain::entity::{Fundraiser, NewsArticle, VolunteerOpportunity};
use crate::domain::slug::slugify;

/// Source of static stand-in content.
pub trait FallbackProvider: Send + Sync {
    fn articles(&self) -> Vec<NewsArticle>;
    fn opportunities(&self) -> Vec<VolunteerOpportunity>;
    fn fundraisers(&self) -> Vec<Fundraiser>;
}

/// The built-in sample dataset.
pub struct StaticFallback;

impl FallbackProvider for StaticFallback {
    fn articles(&self) -> Vec<NewsArticle> {
        vec![
            sample_article(
                "fallback-news-1",
                "Welcome Back to School",
                "We are excited to kick off another great year together.",
                "2024-08-20",
                "announcement",
            ),
            sample_article(
                "fallback-news-2",
                "Fall Festival Planning Underway",
                "Mark your calendars - the festival returns this October.",
                "2024-09-05",
                "event",
            ),
        ]
    }

    fn opportunities(&self) -> Vec<VolunteerOpportunity> {
        vec![
            VolunteerOpportunity {
                id: "fallback-opp-1".to_string(),
                title: "Fall Festival Volunteers".to_string(),
                description: Some("Need 8 more parents for setup and cleanup".to_string()),
                spots: 8,
                date: Some("2024-10-15".to_string()),
                time: Some("3:00 PM".to_string()),
                location: Some("School Gym".to_string()),
                google_form_url: None,
                image: None,
            },
            VolunteerOpportunity {
                id: "fallback-opp-2".to_string(),
                title: "Library Helper".to_string(),
                description: Some("Tuesday mornings 9-11 AM".to_string()),
                spots: 1,
                date: Some("2024-10-08".to_string()),
                time: Some("9:00 AM".to_string()),
                location: Some("School Library".to_string()),
                google_form_url: None,
                image: None,
            },
        ]
    }

    fn fundraisers(&self) -> Vec<Fundraiser> {
        vec![Fundraiser {
            id: "fallback-fund-1".to_string(),
            title: "Box Tops for Education".to_string(),
            description: Some("Scan receipts all year long to earn for our school.".to_string()),
            fundraiser_type: Some("ongoing".to_string()),
            goal: Some(500.0),
            raised: Some(120.0),
            unit: Some("dollars".to_string()),
            start_date: Some("2024-08-01".to_string()),
            end_date: None,
            is_active: true,
            pdf_url: None,
            category: Some("school".to_string()),
        }]
    }
}

fn sample_article(
    id: &str,
    title: &str,
    excerpt: &str,
    publish_date: &str,
    category: &str,
) -> NewsArticle {
    NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: Some(excerpt.to_string()),
        content: None,
        publish_date: Some(publish_date.to_string()),
        category: Some(category.to_string()),
        slug: slugify(title),
        featured_image: None,
        image_alt: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_opportunities_have_open_spots() {
        for opp in StaticFallback.opportunities() {
            assert!(opp.spots > 0, "{} has no spots", opp.title);
        }
    }

    #[test]
    fn test_fallback_articles_carry_derived_slugs() {
        for article in StaticFallback.articles() {
            assert_eq!(article.slug, slugify(&article.title));
        }
    }
}
