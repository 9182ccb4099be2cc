//! Application Layer - Use Cases

pub mod config;
pub mod decrement_spots;
pub mod fallback;
pub mod list_fundraisers;
pub mod list_news;
pub mod list_opportunities;
pub mod resolve_article;
