//! Content Store Proxy Module
//!
//! Thin server-side proxy over the headless CMS holding news articles,
//! volunteer opportunities, and fundraiser records.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, slug rules, repository traits
//! - `application/` - Use cases (list/resolve/decrement) and fallback strategy
//! - `infra/` - Contentful delivery and management API clients
//! - `presentation/` - HTTP handlers
//!
//! ## Availability Model
//! - Read endpoints never leak upstream details; failures become 502s
//! - The opportunity list degrades to an injected fallback dataset rather
//!   than erroring, so the volunteer page stays renderable
//! - The capacity decrement is best-effort: concurrent signups can race past
//!   the spots check, an accepted limitation of the read-then-write update

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ContentConfig;
pub use application::fallback::{FallbackProvider, StaticFallback};
pub use domain::repository::{CapacityRepository, SpotsUpdate};
pub use error::{ContentError, ContentResult};
pub use infra::contentful::ContentfulDeliveryClient;
pub use infra::management::ContentfulManagementClient;
pub use presentation::router::content_router;

#[cfg(test)]
mod tests;
