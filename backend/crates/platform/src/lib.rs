//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification from HTTP headers
//! - Rate limiting infrastructure
//! - A single-slot TTL cache for expensive upstream reads
//! - Google service-account authentication and the Sheets values API

pub mod cache;
pub mod client;
pub mod google;
pub mod rate_limit;
