//! Infrastructure Layer - Contentful API clients

pub mod contentful;
pub mod management;
