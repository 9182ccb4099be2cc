//! Volunteer Application Layer

pub mod config;
pub mod emails;
pub mod list_signups;
pub mod submit_signup;
