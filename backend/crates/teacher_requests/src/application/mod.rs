//! Teacher Requests Application Layer

pub mod config;
pub mod fetch_requests;
