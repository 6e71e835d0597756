//! Client for the blog insights HTTP API.

mod client;

pub use client::{BlogInsightsClient, BlogStats, ErrorResponse, SdkError};
