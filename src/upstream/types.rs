//! Upstream request description and error definitions.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Errors that can occur during a single upstream attempt.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection or transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The attempt exceeded the configured timeout.
    #[error("Upstream timeout after {0} seconds")]
    Timeout(u64),

    /// The upstream answered with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Decode(String),

    /// A configured header could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// A fully-resolved upstream GET: target URL plus the headers sent with it.
#[derive(Clone)]
pub struct UpstreamRequest {
    pub url: String,
    pub headers: HeaderMap,
}

impl UpstreamRequest {
    /// Create a request with no extra headers.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Build the blog listing request from configuration.
    ///
    /// The shared secret header is marked sensitive so it never shows up in
    /// debug output.
    pub fn from_config(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let name = HeaderName::from_bytes(config.secret_header.as_bytes())
            .map_err(|e| UpstreamError::InvalidHeader(format!("{}: {}", config.secret_header, e)))?;
        let mut value = HeaderValue::from_str(&config.admin_secret)
            .map_err(|e| UpstreamError::InvalidHeader(format!("{}: {}", config.secret_header, e)))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(name, value);

        Ok(Self {
            url: config.url.clone(),
            headers,
        })
    }
}

impl std::fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamRequest")
            .field("url", &self.url)
            .field("headers", &self.headers)
            .finish()
    }
}
