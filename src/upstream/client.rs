//! Upstream HTTP client.
//!
//! # Responsibilities
//! - Perform one GET against the blog API with the configured headers
//! - Classify failures (network, timeout, status, decode)
//! - Hide the transport behind a trait so handlers can be tested with stubs

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::upstream::types::{UpstreamError, UpstreamRequest, UpstreamResult};

/// Capability to fetch a JSON document from an upstream URL.
///
/// One call is one attempt; retrying is the caller's concern.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch_json(&self, request: &UpstreamRequest) -> UpstreamResult<Value>;
}

/// `reqwest`-backed upstream client.
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    timeout_secs: Option<u64>,
}

impl HttpUpstream {
    /// Create a new client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("blog-insights/{}", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn classify(&self, error: reqwest::Error) -> UpstreamError {
        match self.timeout_secs {
            Some(secs) if error.is_timeout() => UpstreamError::Timeout(secs),
            _ => UpstreamError::Network(error.to_string()),
        }
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn fetch_json(&self, request: &UpstreamRequest) -> UpstreamResult<Value> {
        let response = self
            .client
            .get(&request.url)
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(e)
            } else {
                UpstreamError::Decode(e.to_string())
            }
        })
    }
}

impl std::fmt::Debug for HttpUpstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUpstream")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> UpstreamConfig {
        UpstreamConfig {
            url: format!("{}/api/rest/blogs", server.uri()),
            admin_secret: "test-secret".to_string(),
            ..UpstreamConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_secret_and_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/rest/blogs"))
            .and(header("x-hasura-admin-secret", "test-secret"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "blogs": [{ "title": "A" }] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client = HttpUpstream::new(&config).unwrap();
        let request = UpstreamRequest::from_config(&config).unwrap();

        let value = client.fetch_json(&request).await.unwrap();
        assert_eq!(value["blogs"][0]["title"], "A");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client = HttpUpstream::new(&config).unwrap();
        let request = UpstreamRequest::from_config(&config).unwrap();

        let err = client.fetch_json(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status(503)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client = HttpUpstream::new(&config).unwrap();
        let request = UpstreamRequest::from_config(&config).unwrap();

        let err = client.fetch_json(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "blogs": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.timeout_secs = Some(1);
        let client = HttpUpstream::new(&config).unwrap();
        let request = UpstreamRequest::from_config(&config).unwrap();

        let err = client.fetch_json(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Timeout(1)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpUpstream::new(&UpstreamConfig::default()).unwrap();
        let request = UpstreamRequest::new(format!("http://{}/blogs", addr));

        let err = client.fetch_json(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Network(_)));
    }
}
