//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the blog handlers
//! - Wire up middleware (request ID, tracing, metrics, optional timeout)
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{blog_search, blog_stats};
use crate::http::request::{make_request_span, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::resilience::RetryPolicy;
use crate::upstream::{HttpUpstream, UpstreamClient, UpstreamRequest, UpstreamResult};

/// Route of the statistics endpoint.
pub const STATS_ROUTE: &str = "/api/blog-stats";
/// Route of the search endpoint.
pub const SEARCH_ROUTE: &str = "/api/blog-search";

/// Application state injected into handlers.
///
/// Built once at startup; nothing in it changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
    pub request: Arc<UpstreamRequest>,
    pub retry_policy: RetryPolicy,
}

impl AppState {
    /// Build state from configuration around an upstream client.
    pub fn from_config(
        config: &ServiceConfig,
        upstream: Arc<dyn UpstreamClient>,
    ) -> UpstreamResult<Self> {
        Ok(Self {
            upstream,
            request: Arc::new(UpstreamRequest::from_config(&config.upstream)?),
            retry_policy: RetryPolicy::from(&config.retries),
        })
    }
}

/// HTTP server for the blog insights API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server that talks to the configured upstream over HTTP.
    pub fn new(config: ServiceConfig) -> UpstreamResult<Self> {
        let upstream: Arc<dyn UpstreamClient> = Arc::new(HttpUpstream::new(&config.upstream)?);
        Self::with_upstream(config, upstream)
    }

    /// Create a server around an arbitrary upstream client.
    pub fn with_upstream(
        config: ServiceConfig,
        upstream: Arc<dyn UpstreamClient>,
    ) -> UpstreamResult<Self> {
        let state = AppState::from_config(&config, upstream)?;
        let router = build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            max_attempts = self.config.retries.max_attempts,
            "Server is running on port {}",
            addr.port()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    let mut router = Router::new()
        .route(STATS_ROUTE, get(blog_stats))
        .route(SEARCH_ROUTE, get(blog_search))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state);

    if let Some(secs) = config.timeouts.request_secs {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(secs)));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;
    metrics::record_request(&route, response.status().as_u16(), start);
    response
}
