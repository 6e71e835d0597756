//! Retry logic for upstream fetches.
//!
//! # Responsibilities
//! - Run up to `max_attempts` attempts against the upstream
//! - Log every failed attempt with its attempt number
//! - Report exhaustion as a typed error carrying the last failure
//!
//! # Design Decisions
//! - The bound counts attempts, not retries after the first
//! - Every failure is retryable (network, status, decode)
//! - No delay by default; backoff only when a base delay is configured

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::config::RetryConfig;
use crate::observability::metrics;
use crate::resilience::backoff::calculate_backoff;
use crate::upstream::{UpstreamClient, UpstreamError, UpstreamRequest};

/// Attempt bound and optional backoff between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// Policy with `max_attempts` attempts and no delay between them.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    fn delay_after(&self, attempt: u32) -> Duration {
        calculate_backoff(attempt, self.base_delay_ms, self.max_delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }
}

/// Terminal failure of a retried fetch.
#[derive(Debug, Error)]
pub enum RetryError {
    /// Every attempt failed.
    #[error("Max retries reached. Unable to fetch data after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        last_error: UpstreamError,
    },

    /// The policy allowed no attempts at all.
    #[error("Retry policy allows zero attempts")]
    NoAttempts,
}

/// Fetch JSON from the upstream, retrying every failure up to the policy bound.
///
/// Returns the first successfully parsed body. Each failed attempt writes
/// exactly one warning line.
pub async fn fetch_with_retry(
    upstream: &dyn UpstreamClient,
    request: &UpstreamRequest,
    policy: &RetryPolicy,
) -> Result<Value, RetryError> {
    let mut last_error = None;

    for attempt in 1..=policy.max_attempts {
        match upstream.fetch_json(request).await {
            Ok(value) => {
                metrics::record_upstream_attempt("success");
                if attempt > 1 {
                    tracing::info!(
                        attempt,
                        url = %request.url,
                        "Upstream fetch succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(e) => {
                metrics::record_upstream_attempt("failure");
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    url = %request.url,
                    error = %e,
                    "Upstream attempt failed"
                );
                last_error = Some(e);

                if attempt < policy.max_attempts {
                    let delay = policy.delay_after(attempt);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
    }

    match last_error {
        Some(last_error) => Err(RetryError::Exhausted {
            attempts: policy.max_attempts,
            last_error,
        }),
        None => Err(RetryError::NoAttempts),
    }
}
