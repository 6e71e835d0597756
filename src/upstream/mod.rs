//! Upstream blog API integration.
//!
//! # Data Flow
//! ```text
//! UpstreamConfig (url, secret header, secret, timeout)
//!     → types.rs (UpstreamRequest with the secret header attached)
//!     → client.rs (one GET attempt, JSON body or UpstreamError)
//!     → resilience::retries (bounded attempts)
//! ```
//!
//! # Security Constraints
//! - The shared secret is only ever sent upstream
//! - Never log the secret; its header value is marked sensitive

pub mod client;
pub mod types;

pub use client::{HttpUpstream, UpstreamClient};
pub use types::{UpstreamError, UpstreamRequest, UpstreamResult};
