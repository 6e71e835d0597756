//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Handler needs the blog list:
//!     → retries.rs (attempt loop, one log line per failure)
//!     → backoff.rs (optional delay between attempts)
//!     → RetryError::Exhausted once the attempt budget is spent
//! ```
//!
//! # Design Decisions
//! - Every request gets its own full attempt budget
//! - No circuit breaking across requests
//! - Terminal failure is a value, not a panic

pub mod backoff;
pub mod retries;

pub use retries::{fetch_with_retry, RetryError, RetryPolicy};
