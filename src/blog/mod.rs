//! Blog data subsystem.
//!
//! # Data Flow
//! ```text
//! raw upstream JSON
//!     → types.rs (BlogListResponse: shape check, title extraction)
//!     → stats.rs (totals, longest title, privacy count, unique titles)
//!     → search.rs (case-insensitive title filter)
//! ```

pub mod search;
pub mod stats;
pub mod types;

pub use search::search_blogs;
pub use stats::compute_stats;
pub use types::{Blog, BlogError, BlogListResponse, BlogStats};
