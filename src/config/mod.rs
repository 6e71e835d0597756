//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, falling back to defaults)
//!     → loader.rs (PORT / BLOG_UPSTREAM_URL / BLOG_ADMIN_SECRET overrides)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, ConfigError};
pub use schema::ServiceConfig;
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, RetryConfig, TimeoutConfig, UpstreamConfig,
};
