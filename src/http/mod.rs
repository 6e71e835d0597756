//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request id, request span)
//!     → handlers.rs (stats / search over the upstream blog list)
//!     → response.rs (JSON error bodies)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody, GENERIC_ERROR_MESSAGE, INVALID_QUERY_MESSAGE};
pub use server::{build_router, AppState, HttpServer, SEARCH_ROUTE, STATS_ROUTE};
