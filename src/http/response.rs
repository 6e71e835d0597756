//! Error responses.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes
//! - Log the full failure server-side
//! - Send clients only `{ "error": "<message>" }`
//!
//! # Design Decisions
//! - Upstream, payload and statistics failures all become the same generic 500
//! - A missing required parameter is the client's fault and gets a 400
//! - An unparseable query string is also a 400, but its detail stays in the logs

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blog::BlogError;
use crate::resilience::RetryError;

/// Message returned for every server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the request.";

/// Message returned when the query string cannot be decoded.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query string";

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure at the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error(transparent)]
    Upstream(#[from] RetryError),

    #[error(transparent)]
    Blog(#[from] BlogError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Blog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::MissingParameter(_) => {
                tracing::warn!(error = %self, "Rejected request");
                self.to_string()
            }
            ApiError::InvalidQuery(_) => {
                tracing::warn!(error = %self, "Rejected request");
                INVALID_QUERY_MESSAGE.to_string()
            }
            ApiError::Upstream(_) | ApiError::Blog(_) => {
                tracing::error!(error = %self, detail = ?self, "Request failed");
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
