//! Blog API handlers.
//!
//! `GET /api/blog-stats` and `GET /api/blog-search?query=<text>`. Both fetch
//! the full list from the upstream on every request.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::blog::{compute_stats, search_blogs, Blog, BlogListResponse, BlogStats};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::resilience::fetch_with_retry;

/// Query string of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

pub async fn blog_stats(State(state): State<AppState>) -> Result<Json<BlogStats>, ApiError> {
    let blogs = load_blogs(&state).await?;
    let stats = compute_stats(&blogs)?;

    tracing::debug!(
        total_blogs = stats.total_blogs,
        unique_titles = stats.unique_blog_titles.len(),
        "Computed blog stats"
    );
    Ok(Json(stats))
}

pub async fn blog_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Blog>>, ApiError> {
    let Query(params) = params?;
    let query = params.query.ok_or(ApiError::MissingParameter("query"))?;

    let blogs = load_blogs(&state).await?;
    let matches = search_blogs(blogs, &query);

    tracing::debug!(query = %query, matches = matches.len(), "Searched blogs");
    Ok(Json(matches))
}

async fn load_blogs(state: &AppState) -> Result<Vec<Blog>, ApiError> {
    let value =
        fetch_with_retry(state.upstream.as_ref(), &state.request, &state.retry_policy).await?;
    Ok(BlogListResponse::from_value(value)?.blogs)
}
