//! The `/search` endpoint handler.
//!
//! # Responsibilities
//! - Extract and validate the `q` query parameter
//! - Drive the upstream client and shape its first result
//! - Convert every failure into the matching client-facing error
//!
//! # Design Decisions
//! - An empty `q` is treated the same as a missing one
//! - No outbound call is made for rejected queries
//! - Upstream faults are logged here, with request ID context, exactly
//!   once

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::http::request::request_id;
use crate::http::response::{ApiError, SearchResponse};
use crate::http::server::AppState;

/// Query parameters accepted by `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// Main search handler.
/// Validates the query, fetches the first upstream result, and shapes
/// it for the client.
pub async fn search_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request_id = request_id(&headers);

    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => {
            tracing::debug!(request_id = %request_id, "Rejecting search without a query");
            return Err(ApiError::MissingQuery);
        }
    };

    tracing::debug!(request_id = %request_id, query = %query, "Handling search");

    let result = state.upstream.first_result(&query).await.map_err(|err| {
        tracing::error!(request_id = %request_id, error = %err, "Search request failed");
        ApiError::from(err)
    })?;

    match result {
        Some(result) => Ok(Json(SearchResponse::from(result))),
        None => {
            tracing::debug!(request_id = %request_id, query = %query, "No results for query");
            Err(ApiError::NoResults { query })
        }
    }
}
