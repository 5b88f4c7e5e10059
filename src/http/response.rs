//! Response shaping for the search endpoint.
//!
//! # Responsibilities
//! - Shape the first upstream result into the client-facing body
//! - Map handler errors to appropriate HTTP status codes
//! - Keep upstream failure detail out of client responses
//!
//! # Design Decisions
//! - Absent optional fields are omitted from the JSON, not nulled
//! - Error bodies share one `{ "error": ... }` shape across statuses
//! - Fault detail is logged at the handler; clients get a generic message

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::{UpstreamError, UpstreamResult};

/// Client-facing shape of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Result title, or `"N/A"` when the provider has none.
    pub title: String,
    /// Generation prompt, when the provider carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Author display name, when the provider carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Image location, copied from the result's `url`.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl From<UpstreamResult> for SearchResponse {
    fn from(result: UpstreamResult) -> Self {
        let title = match result.title {
            Some(title) if !title.is_empty() => title,
            _ => "N/A".to_string(),
        };
        Self {
            title,
            prompt: result.prompt,
            user: result.user.display_name,
            image_url: result.url,
        }
    }
}

/// Client-facing error body, shared by every error status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a search request can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `q` parameter was missing or empty.
    #[error("missing search query")]
    MissingQuery,

    /// The provider had no results for the query.
    #[error("no results found for \"{query}\"")]
    NoResults { query: String },

    /// The outbound call failed or its payload could not be decoded.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                "Please provide a search query.".to_string(),
            ),
            ApiError::NoResults { query } => (
                StatusCode::NOT_FOUND,
                format!("No results found for \"{query}\"."),
            ),
            ApiError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Sorry, an error occurred while fetching the search results.".to_string(),
            ),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
