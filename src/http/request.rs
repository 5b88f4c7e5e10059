//! Request-scoped helpers.
//!
//! # Responsibilities
//! - Name the request ID header shared by middleware and handlers
//! - Read the request ID back out of inbound headers for log context
//!
//! # Design Decisions
//! - IDs are minted by the middleware stack (UUID v4) before any
//!   handler runs; handlers only ever read them
//! - Client-supplied IDs are honored and echoed back unchanged

use axum::http::HeaderMap;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Reads the request ID out of the headers, for log fields.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}
