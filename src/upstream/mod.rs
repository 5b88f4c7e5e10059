//! Outbound client for the upstream search provider.
//!
//! # Data Flow
//! ```text
//! query string
//!     → client.rs (percent-encode, substitute into template, GET)
//!     → types.rs (tolerant envelope decode)
//!     → first entry decoded strictly → UpstreamResult
//! ```
//!
//! # Design Decisions
//! - Response status is never inspected; the body shape decides the
//!   outcome
//! - Only the first result entry is decoded; later entries stay raw
//! - No retries, caching, or timeouts beyond reqwest defaults

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, UpstreamResult, UpstreamUser};
