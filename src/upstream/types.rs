//! Wire types for the upstream search provider.

use serde::Deserialize;
use thiserror::Error;

/// Top level of the provider's JSON body.
///
/// Every level of the envelope is optional. The provider serves error
/// payloads through the same endpoint, and those simply decode to an
/// empty envelope instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "pageProps", default)]
    pub page_props: Option<PageProps>,
}

/// Inner container carrying the result array.
#[derive(Debug, Default, Deserialize)]
pub struct PageProps {
    /// Raw result entries. Kept as JSON values so a malformed entry
    /// cannot fail the envelope decode; only the first entry is ever
    /// decoded further.
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
}

/// The first entry of the provider's result array.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    /// Author object. Required: an entry without it is malformed.
    pub user: UpstreamUser,
    /// Image location. Required.
    pub url: String,
}

/// Nested author object on a result entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamUser {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Errors raised while talking to the provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request could not be sent or its body could not be read.
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not JSON, or the first result entry was malformed.
    #[error("upstream response could not be decoded: {0}")]
    InvalidResponse(String),
}
