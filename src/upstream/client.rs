//! HTTP client for the upstream search provider.

use reqwest::Client;
use tracing::{debug, trace};

use crate::config::schema::{UpstreamConfig, QUERY_PLACEHOLDER};
use crate::upstream::types::{SearchEnvelope, UpstreamError, UpstreamResult};

/// Client for the provider's search endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Creates a client for the configured endpoint template.
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Substitutes the percent-encoded query into the endpoint template.
    fn endpoint_url(&self, query: &str) -> String {
        self.config
            .url_template
            .replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
    }

    /// Fetches the first search result for `query`, if the provider has
    /// any.
    ///
    /// The provider serves error pages with JSON bodies through the same
    /// endpoint, so the response status is not inspected; the body shape
    /// alone decides the outcome. A body without a result array maps to
    /// `Ok(None)`.
    pub async fn first_result(
        &self,
        query: &str,
    ) -> Result<Option<UpstreamResult>, UpstreamError> {
        let url = self.endpoint_url(query);
        debug!(url = %url, "Fetching upstream results");

        let response = self.http.get(&url).send().await?;
        debug!(status = %response.status(), "Received upstream response");

        let body = response.text().await?;
        trace!(body = %body, "Upstream response body");

        let envelope: SearchEnvelope = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::InvalidResponse(format!("JSON parse error: {e}")))?;

        let entries = envelope
            .page_props
            .and_then(|props| props.data)
            .unwrap_or_default();

        let first = match entries.into_iter().next() {
            Some(entry) => entry,
            None => {
                debug!("Upstream returned no results");
                return Ok(None);
            }
        };

        let result: UpstreamResult = serde_json::from_value(first).map_err(|e| {
            UpstreamError::InvalidResponse(format!("malformed result entry: {e}"))
        })?;

        Ok(Some(result))
    }
}
