//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate socket addresses for the listener and metrics endpoints
//! - Check the upstream template carries exactly one query placeholder
//!   and substitutes into a well-formed URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs after every override layer has been applied

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::{ProxyConfig, QUERY_PLACEHOLDER};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `listener.bind_address` does not parse as a socket address.
    InvalidBindAddress(String),
    /// `observability.metrics_address` does not parse as a socket address.
    InvalidMetricsAddress(String),
    /// `upstream.url_template` is empty.
    MissingUpstreamTemplate,
    /// `upstream.url_template` does not contain the query placeholder
    /// exactly once.
    BadQueryPlaceholder(usize),
    /// `upstream.url_template` does not form a valid URL once the
    /// placeholder is substituted.
    InvalidUpstreamUrl(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid listener.bind_address '{}'", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "invalid observability.metrics_address '{}'", addr)
            }
            ValidationError::MissingUpstreamTemplate => {
                write!(f, "upstream.url_template is required")
            }
            ValidationError::BadQueryPlaceholder(count) => write!(
                f,
                "upstream.url_template must contain '{}' exactly once (found {})",
                QUERY_PLACEHOLDER, count
            ),
            ValidationError::InvalidUpstreamUrl(template) => {
                write!(f, "upstream.url_template '{}' is not a valid URL", template)
            }
        }
    }
}

/// Validate a merged configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let template = &config.upstream.url_template;
    if template.is_empty() {
        errors.push(ValidationError::MissingUpstreamTemplate);
    } else {
        let placeholders = template.matches(QUERY_PLACEHOLDER).count();
        if placeholders != 1 {
            errors.push(ValidationError::BadQueryPlaceholder(placeholders));
        } else {
            let probe = template.replace(QUERY_PLACEHOLDER, "probe");
            if Url::parse(&probe).is_err() {
                errors.push(ValidationError::InvalidUpstreamUrl(template.clone()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
