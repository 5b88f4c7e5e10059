//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::ValidationError;

/// Environment variable overriding `listener.bind_address`.
pub const ENV_LISTEN: &str = "SEARCH_PROXY_LISTEN";
/// Environment variable overriding `upstream.url_template`.
pub const ENV_UPSTREAM_URL: &str = "SEARCH_PROXY_UPSTREAM_URL";
/// Environment variable overriding `observability.metrics_address`.
pub const ENV_METRICS_ADDR: &str = "SEARCH_PROXY_METRICS_ADDR";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file. Missing fields fall back to the
/// schema defaults; semantic validation happens separately, once all
/// override layers have been applied.
pub fn from_file(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ProxyConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    Ok(config)
}

/// Apply environment overrides to an already-loaded configuration.
///
/// The variable lookup is injected so the merge logic can be tested
/// without mutating process environment.
pub fn apply_env_overrides<F>(config: &mut ProxyConfig, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(listen) = get(ENV_LISTEN) {
        config.listener.bind_address = listen;
    }
    if let Some(url) = get(ENV_UPSTREAM_URL) {
        config.upstream.url_template = url;
    }
    if let Some(addr) = get(ENV_METRICS_ADDR) {
        config.observability.metrics_address = addr;
    }
}
