//! Frontend configuration

use depot_http::{ClientError, DepotClient};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Environment variable holding the API base URL
pub const API_BASE_VAR: &str = "DEPOT_API_BASE";
/// Environment variable holding the optional asset base path
pub const ASSET_BASE_VAR: &str = "DEPOT_ASSET_BASE";

const DEFAULT_API_BASE: &str = "http://localhost:7001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Deploy-time configuration for the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Base URL of the storage API
    pub api_base: Url,
    /// Optional path prefix for static assets
    #[serde(default)]
    pub asset_base: Option<String>,
}

impl FrontendConfig {
    /// Read configuration from the environment, falling back to the
    /// development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_BASE_VAR).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            var: API_BASE_VAR,
            source,
        })?;
        let asset_base = std::env::var(ASSET_BASE_VAR).ok();

        Ok(Self {
            api_base,
            asset_base,
        })
    }

    /// Build an API client for this configuration
    pub fn client(&self) -> Result<DepotClient, ClientError> {
        DepotClient::new(self.api_base.as_str())
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            asset_base: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = FrontendConfig::default();
        assert_eq!(config.api_base.as_str(), "http://localhost:7001/");
        assert!(config.asset_base.is_none());
    }

    #[test]
    fn client_builds_from_default_config() {
        let config = FrontendConfig::default();
        assert!(config.client().is_ok());
    }
}
