use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::render::TiePolicy;

/// Backend origin used when nothing else has been configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// `localStorage` key holding the serialized [`DashboardConfig`].
pub const STORAGE_KEY: &str = "football-dashboard.config";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub tie_policy: TiePolicy,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            tie_policy: TiePolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a stored config blob. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the base URL and return it parsed.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.api_base_url.clone(),
            reason,
        };

        let url = Url::parse(self.api_base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme '{}'", other))),
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        Ok(url)
    }

    /// Read the persisted config. `Ok(None)` when nothing has been saved yet.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let storage = local_storage()?;
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|e| ConfigError::Storage(format!("{:?}", e)))?;
        raw.map(|r| Self::from_json(&r)).transpose()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;
        let storage = local_storage()?;
        storage
            .set_item(STORAGE_KEY, &self.to_json()?)
            .map_err(|e| ConfigError::Storage(format!("{:?}", e)))
    }
}

fn local_storage() -> Result<web_sys::Storage, ConfigError> {
    web_sys::window()
        .ok_or_else(|| ConfigError::Storage("No window available".to_string()))?
        .local_storage()
        .map_err(|e| ConfigError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ConfigError::Storage("localStorage is disabled".to_string()))
}

/// Shared, live configuration for every page.
#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub config: RwSignal<DashboardConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.tie_policy, TiePolicy::FirstWins);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DashboardConfig::from_json(r#"{"api_base_url": "https://analytics.example.com"}"#)
            .expect("Should parse partial config");
        assert_eq!(config.api_base_url, "https://analytics.example.com");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tie_policy, TiePolicy::FirstWins);
    }

    #[test]
    fn test_tie_policy_uses_snake_case() {
        let config = DashboardConfig::from_json(r#"{"tie_policy": "draw"}"#).unwrap();
        assert_eq!(config.tie_policy, TiePolicy::Draw);

        let json = DashboardConfig {
            tie_policy: TiePolicy::SecondWins,
            ..Default::default()
        }
        .to_json()
        .unwrap();
        assert!(json.contains("\"second_wins\""), "Got: {}", json);
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let err = DashboardConfig::from_json(r#"{"api_base_url": "ftp://files.example.com"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }), "Got: {:?}", err);

        let err = DashboardConfig::from_json(r#"{"api_base_url": "localhost"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }), "Got: {:?}", err);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = DashboardConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
