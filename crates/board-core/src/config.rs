//! Board Configuration
//!
//! Loaded from a JSON document (camelCase keys); every field has a default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ProjectId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must not be empty")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    pub project_id: ProjectId,
    /// Refetch the list after a failed mutation instead of keeping the optimistic state
    pub refetch_on_mutation_failure: bool,
    /// How long toasts stay on screen
    pub notice_timeout_ms: u32,
    /// Pointer movement before a press becomes a drag
    pub drag_threshold_px: i32,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            project_id: ProjectId::new("default"),
            refetch_on_mutation_failure: false,
            notice_timeout_ms: 4000,
            drag_threshold_px: 5,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Missing("apiBaseUrl"));
        }
        if self.project_id.as_str().is_empty() {
            return Err(ConfigError::Missing("projectId"));
        }
        Ok(())
    }

    /// `log_level` as a `log` filter; unknown names fall back to Info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BoardConfig::from_json(r#"{"projectId":"p9","apiBaseUrl":"https://api.example.com/v1/"}"#).unwrap();
        assert_eq!(config.project_id.as_str(), "p9");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert!(!config.refetch_on_mutation_failure);
        assert_eq!(config.notice_timeout_ms, 4000);
    }

    #[test]
    fn test_empty_project_rejected() {
        let err = BoardConfig::from_json(r#"{"projectId":""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("projectId")));
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(BoardConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_level_filter() {
        let mut config = BoardConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
