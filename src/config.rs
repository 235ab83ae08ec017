//! Configuration handling for the TUI

use crate::gateway::{SimulatedGateway, DEFAULT_DELAY};
use crate::state::FormLayout;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the simulated delay
const DELAY_ENV: &str = "CONTACT_TUI_SUBMIT_DELAY_MS";
/// Submission deadline when none is configured
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Which field set to show
    pub form_layout: Option<FormLayout>,
    /// Simulated delivery delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Give up on a submission after this many seconds; 0 waits forever
    pub submit_timeout_secs: Option<u64>,
    /// Make every submission fail with this reason
    pub simulate_failure: Option<String>,
}

impl ContactConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contact", "contact-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("logs"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            _ => Self::default(),
        };
        config.apply_env(std::env::var(DELAY_ENV).ok());
        Ok(config)
    }

    fn apply_env(&mut self, delay: Option<String>) {
        let Some(raw) = delay else {
            return;
        };
        match raw.trim().parse() {
            Ok(ms) => self.submit_delay_ms = Some(ms),
            Err(_) => tracing::warn!(value = %raw, "ignoring invalid {}", DELAY_ENV),
        }
    }

    pub fn layout(&self) -> FormLayout {
        self.form_layout.unwrap_or_default()
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    /// Submission deadline; `None` means wait indefinitely
    pub fn submit_timeout(&self) -> Option<Duration> {
        match self.submit_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Build the gateway this configuration describes
    pub fn gateway(&self) -> SimulatedGateway {
        let gateway = SimulatedGateway::new(self.submit_delay());
        match &self.simulate_failure {
            Some(reason) => gateway.failing(reason.clone()),
            None => gateway,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_separate_from_config() {
        if let (Some(logs), Some(config)) = (ContactConfig::log_dir(), ContactConfig::config_path()) {
            assert!(logs.ends_with("logs"));
            assert!(!config.starts_with(&logs));
        }
    }

    #[test]
    fn test_default_config() {
        let config = ContactConfig::default();
        assert!(config.form_layout.is_none());
        assert!(config.submit_delay_ms.is_none());
        assert!(config.submit_timeout_secs.is_none());
        assert!(config.simulate_failure.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = ContactConfig::default();
        assert_eq!(config.layout(), FormLayout::Detailed);
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.submit_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config = ContactConfig {
            submit_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.submit_timeout().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = ContactConfig {
            form_layout: Some(FormLayout::Quick),
            submit_delay_ms: Some(250),
            submit_timeout_secs: Some(5),
            simulate_failure: Some("offline".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ContactConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.form_layout, Some(FormLayout::Quick));
        assert_eq!(parsed.submit_delay_ms, Some(250));
        assert_eq!(parsed.submit_timeout_secs, Some(5));
        assert_eq!(parsed.simulate_failure, Some("offline".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ContactConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.form_layout.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"form_layout": "quick", "unknown_field": "value"}"#;
        let parsed: ContactConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.layout(), FormLayout::Quick);
    }

    #[test]
    fn test_env_override_sets_delay() {
        let mut config = ContactConfig::default();
        config.apply_env(Some("150".to_string()));
        assert_eq!(config.submit_delay(), Duration::from_millis(150));
    }

    #[test]
    fn test_invalid_env_override_is_ignored() {
        let mut config = ContactConfig {
            submit_delay_ms: Some(10),
            ..Default::default()
        };
        config.apply_env(Some("soon".to_string()));
        assert_eq!(config.submit_delay_ms, Some(10));
    }

    #[test]
    fn test_gateway_uses_configured_delay() {
        let config = ContactConfig {
            submit_delay_ms: Some(42),
            ..Default::default()
        };
        assert_eq!(config.gateway().delay(), Duration::from_millis(42));
    }

    #[test]
    fn test_load_returns_ok() {
        // Depends on whether a config file exists; either way it must not fail to parse defaults
        let result = ContactConfig::load();
        assert!(result.is_ok());
    }
}
