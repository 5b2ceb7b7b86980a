use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::error::ForecastError;

/// Public Visual Crossing timeline endpoint, offered as the default during `weekcast configure`.
pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

pub const ENV_API_URL: &str = "WEEKCAST_API_URL";
pub const ENV_API_KEY: &str = "WEEKCAST_API_KEY";

/// Validated provider endpoint: both values are present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline"
/// api_key = "..."
/// default_location = "Manhattan, NYC"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub default_location: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weekcast", "weekcast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay `WEEKCAST_API_URL` / `WEEKCAST_API_KEY` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_API_KEY).ok(),
        )
    }

    /// Replace base URL and key with the given values when they are non-blank.
    pub fn apply_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(key) = api_key.filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn set_endpoint(&mut self, base_url: String, api_key: String) {
        self.base_url = Some(base_url.trim().to_string());
        self.api_key = Some(api_key.trim().to_string());
    }

    /// Validated endpoint, or a configuration error naming what is missing.
    pub fn endpoint(&self) -> Result<Endpoint, ForecastError> {
        let base_url = non_blank(self.base_url.as_deref());
        let api_key = non_blank(self.api_key.as_deref());

        match (base_url, api_key) {
            (Some(base_url), Some(api_key)) => Ok(Endpoint {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: api_key.to_string(),
            }),
            (base_url, api_key) => {
                let mut missing = Vec::new();
                if base_url.is_none() {
                    missing.push("API base URL");
                }
                if api_key.is_none() {
                    missing.push("API key");
                }
                Err(ForecastError::Config(format!(
                    "Weather provider is not configured: missing {}.\n\
                     Hint: run `weekcast configure` or set {ENV_API_URL} and {ENV_API_KEY}.",
                    missing.join(" and ")
                )))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint().is_ok()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_errors_when_nothing_is_set() {
        let cfg = Config::default();
        let err = cfg.endpoint().unwrap_err();

        let msg = err.to_string();
        assert!(matches!(err, ForecastError::Config(_)));
        assert!(msg.contains("API base URL and API key"));
        assert!(msg.contains("Hint: run `weekcast configure`"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = Config {
            base_url: Some(DEFAULT_BASE_URL.into()),
            api_key: Some("   ".into()),
            default_location: None,
        };
        let msg = cfg.endpoint().unwrap_err().to_string();

        assert!(msg.contains("missing API key"));
        assert!(!msg.contains("base URL"));
        assert!(!cfg.is_configured());
    }

    #[test]
    fn endpoint_trims_values_and_trailing_slash() {
        let mut cfg = Config::default();
        cfg.set_endpoint(" https://example.test/timeline/ ".into(), " KEY ".into());

        let endpoint = cfg.endpoint().expect("endpoint must be valid");
        assert_eq!(endpoint.base_url, "https://example.test/timeline");
        assert_eq!(endpoint.api_key, "KEY");
    }

    #[test]
    fn overrides_replace_file_values_but_ignore_blanks() {
        let mut cfg = Config::default();
        cfg.set_endpoint("https://file.test".into(), "FILE_KEY".into());

        let cfg = cfg.apply_overrides(Some("https://env.test".into()), Some("".into()));
        assert_eq!(cfg.base_url.as_deref(), Some("https://env.test"));
        assert_eq!(cfg.api_key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = Config {
            base_url: Some(DEFAULT_BASE_URL.into()),
            api_key: Some("KEY".into()),
            default_location: Some("Manhattan, NYC".into()),
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_parses_to_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }
}
