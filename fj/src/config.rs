//! FinJourney configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{DEFAULT_AGE, Journey};

/// Environment variable overriding the recommendation webhook URL
pub const WEBHOOK_URL_ENV: &str = "FJ_WEBHOOK_URL";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Where the journey is persisted
    pub storage: StorageConfig,

    /// Recommendation webhook
    pub plan: PlanConfig,

    /// Local explanation proxy
    pub explain: ExplainConfig,

    /// Defaults for a fresh journey
    pub profile: ProfileConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_file(config_path)?;
        config.apply_env();
        Ok(config)
    }

    fn load_file(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, it must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .finjourney.yml
        let local_config = PathBuf::from(".finjourney.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/finjourney/finjourney.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("finjourney").join("finjourney.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are ignored; the full load later reports them.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load_file(config_path).ok().and_then(|config| config.log_level)
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(WEBHOOK_URL_ENV)
            && !url.trim().is_empty()
        {
            tracing::debug!(%url, "apply_env: webhook url overridden");
            self.plan.webhook_url = url;
        }
    }

    /// A fresh journey using the configured profile defaults
    pub fn default_journey(&self) -> Journey {
        Journey::with_age(self.profile.age)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted journey
    pub dir: PathBuf,

    /// Key the journey is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("finjourney"),
            key: crate::STORAGE_KEY.to_string(),
        }
    }
}

/// Recommendation webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Webhook the user snapshot is posted to
    #[serde(rename = "webhook-url")]
    pub webhook_url: String,

    /// Use the locally built plan when the webhook fails
    #[serde(rename = "fallback-on-error")]
    pub fallback_on_error: bool,

    /// Request timeout in milliseconds; unset waits indefinitely
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            webhook_url: "https://isagi-kaiser.app.n8n.cloud/webhook-test/financial-plan".to_string(),
            fallback_on_error: true,
            timeout_ms: None,
        }
    }
}

/// Local explanation proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainConfig {
    /// Explanation endpoint
    pub url: String,

    /// Request timeout in milliseconds; unset waits indefinitely
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3001/api/ollama-explain".to_string(),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub age: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self { age: DEFAULT_AGE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.key, "ffp_journeyData");
        assert!(config.plan.fallback_on_error);
        assert_eq!(config.plan.timeout_ms, None);
        assert_eq!(config.explain.url, "http://localhost:3001/api/ollama-explain");
        assert_eq!(config.profile.age, 30);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
log-level: debug
storage:
  dir: /tmp/fj-test
plan:
  fallback-on-error: false
  timeout-ms: 2500
profile:
  age: 44
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/fj-test"));
        assert_eq!(config.storage.key, "ffp_journeyData");
        assert!(!config.plan.fallback_on_error);
        assert_eq!(config.plan.timeout_ms, Some(2500));
        assert!(config.plan.webhook_url.starts_with("https://"));
        assert_eq!(config.default_journey().user_profile.age, 44);
    }

    #[test]
    #[serial]
    fn test_load_explicit_path_and_env_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fj.yml");
        fs::write(&path, "plan:\n  webhook-url: http://example.test/hook\n").unwrap();

        // SAFETY: serialized with the other environment-touching tests
        unsafe { std::env::remove_var(WEBHOOK_URL_ENV) };
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.plan.webhook_url, "http://example.test/hook");

        unsafe { std::env::set_var(WEBHOOK_URL_ENV, "http://override.test/hook") };
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.plan.webhook_url, "http://override.test/hook");
        unsafe { std::env::remove_var(WEBHOOK_URL_ENV) };
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let missing = PathBuf::from("/nonexistent/finjourney.yml");
        assert!(Config::load_file(Some(&missing)).is_err());
        assert_eq!(Config::load_log_level(Some(&missing)), None);
    }
}
