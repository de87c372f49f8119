//! Runtime configuration
//!
//! Values are layered: built-in defaults, then `config.json` in the
//! platform config directory (`~/.config/etalase/config.json` on Linux),
//! then `ETALASE_*` environment variables. The CLI applies its flags last.

use crate::error::ConfigError;
use crate::pricing::{RupiahFormatter, DEFAULT_EXCHANGE_RATE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default product/cart API
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_BASE_URL: &str = "ETALASE_BASE_URL";
pub const ENV_EXCHANGE_RATE: &str = "ETALASE_EXCHANGE_RATE";
pub const ENV_TIMEOUT_SECS: &str = "ETALASE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the product/cart API, without trailing slash
    pub base_url: String,
    /// Rupiah per unit of catalog price
    pub exchange_rate: f64,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load defaults, the config file if present, and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path().filter(|path| path.exists());
        Self::load_from(path.as_deref())
    }

    /// Like [`Config::load`] but with an explicit config file, or none.
    ///
    /// An explicit file that cannot be read is an error.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(file, |var| std::env::var(var).ok())
    }

    /// Layer `file` and the variables resolved through `lookup` over the
    /// defaults, then validate.
    pub fn resolve<F>(file: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.validate()?;
        tracing::debug!(
            file = ?file,
            base_url = %config.base_url,
            rate = config.exchange_rate,
            "config loaded"
        );
        Ok(config)
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "etalase").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from `ETALASE_*` variables resolved through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(ENV_EXCHANGE_RATE) {
            self.exchange_rate = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_EXCHANGE_RATE,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "exchange_rate must be finite and positive, got {}",
                self.exchange_rate
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be non-zero".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Formatter for the configured exchange rate
    pub fn formatter(&self) -> Result<RupiahFormatter, ConfigError> {
        RupiahFormatter::new(self.exchange_rate).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("etalase-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.exchange_rate, 15436.0);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(lookup(&[
                (ENV_BASE_URL, "http://localhost:8080"),
                (ENV_EXCHANGE_RATE, "16000"),
                (ENV_TIMEOUT_SECS, " 3 "),
            ]))
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.exchange_rate, 16000.0);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_env_invalid_number() {
        let mut config = Config::default();
        let err = config
            .apply_env(lookup(&[(ENV_EXCHANGE_RATE, "lots")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                var: ENV_EXCHANGE_RATE,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = Config {
            base_url: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_rate = Config {
            exchange_rate: -1.0,
            ..Config::default()
        };
        assert!(bad_rate.validate().is_err());

        let bad_timeout = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(bad_timeout.validate().is_err());
    }

    #[test]
    fn test_from_file_partial() {
        let path = temp_config("partial");
        fs::write(&path, r#"{"exchange_rate": 15000.5}"#).unwrap();
        let config = Config::from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.exchange_rate, 15000.5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_without_file() {
        let config = Config::resolve(None, lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_env_over_file() {
        let path = temp_config("layer");
        fs::write(&path, r#"{"exchange_rate": 15000.0, "timeout_secs": 30}"#).unwrap();
        let config = Config::resolve(Some(&path), lookup(&[(ENV_EXCHANGE_RATE, "16000")]));
        let _ = fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.exchange_rate, 16000.0);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_resolve_rejects_invalid_file_values() {
        let path = temp_config("invalid");
        fs::write(&path, r#"{"exchange_rate": 0}"#).unwrap();
        let result = Config::resolve(Some(&path), lookup(&[]));
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/etalase/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
