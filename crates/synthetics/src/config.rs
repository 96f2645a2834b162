use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Connection settings for the monitoring service.
#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL every API path is resolved against, e.g.
    /// `https://api.monitoring.example/v3/`.
    pub host_url: String,
    /// Sent as `x-epm-auth` on every request.
    pub api_key: String,
    /// Per-request timeout for ordinary calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Per-request timeout for writes of long-running check types
    /// (journeys that ship an app binary).
    #[serde(default = "default_extended_timeout_secs")]
    pub extended_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_extended_timeout_secs() -> u64 {
    600
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host_url", &self.host_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("extended_timeout_secs", &self.extended_timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(host_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host_url: host_url.into(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
            extended_timeout_secs: default_extended_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn extended_timeout(&self) -> Duration {
        Duration::from_secs(self.extended_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Validation("api_key must not be empty".into()));
        }
        let url = Url::parse(&self.host_url)
            .map_err(|e| ConfigError::Validation(format!("host_url is not a valid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "host_url must use http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 || self.extended_timeout_secs == 0 {
            return Err(ConfigError::Validation("timeouts must be > 0".into()));
        }
        if self.extended_timeout_secs < self.timeout_secs {
            return Err(ConfigError::Validation(
                "extended_timeout_secs must not be shorter than timeout_secs".into(),
            ));
        }
        Ok(())
    }
}

/// Load provider settings from `synthetics.yaml` (optional) plus environment
/// overrides.
///
/// Environment variables use the `SYNTHETICS_` prefix, e.g.
/// `SYNTHETICS_API_KEY` or `SYNTHETICS_HOST_URL`, and win over the file.
pub fn load_config() -> Result<ProviderConfig, ConfigError> {
    load_config_from("synthetics")
}

/// Same as [`load_config`] but reads `<file_stem>.yaml` (or any other format
/// the `config` crate recognizes by extension).
pub fn load_config_from(file_stem: &str) -> Result<ProviderConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix("SYNTHETICS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let provider: ProviderConfig = cfg.try_deserialize()?;
    provider.validate()?;
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = ProviderConfig::new("https://api.example.com/", "key");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.extended_timeout(), Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ProviderConfig::new("https://api.example.com/", "super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = ProviderConfig::new("https://api.example.com/", " ");
        assert!(config.validate().is_err());

        config.api_key = "key".into();
        config.host_url = "ftp://api.example.com".into();
        assert!(config.validate().is_err());

        config.host_url = "not a url".into();
        assert!(config.validate().is_err());

        config.host_url = "https://api.example.com".into();
        config.extended_timeout_secs = 10;
        assert!(config.validate().is_err());

        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
