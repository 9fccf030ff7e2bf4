//! Application configuration
//!
//! Layered as: built-in defaults, then `config.toml` (or an explicit path),
//! then `WTTR_LOOKUP_*` environment variables. Nested keys use `__`, for
//! example `WTTR_LOOKUP_WEATHER__TIMEOUT_SECS=5`.

use std::path::Path;

use config::{ConfigError, Environment, File, Map};
use integration_wttr::WttrConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::LoggingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WTTR_LOOKUP";

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "config";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// wttr.in client settings
    #[serde(default)]
    pub weather: WttrConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the process environment
    ///
    /// An explicit `path` must exist. Without one, `config.toml` in the
    /// working directory is read if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`] with the environment taken from `env`
    /// instead of the process when given
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value has the wrong type.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                File::from(path).required(true)
            },
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .set_default("weather.base_url", "https://wttr.in")?
            .set_default("weather.timeout_secs", 10)?
            .set_default("weather.encode_location", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }

    /// Reject settings the client cannot work with
    ///
    /// # Errors
    ///
    /// Returns a message error for an empty or non-http(s) base URL and for a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.weather.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Message(
                "weather.base_url must not be empty".to_string(),
            ));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "weather.base_url must use http or https: {base_url}"
            )));
        }
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "weather.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.weather.base_url, "https://wttr.in");
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(!config.weather.encode_location);
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn load_without_sources_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load_with_env(Some(&missing), env(&[])).is_err());

        let config = AppConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let file = write_config(
            r#"
[weather]
base_url = "http://localhost:8080"
encode_location = true

[logging]
filter = "debug"
format = "json"
"#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.weather.base_url, "http://localhost:8080");
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.weather.encode_location);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[weather]\ntimeout_secs = 30\n");

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("WTTR_LOOKUP_WEATHER__TIMEOUT_SECS", "5"),
                ("WTTR_LOOKUP_WEATHER__BASE_URL", "http://127.0.0.1:9000"),
            ]),
        )
        .unwrap();

        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(config.weather.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = write_config("[weather]\ntimeout_secs = \"soon\"\n");
        assert!(AppConfig::load_with_env(Some(file.path()), env(&[])).is_err());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = AppConfig::default();
        config.weather.base_url = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let mut config = AppConfig::default();
        config.weather.base_url = "ftp://wttr.in".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.weather.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn app_config_serialization_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("[weather]"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.weather.base_url, config.weather.base_url);
        assert_eq!(parsed.logging.format, config.logging.format);
    }
}
