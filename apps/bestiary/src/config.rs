//! # Configuration
//!
//! Optional TOML configuration for the Bestiary CLI.
//!
//! ```toml
//! data = "rosters/monsters.json"
//! log_format = "json"
//! log_filter = "bestiary=debug"
//! ```
//!
//! ## Precedence
//!
//! CLI flag > environment variable > config file > built-in default.
//!
//! | Setting | Flag | Environment | File key |
//! |---------|------|-------------|----------|
//! | config file | `-c/--config` | `BESTIARY_CONFIG` | - |
//! | data file | `-f/--file` | `BESTIARY_DATA` | `data` |
//! | log format | - | `BESTIARY_LOG_FORMAT` | `log_format` |
//! | log filter | `-v` (debug) | `RUST_LOG` | `log_filter` |

use bestiary_core::BestiaryError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "BESTIARY_CONFIG";

/// Environment variable naming the data file.
pub const DATA_ENV: &str = "BESTIARY_DATA";

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "BESTIARY_LOG_FORMAT";

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "bestiary=info";

/// Filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "bestiary=debug,bestiary_core=debug";

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// LOG FORMAT
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse an environment value; anything but `json` means text.
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

/// Settings read from the config file, with environment overrides applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Monster collection file to load instead of the bundled sample.
    pub data: Option<PathBuf>,
    /// Log output format.
    pub log_format: LogFormat,
    /// Tracing filter directive.
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Parse config file contents.
    pub fn from_toml_str(text: &str) -> Result<Self, BestiaryError> {
        toml::from_str(text).map_err(|e| BestiaryError::ConfigError(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, BestiaryError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            BestiaryError::IoError(format!("Config file '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(BestiaryError::InputTooLarge {
                size: metadata.len(),
                limit: MAX_CONFIG_FILE_SIZE,
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            BestiaryError::IoError(format!("Config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Locate, load and override the configuration.
    ///
    /// `cli_path` wins over `BESTIARY_CONFIG`; with neither, defaults are used.
    /// `env` looks up environment variables so callers can substitute their own.
    pub fn resolve<F>(cli_path: Option<&Path>, env: F) -> Result<Self, BestiaryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        Ok(config.with_env_overrides(env))
    }

    /// Apply `BESTIARY_DATA` and `BESTIARY_LOG_FORMAT` on top of file values.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data) = env(DATA_ENV) {
            self.data = Some(PathBuf::from(data));
        }
        if let Some(format) = env(LOG_FORMAT_ENV) {
            self.log_format = LogFormat::from_env_value(&format);
        }
        self
    }

    /// Tracing filter to fall back on when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            return VERBOSE_LOG_FILTER.to_string();
        }
        self.log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = AppConfig::from_toml_str(
            "data = \"monsters.json\"\nlog_format = \"json\"\nlog_filter = \"bestiary=trace\"\n",
        )
        .expect("parse");

        assert_eq!(config.data, Some(PathBuf::from("monsters.json")));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter(false), "bestiary=trace");
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = AppConfig::from_toml_str("port = 8080\n");
        assert!(matches!(result, Err(BestiaryError::ConfigError(_))));
    }

    #[test]
    fn env_overrides_file_values() {
        let config = AppConfig::from_toml_str("data = \"file.json\"\n")
            .expect("parse")
            .with_env_overrides(|key| match key {
                DATA_ENV => Some("env.json".to_string()),
                LOG_FORMAT_ENV => Some("JSON".to_string()),
                _ => None,
            });

        assert_eq!(config.data, Some(PathBuf::from("env.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn resolve_without_path_is_default() {
        let config = AppConfig::resolve(None, no_env).expect("resolve");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn verbose_filter_wins() {
        let config = AppConfig {
            log_filter: Some("bestiary=warn".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.log_filter(true), VERBOSE_LOG_FILTER);
        assert_eq!(config.log_filter(false), "bestiary=warn");
    }
}
