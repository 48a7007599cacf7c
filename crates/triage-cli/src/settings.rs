//! Runtime settings
//!
//! Layered with the `config` crate: built-in defaults, then a config file
//! (`triage.toml` in the working directory unless `--config` names one),
//! then `TRIAGE__*` environment variables, e.g.
//! `TRIAGE__THRESHOLDS__SENIOR_AGE=70`.

use crate::render::OutputFormat;
use config::{Config, ConfigError, Environment, File, Map};
use covid_protocol::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up when none is given
pub const DEFAULT_CONFIG_NAME: &str = "triage";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TRIAGE";

/// CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log filter directive (default: info)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Report format
    pub format: OutputFormat,
    /// Clinical thresholds
    pub thresholds: Thresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            format: OutputFormat::Text,
            thresholds: Thresholds::default(),
        }
    }
}

impl Settings {
    /// Load settings, requiring `path` to exist when given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load settings reading `TRIAGE__*` variables from `env` instead of
    /// the process environment when it is given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}
