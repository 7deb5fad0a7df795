// ABOUTME: Configuration loading and validation for the workwx tool.
// ABOUTME: Reads TOML with environment variable expansion; a missing default file means defaults.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use workwx_token::{AppIdentity, RefreshPolicy};

/// Top-level configuration for workwx.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// App the tokens belong to. Optional; only used to label output.
    #[serde(default)]
    pub app: Option<AppConfig>,

    /// Background refresh tuning.
    #[serde(default)]
    pub token: RefreshPolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub corp_id: String,
    pub agent_id: i64,
}

impl AppConfig {
    pub fn identity(&self) -> AppIdentity {
        AppIdentity::new(self.corp_id.clone(), self.agent_id)
    }
}

impl Config {
    /// Where the config lives when no path is given:
    /// `~/.config/workwx/workwx.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("workwx").join("workwx.toml"))
    }

    /// Load from `path`, or from the default location. An explicit path must
    /// exist; a missing default file yields the built-in defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(&path),
            None => {
                let path = Self::default_path()
                    .ok_or_else(|| CliError::Config("Could not determine config path".into()))?;
                if !path.exists() {
                    debug!(path = %path.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config from {:?}: {}", path, e))
        })?;
        Self::parse(&contents)
    }

    /// Parse config text, expanding `${VAR}` references first.
    pub fn parse(contents: &str) -> Result<Self> {
        // Undefined variables expand to the empty string with a warning.
        let contents = shellexpand::env_with_context_no_errors(contents, |var: &str| {
            match std::env::var(var) {
                Ok(val) => Some(val),
                Err(_) => {
                    warn!(
                        variable = %var,
                        "Environment variable not defined, using empty string"
                    );
                    Some(String::new())
                }
            }
        });

        let config: Config = toml::from_str(&contents)
            .map_err(|e| CliError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(app) = &self.app {
            if app.corp_id.is_empty() {
                return Err(CliError::Config("app.corp_id is required".into()));
            }
            if app.agent_id <= 0 {
                return Err(CliError::Config("app.agent_id must be positive".into()));
            }
        }
        self.token.validate().map_err(CliError::Config)
    }
}
