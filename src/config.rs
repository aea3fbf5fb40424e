use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "rx-adherence";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trailing window used when a caller asks for period adherence without one.
pub const DEFAULT_PERIOD_DAYS: u32 = 7;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "rx_adherence=info"
}

/// Get the application data directory (~/.rx-adherence/).
/// `None` when the home directory cannot be determined.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(format!(".{APP_NAME}")))
}

/// Get the default settings file location.
pub fn settings_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Tunables for the engine's ambient behaviour.
///
/// The dosing-time table and the 09:00 fallback slot are fixed and not
/// configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// `EnvFilter` directive used by [`crate::logging::init_tracing_with`].
    pub log_filter: String,
    /// Window (days) for period adherence when the caller does not pick one.
    pub default_period_days: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter().to_string(),
            default_period_days: DEFAULT_PERIOD_DAYS,
        }
    }
}

impl EngineSettings {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "Loaded engine settings");
        Ok(settings)
    }

    /// Like [`EngineSettings::load`], but a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Settings from [`settings_path`]. Defaults when the file is absent or
    /// the home directory cannot be determined.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_at(settings_path().as_deref())
    }

    fn load_at(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_or_default(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_period_days == 0 {
            return Err(ConfigError::Validation(
                "default_period_days must be at least 1".into(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation("log_filter must not be empty".into()));
        }
        Ok(())
    }
}
