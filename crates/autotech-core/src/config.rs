//! Settings
//!
//! JSON settings file, read once at startup and never written back.
//! Missing keys fall back to their defaults:
//!
//! ```json
//! {
//!   "vin_api_base": "https://vpic.nhtsa.dot.gov/api/vehicles/decodevin",
//!   "user_agent": "AutoTech/0.1.0",
//!   "notification_timeout_secs": 5,
//!   "due_soon_window": 500,
//!   "default_model": "prelude"
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::maintenance::{DueEvaluator, DEFAULT_DUE_SOON_WINDOW};
use crate::notification::DEFAULT_NOTIFICATION_TIMEOUT;
use crate::vin::{VinDecoder, DEFAULT_VIN_API_BASE};

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file exists but cannot be read
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid JSON for [`Settings`]
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser error with line and column
        #[source]
        source: serde_json::Error,
    },

    /// A setting parsed but is out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Settings key
        field: String,
        /// What is wrong with it
        message: String,
    },
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// VIN decoder endpoint
    pub vin_api_base: String,
    /// User-Agent sent to the VIN API
    pub user_agent: String,
    /// Banner display window in seconds
    pub notification_timeout_secs: u64,
    /// Miles before a service at which it becomes "due soon"
    pub due_soon_window: i64,
    /// Model selected on startup
    pub default_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vin_api_base: DEFAULT_VIN_API_BASE.to_string(),
            user_agent: concat!("AutoTech/", env!("CARGO_PKG_VERSION")).to_string(),
            notification_timeout_secs: DEFAULT_NOTIFICATION_TIMEOUT.as_secs(),
            due_soon_window: DEFAULT_DUE_SOON_WINDOW,
            default_model: "prelude".to_string(),
        }
    }
}

impl Settings {
    /// Standard location: `<config dir>/autotech/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("autotech").join("settings.json"))
    }

    /// Parse settings from JSON text
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from an explicit file; the file must exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Self::from_json(&content, path)
    }

    /// Load from `path` if given, else from the standard location
    ///
    /// A missing file at the standard location yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                tracing::debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the rest of the application cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.vin_api_base).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "vin_api_base".to_string(),
                message: format!("not a URL: {}", self.vin_api_base),
            });
        }
        if self.notification_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notification_timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.due_soon_window < 0 {
            return Err(ConfigError::InvalidValue {
                field: "due_soon_window".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Banner display window
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }

    /// Due evaluator using the configured window
    pub fn due_evaluator(&self) -> DueEvaluator {
        DueEvaluator::with_window(self.due_soon_window)
    }

    /// VIN client for the configured endpoint
    pub fn vin_decoder(&self) -> VinDecoder {
        VinDecoder::with_base_url(&self.vin_api_base, &self.user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "due_soon_window": 750 }"#, Path::new("s.json")).unwrap();
        assert_eq!(settings.due_soon_window, 750);
        assert_eq!(settings.notification_timeout_secs, 5);
        assert_eq!(settings.vin_api_base, DEFAULT_VIN_API_BASE);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Settings::from_json(r#"{ "notification_timeout_secs": 0 }"#, Path::new("s.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "notification_timeout_secs"));
    }
}
