//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default namespace holding the onboarding preferences.
pub const DEFAULT_PREFS_NAMESPACE: &str = "onboarding_prefs";

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the libSQL database file backing the preference store.
    pub db_path: PathBuf,
    /// Port the REST server listens on.
    pub http_port: u16,
    /// Private preference namespace for the completion flag.
    pub prefs_namespace: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/hub-onboarding.db"),
            http_port: 8080,
            prefs_namespace: DEFAULT_PREFS_NAMESPACE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `HUB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("HUB_DB_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::MissingRequired {
                    key: "HUB_DB_PATH".to_string(),
                    hint: "Set it to a writable file path or unset it for the default".to_string(),
                });
            }
            config.db_path = PathBuf::from(path);
        }

        if let Some(port) = lookup("HUB_HTTP_PORT") {
            config.http_port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "HUB_HTTP_PORT".to_string(),
                message: format!("{port:?} is not a port number: {e}"),
            })?;
        }

        if let Some(namespace) = lookup("HUB_PREFS_NAMESPACE") {
            let namespace = namespace.trim();
            if namespace.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "HUB_PREFS_NAMESPACE".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
            config.prefs_namespace = namespace.to_string();
        }

        Ok(config)
    }
}
