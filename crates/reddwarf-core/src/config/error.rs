//! Error types for configuration operations

use thiserror::Error;

/// Errors that can occur during configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config from {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save config to {path}: {source}")]
    SaveError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Zone '{name}' not found")]
    ZoneNotFound { name: String },

    #[error("No zones configured. Add a [zones.<name>] table to the config file.")]
    NoZonesConfigured,

    #[error("Endpoint '{endpoint}' of zone '{zone}' is not a valid URL: {source}")]
    InvalidEndpoint {
        zone: String,
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to determine config directory")]
    ConfigDirError,
}

impl ConfigError {
    /// Returns true if a requested zone could not be resolved
    pub fn is_zone_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ZoneNotFound { .. } | ConfigError::NoZonesConfigured
        )
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
