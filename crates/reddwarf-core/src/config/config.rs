//! Configuration management for Reddwarf clients
//!
//! Configuration is stored in TOML with one table per zone:
//!
//! ```toml
//! default_zone = "az-1"
//! tenant_id = "3456"
//! auth_token = "${REDDWARF_AUTH_TOKEN}"
//! timeout_secs = 30
//!
//! [zones.az-1]
//! endpoint = "http://172.16.0.1:8776/v1"
//!
//! [zones.az-2]
//! endpoint = "${REDDWARF_AZ2_ENDPOINT:-http://172.16.0.2:8776/v1}"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::error::{ConfigError, Result};

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Zone used when none is named explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_zone: Option<String>,
    /// Tenant appended to every zone endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Token sent as `X-Auth-Token`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub zones: HashMap<String, Zone>,
}

/// A named deployment of the service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Service root, e.g. `http://172.16.0.1:8776/v1`
    pub endpoint: String,
}

impl Zone {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Config {
    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let expanded_content = Self::expand_env_vars(&content);
        let config: Config = toml::from_str(&expanded_content)?;

        debug!(
            path = %config_path.display(),
            zones = config.zones.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a zone
    pub fn set_zone(&mut self, name: impl Into<String>, zone: Zone) {
        self.zones.insert(name.into(), zone);
    }

    /// Remove a zone, clearing the default if it pointed there
    pub fn remove_zone(&mut self, name: &str) -> Option<Zone> {
        if self.default_zone.as_deref() == Some(name) {
            self.default_zone = None;
        }
        self.zones.remove(name)
    }

    /// Configured zone names, sorted
    pub fn configured_zones(&self) -> Vec<&str> {
        let mut zones: Vec<&str> = self.zones.keys().map(String::as_str).collect();
        zones.sort_unstable();
        zones
    }

    /// Resolve which zone to use
    ///
    /// Order: the explicit name, then `default_zone`, then the only configured
    /// zone if there is exactly one.
    pub fn resolve_zone(&self, explicit_zone: Option<&str>) -> Result<String> {
        if let Some(name) = explicit_zone {
            return self.require_zone(name).map(|_| name.to_string());
        }
        if let Some(name) = self.default_zone.as_deref() {
            return self.require_zone(name).map(|_| name.to_string());
        }
        match self.configured_zones().as_slice() {
            [] => Err(ConfigError::NoZonesConfigured),
            [only] => Ok((*only).to_string()),
            _ => Err(ConfigError::ZoneNotFound {
                name: "<default>".to_string(),
            }),
        }
    }

    /// Base URL for a zone: its endpoint followed by the tenant, if any
    pub fn endpoint_for_zone(&self, zone: &str) -> Result<Url> {
        let configured = self.require_zone(zone)?;
        let invalid = |source| ConfigError::InvalidEndpoint {
            zone: zone.to_string(),
            endpoint: configured.endpoint.clone(),
            source,
        };

        let mut url = Url::parse(&configured.endpoint).map_err(invalid)?;
        if let Some(tenant) = self.tenant_id.as_deref() {
            url.path_segments_mut()
                .map_err(|()| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
                .pop_if_empty()
                .push(tenant);
        }
        Ok(url)
    }

    /// Request timeout, falling back to [`DEFAULT_TIMEOUT_SECS`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Get the path to the configuration file
    ///
    /// On Linux: ~/.config/reddwarf/config.toml
    /// On macOS: ~/Library/Application Support/org.reddwarf.reddwarf/config.toml
    /// On Windows: %APPDATA%\reddwarf\reddwarf\config\config.toml
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("org", "reddwarf", "reddwarf").ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    fn require_zone(&self, name: &str) -> Result<&Zone> {
        self.zones.get(name).ok_or_else(|| ConfigError::ZoneNotFound {
            name: name.to_string(),
        })
    }

    /// Expand environment variables in configuration content
    ///
    /// Supports `${VAR}` and `${VAR:-default}`. Unset variables without a
    /// default are left as written.
    fn expand_env_vars(content: &str) -> String {
        let expanded =
            shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok());
        expanded.to_string()
    }
}
