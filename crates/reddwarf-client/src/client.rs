//! Entry point binding configuration, dispatcher and handlers

use std::sync::Arc;

use reddwarf_core::config::Config;
use tracing::{debug, info, trace};
use url::Url;

use crate::dispatch::{Dispatch, HttpDispatcher};
use crate::error::Result;
use crate::handlers::{DatabaseHandler, FlavorHandler, InstanceHandler, UserHandler};

/// Client for the Reddwarf API across all configured zones
///
/// Handlers returned by the `*_api_for_zone` accessors share this client's
/// dispatcher and are cheap to clone.
#[derive(Clone)]
pub struct ReddwarfClient {
    config: Config,
    dispatcher: Arc<dyn Dispatch>,
}

impl ReddwarfClient {
    /// Create a client that sends requests with `reqwest`
    pub fn new(config: Config) -> Result<Self> {
        debug!("Creating Reddwarf client");
        let dispatcher = HttpDispatcher::from_config(&config)?;
        if config.auth_token.is_none() {
            info!("No auth token configured, requests will be sent unauthenticated");
        }
        Ok(Self::with_dispatcher(config, Arc::new(dispatcher)))
    }

    /// Create a client from the config file at the standard location
    pub fn from_default_config() -> Result<Self> {
        Self::new(Config::load()?)
    }

    /// Create a client with a custom dispatcher
    pub fn with_dispatcher(config: Config, dispatcher: Arc<dyn Dispatch>) -> Self {
        trace!(zones = ?config.configured_zones(), "client zones");
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Configured zone names, sorted
    pub fn configured_zones(&self) -> Vec<&str> {
        self.config.configured_zones()
    }

    /// The zone an unqualified call would use
    pub fn default_zone(&self) -> Result<String> {
        Ok(self.config.resolve_zone(None)?)
    }

    fn endpoint(&self, zone: &str) -> Result<Url> {
        let endpoint = self.config.endpoint_for_zone(zone)?;
        debug!(zone, endpoint = %endpoint, "resolved zone endpoint");
        Ok(endpoint)
    }

    pub fn user_api_for_zone(&self, zone: &str) -> Result<UserHandler> {
        Ok(UserHandler::new(self.dispatcher.clone(), self.endpoint(zone)?))
    }

    pub fn database_api_for_zone(&self, zone: &str) -> Result<DatabaseHandler> {
        Ok(DatabaseHandler::new(self.dispatcher.clone(), self.endpoint(zone)?))
    }

    pub fn flavor_api_for_zone(&self, zone: &str) -> Result<FlavorHandler> {
        Ok(FlavorHandler::new(self.dispatcher.clone(), self.endpoint(zone)?))
    }

    pub fn instance_api_for_zone(&self, zone: &str) -> Result<InstanceHandler> {
        Ok(InstanceHandler::new(self.dispatcher.clone(), self.endpoint(zone)?))
    }
}
