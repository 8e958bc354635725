//! Read-only flavor catalogue

use std::sync::Arc;

use reddwarf_core::Flavor;
use reddwarf_core::request::{HttpRequest, Method};
use serde::Deserialize;
use url::Url;

use super::fetch;
use crate::dispatch::Dispatch;
use crate::error::Result;

#[derive(Deserialize)]
struct FlavorList {
    #[serde(default)]
    flavors: Vec<Flavor>,
}

#[derive(Deserialize)]
struct SingleFlavor {
    flavor: Flavor,
}

/// Flavors API for one zone
#[derive(Clone)]
pub struct FlavorHandler {
    dispatcher: Arc<dyn Dispatch>,
    endpoint: Url,
}

impl FlavorHandler {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatch>, endpoint: Url) -> Self {
        Self {
            dispatcher,
            endpoint,
        }
    }

    async fn list_at(&self, segments: &[&str]) -> Result<Vec<Flavor>> {
        let request = HttpRequest::to_path(Method::Get, &self.endpoint, segments)?;
        let list: Option<FlavorList> = fetch(self.dispatcher.as_ref(), "list flavors", request).await?;
        Ok(list.map(|l| l.flavors).unwrap_or_default())
    }

    /// All flavors
    pub async fn list(&self) -> Result<Vec<Flavor>> {
        self.list_at(&["flavors"]).await
    }

    /// Flavors available to an account
    pub async fn list_for_account(&self, account_id: &str) -> Result<Vec<Flavor>> {
        self.list_at(&["flavors", account_id]).await
    }

    pub async fn get(&self, flavor_id: i32) -> Result<Option<Flavor>> {
        let id = flavor_id.to_string();
        let request = HttpRequest::to_path(Method::Get, &self.endpoint, &["flavors", &id])?;
        let single: Option<SingleFlavor> = fetch(self.dispatcher.as_ref(), "get flavor", request).await?;
        Ok(single.map(|s| s.flavor))
    }
}
