//! Database instances

use std::sync::Arc;

use reddwarf_core::request::{HttpRequest, Method, Payload};
use reddwarf_core::{CoreError, Instance, InstanceCreateRequest};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use super::{fetch, send_accepted};
use crate::dispatch::Dispatch;
use crate::error::Result;

#[derive(Deserialize)]
struct InstanceList {
    #[serde(default)]
    instances: Vec<Instance>,
}

#[derive(Deserialize)]
struct SingleInstance {
    instance: Instance,
}

#[derive(Serialize)]
struct CreateInstanceBody<'a> {
    instance: &'a InstanceCreateRequest,
}

/// Instances API for one zone
#[derive(Clone)]
pub struct InstanceHandler {
    dispatcher: Arc<dyn Dispatch>,
    endpoint: Url,
}

impl InstanceHandler {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatch>, endpoint: Url) -> Self {
        Self {
            dispatcher,
            endpoint,
        }
    }

    pub async fn list(&self) -> Result<Vec<Instance>> {
        let request = HttpRequest::to_path(Method::Get, &self.endpoint, &["instances"])?;
        let list: Option<InstanceList> =
            fetch(self.dispatcher.as_ref(), "list instances", request).await?;
        Ok(list.map(|l| l.instances).unwrap_or_default())
    }

    pub async fn get(&self, instance_id: &str) -> Result<Option<Instance>> {
        let request = HttpRequest::to_path(Method::Get, &self.endpoint, &["instances", instance_id])?;
        let single: Option<SingleInstance> =
            fetch(self.dispatcher.as_ref(), "get instance", request).await?;
        Ok(single.map(|s| s.instance))
    }

    /// Create an instance; `None` if the service refused it
    pub async fn create(&self, params: &InstanceCreateRequest) -> Result<Option<Instance>> {
        let body = serde_json::to_string(&CreateInstanceBody { instance: params })
            .map_err(CoreError::from)?;
        let request = HttpRequest::to_path(Method::Post, &self.endpoint, &["instances"])?
            .with_payload(Payload::json(body));
        let single: Option<SingleInstance> =
            fetch(self.dispatcher.as_ref(), "create instance", request).await?;
        if let Some(created) = &single {
            info!(instance_id = %created.instance.id, name = %created.instance.name, "created instance");
        }
        Ok(single.map(|s| s.instance))
    }

    pub async fn delete(&self, instance_id: &str) -> Result<bool> {
        let request =
            HttpRequest::to_path(Method::Delete, &self.endpoint, &["instances", instance_id])?;
        let deleted = send_accepted(self.dispatcher.as_ref(), "delete instance", request).await?;
        if deleted {
            info!(instance_id, "deleted instance");
        }
        Ok(deleted)
    }
}
