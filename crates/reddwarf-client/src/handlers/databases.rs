//! Databases hosted on an instance

use std::collections::BTreeSet;
use std::sync::Arc;

use reddwarf_core::Database;
use reddwarf_core::binders::{Binder, CreateDatabaseBinder};
use reddwarf_core::params::{DatabaseSelection, ParamBag};
use reddwarf_core::request::{HttpRequest, Method};
use serde::Deserialize;
use tracing::info;
use url::Url;

use super::{fetch, send_accepted};
use crate::dispatch::Dispatch;
use crate::error::Result;

#[derive(Deserialize)]
struct DatabaseList {
    #[serde(default)]
    databases: Vec<Database>,
}

/// Databases API for one zone
#[derive(Clone)]
pub struct DatabaseHandler {
    dispatcher: Arc<dyn Dispatch>,
    endpoint: Url,
}

impl DatabaseHandler {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatch>, endpoint: Url) -> Self {
        Self {
            dispatcher,
            endpoint,
        }
    }

    /// Create one database
    pub async fn create_simple(&self, instance_id: &str, database_name: &str) -> Result<bool> {
        self.send_create(instance_id, &DatabaseSelection::single(database_name))
            .await
    }

    /// Create several databases
    pub async fn create(&self, instance_id: &str, databases: &BTreeSet<Database>) -> Result<bool> {
        self.send_create(instance_id, &DatabaseSelection::from(databases.clone()))
            .await
    }

    /// Create databases from a parameter bag (`databaseName`, else `databases`)
    pub async fn create_from_params(&self, instance_id: &str, params: &ParamBag) -> Result<bool> {
        let selection = DatabaseSelection::try_from(params)?;
        self.send_create(instance_id, &selection).await
    }

    async fn send_create(&self, instance_id: &str, selection: &DatabaseSelection) -> Result<bool> {
        let request = HttpRequest::to_path(
            Method::Post,
            &self.endpoint,
            &["instances", instance_id, "databases"],
        )?;
        let request = CreateDatabaseBinder.bind(request, selection)?;
        let created =
            send_accepted(self.dispatcher.as_ref(), CreateDatabaseBinder::OPERATION, request).await?;
        if created {
            info!(instance_id, "created databases");
        }
        Ok(created)
    }

    /// Databases on an instance; empty if the instance cannot be listed
    pub async fn list(&self, instance_id: &str) -> Result<Vec<Database>> {
        let request = HttpRequest::to_path(
            Method::Get,
            &self.endpoint,
            &["instances", instance_id, "databases"],
        )?;
        let list: Option<DatabaseList> =
            fetch(self.dispatcher.as_ref(), "list databases", request).await?;
        Ok(list.map(|l| l.databases).unwrap_or_default())
    }

    /// Drop a database
    pub async fn delete(&self, instance_id: &str, database_name: &str) -> Result<bool> {
        let request = HttpRequest::to_path(
            Method::Delete,
            &self.endpoint,
            &["instances", instance_id, "databases", database_name],
        )?;
        let deleted = send_accepted(self.dispatcher.as_ref(), "delete database", request).await?;
        if deleted {
            info!(instance_id, database_name, "deleted database");
        }
        Ok(deleted)
    }
}
