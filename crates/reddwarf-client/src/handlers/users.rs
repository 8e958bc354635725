//! Database users of an instance

use std::collections::BTreeSet;
use std::sync::Arc;

use reddwarf_core::binders::{Binder, CreateUserBinder, GrantUserBinder};
use reddwarf_core::params::{CreateUserRequest, DatabaseSelection, ParamBag};
use reddwarf_core::request::{HttpRequest, Method};
use reddwarf_core::{Database, User};
use serde::Deserialize;
use tracing::info;
use url::Url;

use super::{fetch, send_accepted};
use crate::dispatch::Dispatch;
use crate::error::Result;

#[derive(Deserialize)]
struct UserList {
    #[serde(default)]
    users: Vec<User>,
}

#[derive(Deserialize)]
struct SingleUser {
    user: User,
}

#[derive(Deserialize)]
struct DatabaseList {
    #[serde(default)]
    databases: Vec<Database>,
}

/// Users API for one zone
///
/// ```rust,no_run
/// # async fn example(client: reddwarf_client::ReddwarfClient) -> reddwarf_client::Result<()> {
/// let users = client.user_api_for_zone("RegionOne")?;
/// if users
///     .create_simple("instanceId-1234-5678", "dbuser1", Some("password"), "databaseA")
///     .await?
/// {
///     users.grant("instanceId-1234-5678", "dbuser1", "databaseB").await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UserHandler {
    dispatcher: Arc<dyn Dispatch>,
    endpoint: Url,
}

impl UserHandler {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatch>, endpoint: Url) -> Self {
        Self {
            dispatcher,
            endpoint,
        }
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<HttpRequest> {
        Ok(HttpRequest::to_path(method, &self.endpoint, segments)?)
    }

    /// Create one user with access to one database
    pub async fn create_simple(
        &self,
        instance_id: &str,
        name: &str,
        password: Option<&str>,
        database_name: &str,
    ) -> Result<bool> {
        let params = CreateUserRequest::simple(name, password.map(str::to_string), database_name);
        self.send_create(instance_id, &params).await
    }

    /// Create a set of users, each with its own databases
    pub async fn create(&self, instance_id: &str, users: &BTreeSet<User>) -> Result<bool> {
        let params = CreateUserRequest::from(users.clone());
        self.send_create(instance_id, &params).await
    }

    /// Create users from a parameter bag
    ///
    /// The bag is resolved with the create-user rules: `name` (with
    /// `password` and `databaseName`) first, then `users`, else nothing.
    pub async fn create_from_params(&self, instance_id: &str, params: &ParamBag) -> Result<bool> {
        let params = CreateUserRequest::try_from(params)?;
        self.send_create(instance_id, &params).await
    }

    async fn send_create(&self, instance_id: &str, params: &CreateUserRequest) -> Result<bool> {
        let request = self.request(Method::Post, &["instances", instance_id, "users"])?;
        let request = CreateUserBinder.bind(request, params)?;
        let created = send_accepted(self.dispatcher.as_ref(), CreateUserBinder::OPERATION, request).await?;
        if created {
            info!(instance_id, "created users");
        }
        Ok(created)
    }

    /// Grant a user access to one database
    pub async fn grant(&self, instance_id: &str, user_name: &str, database_name: &str) -> Result<bool> {
        self.send_grant(instance_id, user_name, &DatabaseSelection::single(database_name))
            .await
    }

    /// Grant a user access to several databases
    pub async fn grant_many(
        &self,
        instance_id: &str,
        user_name: &str,
        databases: &BTreeSet<Database>,
    ) -> Result<bool> {
        self.send_grant(instance_id, user_name, &DatabaseSelection::from(databases.clone()))
            .await
    }

    /// Grant access from a parameter bag (`databaseName`, else `databases`)
    pub async fn grant_from_params(
        &self,
        instance_id: &str,
        user_name: &str,
        params: &ParamBag,
    ) -> Result<bool> {
        let selection = DatabaseSelection::try_from(params)?;
        self.send_grant(instance_id, user_name, &selection).await
    }

    async fn send_grant(
        &self,
        instance_id: &str,
        user_name: &str,
        selection: &DatabaseSelection,
    ) -> Result<bool> {
        let request = self.request(
            Method::Put,
            &["instances", instance_id, "users", user_name, "databases"],
        )?;
        let request = GrantUserBinder.bind(request, selection)?;
        send_accepted(self.dispatcher.as_ref(), GrantUserBinder::OPERATION, request).await
    }

    /// Revoke a user's access to a database
    pub async fn revoke(&self, instance_id: &str, user_name: &str, database_name: &str) -> Result<bool> {
        let request = self.request(
            Method::Delete,
            &["instances", instance_id, "users", user_name, "databases", database_name],
        )?;
        send_accepted(self.dispatcher.as_ref(), "revoke user", request).await
    }

    /// Delete a user
    pub async fn delete(&self, instance_id: &str, user_name: &str) -> Result<bool> {
        let request = self.request(Method::Delete, &["instances", instance_id, "users", user_name])?;
        let deleted = send_accepted(self.dispatcher.as_ref(), "delete user", request).await?;
        if deleted {
            info!(instance_id, user_name, "deleted user");
        }
        Ok(deleted)
    }

    /// Users of an instance; empty if the instance cannot be listed
    pub async fn list(&self, instance_id: &str) -> Result<Vec<User>> {
        let request = self.request(Method::Get, &["instances", instance_id, "users"])?;
        let list: Option<UserList> = fetch(self.dispatcher.as_ref(), "list users", request).await?;
        Ok(list.map(|l| l.users).unwrap_or_default())
    }

    /// A single user, or `None` if it does not exist
    pub async fn get(&self, instance_id: &str, user_name: &str) -> Result<Option<User>> {
        let request = self.request(Method::Get, &["instances", instance_id, "users", user_name])?;
        let single: Option<SingleUser> = fetch(self.dispatcher.as_ref(), "get user", request).await?;
        Ok(single.map(|s| s.user))
    }

    /// Databases a user has access to
    pub async fn get_database_list(&self, instance_id: &str, user_name: &str) -> Result<Vec<Database>> {
        let request = self.request(
            Method::Get,
            &["instances", instance_id, "users", user_name, "databases"],
        )?;
        let list: Option<DatabaseList> =
            fetch(self.dispatcher.as_ref(), "list user databases", request).await?;
        Ok(list.map(|l| l.databases).unwrap_or_default())
    }
}
