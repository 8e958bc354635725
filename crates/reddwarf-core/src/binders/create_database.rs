//! Binder for `POST /instances/{id}/databases`

use tracing::debug;

use super::{Binder, bind_to_json_payload};
use crate::error::Result;
use crate::params::{DATABASES, DatabaseSelection};
use crate::request::{HttpRequest, Method};

/// Binds `{"databases": [...]}` for creating databases on an instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateDatabaseBinder;

impl Binder for CreateDatabaseBinder {
    type Request = DatabaseSelection;

    const OPERATION: &'static str = "create database";
    const METHOD: Method = Method::Post;

    fn bind(&self, request: HttpRequest, params: &DatabaseSelection) -> Result<HttpRequest> {
        let databases = params.databases()?;
        debug!(databases = databases.len(), endpoint = %request.endpoint(), "binding create database payload");
        bind_to_json_payload(request, DATABASES, &databases)
    }
}
