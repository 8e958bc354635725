//! Binder for `PUT /instances/{id}/users/{user}/databases`

use tracing::debug;

use super::{Binder, bind_to_json_payload};
use crate::error::Result;
use crate::params::{DATABASES, DatabaseSelection};
use crate::request::{HttpRequest, Method};

/// Binds `{"databases": [...]}` for granting a user access to databases.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrantUserBinder;

impl Binder for GrantUserBinder {
    type Request = DatabaseSelection;

    const OPERATION: &'static str = "grant user";
    const METHOD: Method = Method::Put;

    fn bind(&self, request: HttpRequest, params: &DatabaseSelection) -> Result<HttpRequest> {
        let databases = params.databases()?;
        debug!(databases = databases.len(), endpoint = %request.endpoint(), "binding grant payload");
        bind_to_json_payload(request, DATABASES, &databases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Database;
    use crate::params::{DATABASE_NAME, ParamBag};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::BTreeSet;

    fn request() -> HttpRequest {
        HttpRequest::new(
            Method::Put,
            "http://172.16.0.1:8776/v1/3456/instances/instanceId-1234-5678/users/dbuser1/databases"
                .parse()
                .unwrap(),
        )
    }

    fn body(request: &HttpRequest) -> Value {
        serde_json::from_str(request.payload().unwrap().body()).unwrap()
    }

    #[test]
    fn test_single_database_name() {
        let bag = ParamBag::new().with(DATABASE_NAME, "databaseZ");
        let bound = GrantUserBinder.bind_to_request(request(), &bag).unwrap();
        assert_eq!(body(&bound), json!({"databases": [{"name": "databaseZ"}]}));
    }

    #[test]
    fn test_database_set_is_preserved() {
        let dbs: BTreeSet<Database> = ["databaseD", "databaseC"]
            .into_iter()
            .map(|n| Database::named(n).unwrap())
            .collect();
        let bag = ParamBag::new().with(DATABASES, dbs);
        let bound = GrantUserBinder.bind_to_request(request(), &bag).unwrap();
        assert_eq!(
            body(&bound),
            json!({"databases": [{"name": "databaseC"}, {"name": "databaseD"}]})
        );
    }

    #[test]
    fn test_empty_bag_grants_nothing() {
        let bound = GrantUserBinder
            .bind_to_request(request(), &ParamBag::new())
            .unwrap();
        assert_eq!(body(&bound), json!({"databases": []}));
    }

    #[test]
    fn test_bind_object_always_fails() {
        let err = GrantUserBinder
            .bind_object(request(), &Database::named("databaseZ").unwrap())
            .unwrap_err();
        assert!(err.is_invalid_usage());
        assert_eq!(
            err.to_string(),
            "grant user is a PUT operation and only binds a parameter bag"
        );
    }
}
