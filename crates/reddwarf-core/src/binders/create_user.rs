//! Binder for `POST /instances/{id}/users`

use tracing::debug;

use super::{Binder, bind_to_json_payload};
use crate::error::Result;
use crate::params::{CreateUserRequest, USERS};
use crate::request::{HttpRequest, Method};

/// Binds `{"users": [...]}` for creating one or more users.
///
/// # Example
///
/// ```rust
/// use reddwarf_core::binders::{Binder, CreateUserBinder};
/// use reddwarf_core::params::ParamBag;
/// use reddwarf_core::request::{HttpRequest, Method};
///
/// let request = HttpRequest::new(
///     Method::Post,
///     "http://localhost:8776/v1/3456/instances/abc/users".parse().unwrap(),
/// );
/// let bag = ParamBag::new()
///     .with("name", "dbuser1")
///     .with("password", "pw")
///     .with("databaseName", "db1");
///
/// let bound = CreateUserBinder.bind_to_request(request, &bag).unwrap();
/// assert_eq!(
///     bound.payload().unwrap().body(),
///     r#"{"users":[{"name":"dbuser1","password":"pw","databases":[{"name":"db1"}]}]}"#
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateUserBinder;

impl Binder for CreateUserBinder {
    type Request = CreateUserRequest;

    const OPERATION: &'static str = "create user";
    const METHOD: Method = Method::Post;

    fn bind(&self, request: HttpRequest, params: &CreateUserRequest) -> Result<HttpRequest> {
        let users = params.users()?;
        debug!(users = users.len(), endpoint = %request.endpoint(), "binding create user payload");
        bind_to_json_payload(request, USERS, &users)
    }
}
