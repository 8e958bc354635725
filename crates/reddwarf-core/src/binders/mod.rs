//! Request binders for user and database payloads
//!
//! A binder turns a parameter bag into the JSON body of an [`HttpRequest`].
//! Each binder resolves the bag into its typed request first (see
//! [`crate::params`]), so the first-match-wins rules live in one place and the
//! binding itself only ever sees a well-formed shape.
//!
//! Binders are defined for parameter bags only. Binding an arbitrary object
//! through [`Binder::bind_object`] is a programming error and always fails
//! with [`CoreError::UnsupportedBinding`].

use std::any::Any;

use crate::error::{CoreError, Result};
use crate::params::ParamBag;
use crate::request::{HttpRequest, Method};

pub mod create_database;
pub mod create_user;
pub mod grant_user;
pub mod json;

pub use create_database::CreateDatabaseBinder;
pub use create_user::CreateUserBinder;
pub use grant_user::GrantUserBinder;
pub use json::bind_to_json_payload;

/// Shapes a parameter bag into a request payload
pub trait Binder {
    /// Typed form of the parameter bag
    type Request: for<'a> TryFrom<&'a ParamBag, Error = CoreError>;

    /// Human-readable operation name, used in errors and logs
    const OPERATION: &'static str;

    /// HTTP method the bound request is sent with
    const METHOD: Method;

    /// Bind an already-typed request
    fn bind(&self, request: HttpRequest, params: &Self::Request) -> Result<HttpRequest>;

    /// Bind a parameter bag
    fn bind_to_request(&self, request: HttpRequest, params: &ParamBag) -> Result<HttpRequest> {
        let typed = Self::Request::try_from(params)?;
        self.bind(request, &typed)
    }

    /// Bind an arbitrary object; always rejected
    fn bind_object(&self, _request: HttpRequest, _to_bind: &dyn Any) -> Result<HttpRequest> {
        tracing::warn!(
            operation = Self::OPERATION,
            method = Self::METHOD.as_str(),
            "binder invoked with an object instead of a parameter bag"
        );
        Err(CoreError::UnsupportedBinding {
            operation: Self::OPERATION,
            method: Self::METHOD.as_str(),
        })
    }
}
