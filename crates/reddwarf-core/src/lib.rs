//! # reddwarf-core
//!
//! Domain model and request binding for the Reddwarf database-as-a-service
//! API. Nothing in this crate performs I/O: it builds value objects, shapes
//! JSON payloads and describes HTTP requests that a dispatcher (see the
//! `reddwarf-client` crate) sends.
//!
//! ## Modules
//!
//! - [`domain`] - `Database`, `User`, `Flavor` and `Instance` models
//! - [`params`] - the loosely-typed parameter bag and the typed requests it
//!   resolves to
//! - [`binders`] - turn a parameter bag into a request payload
//! - [`request`] - `HttpRequest` descriptors
//! - [`config`] - zone configuration loaded from TOML
//! - [`error`] - the [`CoreError`] taxonomy
//!
//! ## Example
//!
//! ```rust
//! use reddwarf_core::binders::{Binder, GrantUserBinder};
//! use reddwarf_core::params::ParamBag;
//! use reddwarf_core::request::{HttpRequest, Method};
//!
//! let base = "http://172.16.0.1:8776/v1/3456".parse().unwrap();
//! let request = HttpRequest::to_path(
//!     Method::Put,
//!     &base,
//!     &["instances", "instanceId-1234-5678", "users", "dbuser1", "databases"],
//! )
//! .unwrap();
//!
//! let bag = ParamBag::new().with("databaseName", "databaseZ");
//! let bound = GrantUserBinder.bind_to_request(request, &bag).unwrap();
//! assert_eq!(
//!     bound.payload().unwrap().body(),
//!     r#"{"databases":[{"name":"databaseZ"}]}"#
//! );
//! ```

pub mod binders;
pub mod config;
pub mod domain;
pub mod error;
pub mod params;
pub mod request;

pub use domain::{
    Database, DatabaseBuilder, Flavor, FlavorRef, Instance, InstanceCreateRequest,
    InstanceStatus, Link, User, UserBuilder, Volume,
};
pub use error::{CoreError, Result};
