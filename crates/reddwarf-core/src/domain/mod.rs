//! Domain model for the Reddwarf API
//!
//! [`Database`] and [`User`] are immutable value objects built through
//! validating builders. [`Flavor`] and [`Instance`] are read-only models
//! decoded from API responses.

pub mod database;
pub mod flavor;
pub mod instance;
pub mod user;

pub use database::{Database, DatabaseBuilder};
pub use flavor::{Flavor, Link};
pub use instance::{FlavorRef, Instance, InstanceCreateRequest, InstanceStatus, Volume};
pub use user::{User, UserBuilder};
