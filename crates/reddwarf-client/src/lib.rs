//! # reddwarf-client
//!
//! Async client for the Reddwarf database-as-a-service API.
//!
//! Requests are shaped by `reddwarf-core` (value objects, binders, request
//! descriptors) and sent through a [`Dispatch`] implementation, by default
//! [`HttpDispatcher`] over `reqwest`.
//!
//! ```rust,no_run
//! use reddwarf_client::ReddwarfClient;
//! use reddwarf_core::config::{Config, Zone};
//!
//! # async fn example() -> reddwarf_client::Result<()> {
//! let mut config = Config {
//!     tenant_id: Some("3456".to_string()),
//!     auth_token: Some("token".to_string()),
//!     ..Config::default()
//! };
//! config.set_zone("RegionOne", Zone::new("http://172.16.0.1:8776/v1"));
//!
//! let client = ReddwarfClient::new(config)?;
//! let users = client.user_api_for_zone("RegionOne")?;
//! for user in users.list("instanceId-1234-5678").await? {
//!     println!("{user}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dispatch;
pub mod error;
pub mod handlers;

pub use client::ReddwarfClient;
pub use dispatch::{Dispatch, HttpDispatcher, HttpResponse};
pub use error::{ClientError, Result};
pub use handlers::{DatabaseHandler, FlavorHandler, InstanceHandler, UserHandler};
