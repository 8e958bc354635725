//! Zone configuration for Reddwarf clients
//!
// Nested config module mirrors the file name
#![allow(clippy::module_inception)]
//!
//! Maps zone names to service endpoints and carries the tenant, auth token
//! and HTTP settings shared by every zone.
//!
//! # Features
//!
//! - Multiple named zones with a default
//! - Environment variable expansion in config files
//! - Platform-specific config file locations

pub mod config;
pub mod error;

pub use config::{Config, Zone};
pub use error::{ConfigError, Result};
