//! Flavor and link response models

use serde::{Deserialize, Serialize};

/// A hypermedia link attached to API resources
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

/// A sizing tier for database instances.
///
/// Flavors are read-only; they are listed and fetched but never bound into a
/// request body. Natural ordering is by id (fields compare in declaration
/// order).
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Flavor {
    /// The flavor id, used as `flavorRef` when creating instances
    pub id: i32,
    /// Display name, e.g. "512MB Instance"
    pub name: String,
    /// Memory in megabytes
    pub ram: i32,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Flavor {
    /// The link with relation `self`, if the API returned one
    pub fn self_link(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == "self")
    }
}
