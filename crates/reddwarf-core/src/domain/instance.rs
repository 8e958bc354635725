//! Database instance response model and create request

use serde::{Deserialize, Serialize};

use super::Link;

/// Lifecycle state reported for an instance
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstanceStatus {
    Active,
    Blocked,
    Build,
    Failed,
    Reboot,
    Resize,
    Shutdown,
    Error,
    /// Any status this binding does not know about
    #[serde(other)]
    Unrecognized,
}

impl InstanceStatus {
    /// Instance is up and accepting user/database calls
    pub fn is_active(&self) -> bool {
        matches!(self, InstanceStatus::Active)
    }

    /// Instance is still being provisioned or changed
    pub fn is_building(&self) -> bool {
        matches!(
            self,
            InstanceStatus::Build | InstanceStatus::Reboot | InstanceStatus::Resize
        )
    }

    /// Instance reached a terminal failure state
    pub fn is_error(&self) -> bool {
        matches!(self, InstanceStatus::Error | InstanceStatus::Failed)
    }
}

/// Flavor reference embedded in an instance
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FlavorRef {
    pub id: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Attached volume
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Volume {
    /// Size in gigabytes
    pub size: u32,
}

/// A managed database server that owns users and databases
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<FlavorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Volume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Body of a create-instance request
///
/// Serializes to `{"flavorRef": "1", "name": "...", "volume": {"size": 1}}`;
/// the caller wraps it under an `"instance"` key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceCreateRequest {
    pub flavor_ref: String,
    pub name: String,
    pub volume: Volume,
}

impl InstanceCreateRequest {
    /// Create params with the flavor, volume size (GB) and instance name
    pub fn new(flavor_ref: impl Into<String>, volume_size: u32, name: impl Into<String>) -> Self {
        Self {
            flavor_ref: flavor_ref.into(),
            name: name.into(),
            volume: Volume { size: volume_size },
        }
    }
}
