//! Raw record types mirroring the smurfy-net API JSON.
//!
//! These are deserialization targets only; everything downstream works on
//! the domain types in `crate::mech`. Numeric fields arrive as either JSON
//! numbers or strings depending on the endpoint, hence `RawValue`.

use crate::core::error::{QuirkError, Result};
use crate::mech::quirk::RawValue;
use serde::Deserialize;
use std::collections::HashMap;

/// One quirk as served by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuirk {
    pub translated_name: String,
    pub value: RawValue,
}

/// One weapon mount entry on a pod sub-assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHardpoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: RawValue,
}

impl RawHardpoint {
    pub fn count(&self) -> Result<u32> {
        self.count
            .as_f64()
            .map(|n| n as u32)
            .ok_or_else(|| QuirkError::BadQuirkValue {
                name: format!("{} hardpoint count", self.kind),
                value: self.count.to_string(),
            })
    }
}

/// The `configuration` section of an omnipod record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPodConfiguration {
    /// Component identifier ("head", "left_arm", ...).
    pub name: String,
    #[serde(default)]
    pub quirks: Vec<RawQuirk>,
    #[serde(default)]
    pub hardpoints: Vec<RawHardpoint>,
}

/// The `details` section of an omnipod record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPodDetails {
    /// Variant (omnipod set) the pod belongs to, e.g. "TBR-PRIME".
    pub set: String,
    #[serde(default)]
    pub hardpoints: Vec<RawHardpoint>,
}

/// One omnipod record from the omnipods endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOmnipod {
    pub configuration: RawPodConfiguration,
    pub details: RawPodDetails,
}

/// The omnipods endpoint: chassis name → pod id → pod record.
pub type RawOmnipodMap = HashMap<String, HashMap<String, RawOmnipod>>;

/// One entry from the mechs endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMech {
    pub translated_name: String,
    pub faction: String,
    pub family: String,
    #[serde(default)]
    pub details: RawMechDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMechDetails {
    #[serde(default)]
    pub quirks: Vec<RawQuirk>,
}

/// The mechs endpoint: mech id → mech record. Ids are dropped on use.
pub type RawMechMap = HashMap<String, RawMech>;
