//! Defines the host-level parameters for the bank system, such as the time
//! unit new banks count in and whether adding a bond template that already
//! exists overwrites it.

use crate::error::Result;
use crate::system::time::TimeUnit;
use getset::{Getters, Setters};
use serde::{Serialize, Deserialize};

/// Holds bank system parameters. Every field has a default, so a host only
/// needs to supply what it wants to change.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct BankConfig {
    /// The time unit for newly created banks
    default_time_unit: TimeUnit,
    /// Whether newly created banks have the bond system switched on
    bond_system_active: bool,
    /// Whether adding a bond template with an existing id overwrites it
    add_bond_overwrites: bool,
    /// The largest single deposit or withdrawal (ten gold-counter digits)
    max_transaction: u64,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            default_time_unit: TimeUnit::Hours,
            bond_system_active: true,
            add_bond_overwrites: false,
            max_transaction: 9_999_999_999,
        }
    }
}

impl BankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Default::default()
    }

    /// Load a config from a JSON parameter blob.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
