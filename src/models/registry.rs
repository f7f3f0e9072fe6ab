//! The registry is every bank the player has visited, plus the counter that
//! hands out bond ids. It is the one piece of bank state that gets saved: the
//! host puts it in its save file as a single field and hands it back on load.

use crate::{
    error::{Error, Result},
    models::{
        bank::{Bank, BankID},
        bond::BondID,
    },
    system::time::TimeUnit,
};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BankRegistry {
    #[serde(default)]
    banks: BTreeMap<BankID, Bank>,
    /// The last bond id handed out. Ids start at 1.
    #[serde(default)]
    last_bond_id: BondID,
}

impl BankRegistry {
    /// Create an empty registry, for a new game.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn exists(&self, id: &BankID) -> bool {
        self.banks.contains_key(id)
    }

    pub fn get(&self, id: &BankID) -> Option<&Bank> {
        self.banks.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &BankID) -> Result<&mut Bank> {
        self.banks.get_mut(id).ok_or(Error::UnknownBank(*id))
    }

    /// Grab a bank, creating it with a zero balance and the given defaults if
    /// we've never seen this id.
    pub(crate) fn get_or_create(&mut self, id: BankID, interest_rate: u32, time_unit: TimeUnit, bond_system_active: bool) -> Result<&mut Bank> {
        if !self.exists(&id) {
            let bank = Bank::builder()
                .id(id)
                .balance(0u64)
                .interest_rate(interest_rate)
                .time_unit(time_unit)
                .bond_system_active(bond_system_active)
                .build()
                .map_err(|e| Error::BuilderFailed(e))?;
            self.banks.insert(id, bank);
        }
        self.get_mut(&id)
    }

    /// Set a bank's interest rate, but only if it's currently zero. This keeps
    /// a reopen from clobbering a rate that was already configured. Returns
    /// whether the rate changed.
    pub(crate) fn set_interest_rate(&mut self, id: &BankID, rate: u32) -> Result<bool> {
        let bank = self.get_mut(id)?;
        if *bank.interest_rate() != 0 || rate == 0 {
            return Ok(false);
        }
        bank.set_interest_rate(rate);
        Ok(true)
    }

    pub(crate) fn set_time_unit(&mut self, id: &BankID, unit: TimeUnit) -> Result<()> {
        self.get_mut(id)?.set_time_unit(unit);
        Ok(())
    }

    pub(crate) fn set_bond_system_active(&mut self, id: &BankID, active: bool) -> Result<()> {
        self.get_mut(id)?.set_bond_system_active(active);
        Ok(())
    }

    /// Hand out the next bond id. Ids are unique across all banks.
    pub(crate) fn next_bond_id(&mut self) -> BondID {
        self.last_bond_id = BondID::new(self.last_bond_id.as_u64() + 1);
        self.last_bond_id
    }

    /// Iterate over all banks, in id order.
    pub fn banks(&self) -> impl Iterator<Item = &Bank> {
        self.banks.values()
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Serialize the registry for a save file.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a registry from `to_json()` output.
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        Ok(registry.repaired())
    }

    /// Serialize the registry as a value to embed in a larger save payload.
    pub fn to_save_field(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Restore from a save payload's field. Saves made before banks existed
    /// won't have the field, which gives an empty registry.
    pub fn from_save_field(value: Option<serde_json::Value>) -> Result<Self> {
        match value {
            Some(serde_json::Value::Null) | None => Ok(Self::new()),
            Some(value) => {
                let registry: Self = serde_json::from_value(value)?;
                Ok(registry.repaired())
            }
        }
    }

    /// Make sure the bond counter is ahead of every bond on record, so a
    /// hand-edited or truncated save can't cause id reuse.
    fn repaired(mut self) -> Self {
        let max_owned = self.banks.values()
            .filter_map(|b| b.ledger().max_id())
            .max()
            .unwrap_or_default();
        if max_owned > self.last_bond_id {
            self.last_bond_id = max_owned;
        }
        self
    }
}
