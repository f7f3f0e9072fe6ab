//! The teller runs a visit to a bank: it opens the bank (paying out any
//! interest earned since the last visit), handles deposits, withdrawals, and
//! bond trades while the bank is open, and marks the bank as settled when the
//! visit closes. It also carries out the scripted catalog commands.
//!
//! Only one bank can be open at a time. Every operation checks everything it
//! needs before touching state, so a rejected operation changes nothing.
//!
//! Moving gold between a bank and the player's [Purse][purse] happens in two
//! steps (bank first, purse second) and is not atomic. If the host dies in
//! between, the player can lose or gain the amount in flight.
//!
//! [purse]: ../../funds/trait.Purse.html

use chrono::{DateTime, Utc};
use crate::{
    config::BankConfig,
    error::{Error, Result},
    funds::Purse,
    models::{
        bank::{Bank, BankID},
        bond::{BondID, BondInstance, BondTemplate, BondTemplateID},
        catalog::CatalogChange,
        registry::BankRegistry,
    },
    system::{interest, time::TimeUnit},
};
use getset::Getters;
use tracing::{debug, info, warn};

/// A bond the player owns along with how far along it is, for a sell screen.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct BondStatus {
    bond: BondInstance,
    /// Time units held so far
    elapsed: u64,
    /// Whether the bond can be sold
    mature: bool,
}

/// The single writer of the bank registry.
#[derive(Debug)]
pub struct Teller {
    registry: BankRegistry,
    config: BankConfig,
    /// The bank currently open, if any
    open: Option<BankID>,
}

impl Teller {
    /// Create a teller over a registry (fresh, or restored from a save).
    pub fn new(registry: BankRegistry, config: BankConfig) -> Self {
        Self {
            registry,
            config,
            open: None,
        }
    }

    pub fn registry(&self) -> &BankRegistry {
        &self.registry
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Give the registry back, for saving.
    pub fn into_registry(self) -> BankRegistry {
        self.registry
    }

    /// The id of the open bank, if there is one.
    pub fn open_bank(&self) -> Option<&BankID> {
        self.open.as_ref()
    }

    fn snapshot(&self, id: &BankID) -> Result<Bank> {
        self.registry.get(id).cloned().ok_or(Error::UnknownBank(*id))
    }

    fn session_bank(&self) -> Result<&Bank> {
        let id = self.open.ok_or(Error::NoOpenSession)?;
        self.registry.get(&id).ok_or(Error::UnknownBank(id))
    }

    fn session_bank_mut(&mut self) -> Result<&mut Bank> {
        let id = self.open.ok_or(Error::NoOpenSession)?;
        self.registry.get_mut(&id)
    }

    fn check_amount(&self, amount: i64) -> Result<u64> {
        if amount < 0 || amount as u64 > *self.config.max_transaction() {
            Err(Error::InvalidAmount(amount))?;
        }
        Ok(amount as u64)
    }

    /// Open a bank for a visit, creating it if it's new.
    ///
    /// A new bank gets `interest_rate` and `time_unit` (or the configured
    /// default unit). An existing bank only takes `interest_rate` if its own
    /// rate is zero, ignores `time_unit`, and has any interest earned since
    /// its last close added to its balance.
    ///
    /// Returns a snapshot of the bank for display.
    pub fn open(&mut self, bank_id: BankID, interest_rate: u32, time_unit: Option<TimeUnit>, now: &DateTime<Utc>) -> Result<Bank> {
        if let Some(open) = self.open {
            Err(Error::SessionAlreadyOpen(open))?;
        }
        if self.registry.exists(&bank_id) {
            let bank = self.snapshot(&bank_id)?;
            let rate = if *bank.interest_rate() == 0 { interest_rate } else { *bank.interest_rate() };
            let balance = interest::accrued_balance(&bank, rate, now)?;
            self.registry.set_interest_rate(&bank_id, interest_rate)?;
            self.registry.get_mut(&bank_id)?.set_balance(balance);
            debug!(bank_id = %bank_id, before = bank.balance(), after = balance, "interest accrued");
        } else {
            let unit = time_unit.unwrap_or(*self.config.default_time_unit());
            self.registry.get_or_create(bank_id, interest_rate, unit, *self.config.bond_system_active())?;
            info!(bank_id = %bank_id, interest_rate, time_unit = %unit, "bank created");
        }
        self.open = Some(bank_id);
        info!(bank_id = %bank_id, "bank opened");
        self.snapshot(&bank_id)
    }

    /// Close the open bank, recording `now` as its last access so the next
    /// visit earns interest from this point.
    pub fn close(&mut self, bank_id: BankID, now: &DateTime<Utc>) -> Result<Bank> {
        match self.open {
            None => Err(Error::NoOpenSession)?,
            Some(open) if open != bank_id => Err(Error::SessionMismatch { open, requested: bank_id })?,
            Some(_) => {}
        }
        self.registry.get_mut(&bank_id)?.set_last_access(Some(now.clone()));
        self.open = None;
        info!(bank_id = %bank_id, "bank closed");
        self.snapshot(&bank_id)
    }

    /// Drop the open session without closing it, as if the game crashed. The
    /// bank keeps its old last access time, so the next open accrues interest
    /// over the whole span again. Returns the bank that was open.
    pub fn abandon(&mut self) -> Option<BankID> {
        let open = self.open.take();
        if let Some(bank_id) = open {
            warn!(bank_id = %bank_id, "bank session abandoned without closing");
        }
        open
    }

    /// Move gold from the player's purse into the open bank.
    pub fn deposit<P: Purse>(&mut self, purse: &mut P, amount: i64) -> Result<Bank> {
        self.session_bank()?;
        let gold = self.check_amount(amount)?;
        let available = purse.current_gold();
        if available < gold {
            Err(Error::InsufficientBalance { available, required: gold })?;
        }
        let bank = self.session_bank_mut()?;
        bank.adjust_balance(amount)?;
        purse.lose_gold(gold);
        debug!(bank_id = %bank.id(), amount = gold, balance = bank.balance(), "deposit");
        Ok(bank.clone())
    }

    /// Move gold from the open bank into the player's purse.
    pub fn withdraw<P: Purse>(&mut self, purse: &mut P, amount: i64) -> Result<Bank> {
        self.session_bank()?;
        let gold = self.check_amount(amount)?;
        let bank = self.session_bank_mut()?;
        bank.adjust_balance(-amount)?;
        purse.gain_gold(gold);
        debug!(bank_id = %bank.id(), amount = gold, balance = bank.balance(), "withdraw");
        Ok(bank.clone())
    }

    /// The terms of a bond at the open bank, for the player to look over
    /// before buying.
    pub fn quote_bond(&self, template_id: &BondTemplateID) -> Result<BondTemplate> {
        Ok(self.session_bank()?.bond_template(template_id)?.clone())
    }

    /// Buy a bond at the open bank, paying its cost from the player's purse.
    pub fn buy_bond<P: Purse>(&mut self, purse: &mut P, template_id: &BondTemplateID, now: &DateTime<Utc>) -> Result<BondInstance> {
        let cost = *self.session_bank()?.bond_template(template_id)?.cost();
        let available = purse.current_gold();
        if available < cost {
            Err(Error::InsufficientBalance { available, required: cost })?;
        }
        let bond_id = self.registry.next_bond_id();
        let bond = self.session_bank_mut()?.purchase_bond(bond_id, template_id, now)?;
        purse.lose_gold(cost);
        info!(bond_id = %bond.id(), template_id = %template_id, cost, "bond purchased");
        Ok(bond)
    }

    /// Sell a mature bond back to the open bank, crediting its payout to the
    /// player's purse. Returns the payout.
    pub fn sell_bond<P: Purse>(&mut self, purse: &mut P, bond_id: &BondID, now: &DateTime<Utc>) -> Result<u64> {
        let payout = self.session_bank_mut()?.redeem_bond(bond_id, now)?;
        purse.gain_gold(payout);
        info!(bond_id = %bond_id, payout, "bond redeemed");
        Ok(payout)
    }

    /// Every bond the player owns at the open bank, with its progress.
    pub fn bond_status(&self, now: &DateTime<Utc>) -> Result<Vec<BondStatus>> {
        let bank = self.session_bank()?;
        let unit = *bank.time_unit();
        Ok(bank.ledger().iter()
            .map(|bond| BondStatus {
                bond: bond.clone(),
                elapsed: bond.elapsed(unit, now),
                mature: bond.is_mature(unit, now),
            })
            .collect())
    }

    /// Catalog commands can name banks nobody has opened yet. Those get
    /// created with no interest and the configured defaults.
    fn catalog_bank(&mut self, bank_id: BankID) -> Result<&mut Bank> {
        let unit = *self.config.default_time_unit();
        let active = *self.config.bond_system_active();
        if !active && !self.registry.exists(&bank_id) {
            Err(Error::BondSystemDisabled)?;
        }
        self.registry.get_or_create(bank_id, 0, unit, active)
    }

    /// Add a bond template to a bank's catalog. If the id is taken, this is a
    /// no-op unless add-overwrites is on.
    pub fn add_bond_template(&mut self, bank_id: BankID, template: BondTemplate) -> Result<CatalogChange> {
        let overwrite = *self.config.add_bond_overwrites();
        let template_id = *template.id();
        let change = self.catalog_bank(bank_id)?.add_bond_template(template, overwrite)?;
        match change {
            CatalogChange::Ignored => warn!(bank_id = %bank_id, template_id = %template_id, "bond template exists, not overwriting"),
            _ => debug!(bank_id = %bank_id, template_id = %template_id, ?change, "bond template added"),
        }
        Ok(change)
    }

    /// Add a bond template to a bank's catalog, overwriting any existing one.
    pub fn update_bond_template(&mut self, bank_id: BankID, template: BondTemplate) -> Result<CatalogChange> {
        let template_id = *template.id();
        let change = self.catalog_bank(bank_id)?.update_bond_template(template)?;
        debug!(bank_id = %bank_id, template_id = %template_id, ?change, "bond template updated");
        Ok(change)
    }

    /// Toggle whether `add_bond_template()` overwrites existing templates.
    pub fn set_add_overwrites(&mut self, overwrite: bool) {
        self.config.set_add_bond_overwrites(overwrite);
        debug!(overwrite, "add overwrites toggled");
    }

    pub fn set_time_unit(&mut self, bank_id: &BankID, unit: TimeUnit) -> Result<()> {
        self.registry.set_time_unit(bank_id, unit)?;
        debug!(bank_id = %bank_id, time_unit = %unit, "time unit changed");
        Ok(())
    }

    pub fn set_bond_system_active(&mut self, bank_id: &BankID, active: bool) -> Result<()> {
        self.registry.set_bond_system_active(bank_id, active)?;
        debug!(bank_id = %bank_id, active, "bond system toggled");
        Ok(())
    }
}
