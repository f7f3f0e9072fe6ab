//! A bank is a place the player parks gold to earn interest, and (when its
//! bond system is switched on) buys bonds that pay out after a fixed time.
//!
//! Banks are created the first time they're opened and are never deleted.

use chrono::{DateTime, Utc};
use crate::{
    error::{Error, Result},
    models::{
        bond::{BondID, BondInstance, BondTemplate, BondTemplateID},
        catalog::{BondCatalog, CatalogChange},
        ledger::BondLedger,
    },
    system::time::TimeUnit,
};
use std::convert::TryFrom;

bank_model! {
    /// The bank model.
    pub struct Bank {
        id: BankID,
        /// Gold held at this bank. Never negative.
        balance: u64,
        /// Percent of the balance earned per elapsed time unit
        interest_rate: u32,
        /// What unit elapsed time is counted in, for interest and bonds alike
        time_unit: TimeUnit,
        /// When the last session at this bank closed. `None` until the first
        /// close, and no interest accrues before then.
        #[builder(default)]
        #[serde(default)]
        last_access: Option<DateTime<Utc>>,
        /// Gates every bond operation at this bank
        bond_system_active: bool,
        #[builder(default)]
        #[serde(default)]
        catalog: BondCatalog,
        #[builder(default)]
        #[serde(default)]
        ledger: BondLedger,
    }
    BankBuilder
}

impl Bank {
    /// Adjust the bank's balance. Can be positive or negative. The balance
    /// cannot go below zero. Returns the updated balance on success.
    pub(crate) fn adjust_balance(&mut self, amount: i64) -> Result<&u64> {
        let new_amount = i128::from(self.balance) + i128::from(amount);
        if new_amount < 0 {
            Err(Error::InsufficientBalance {
                available: self.balance,
                required: amount.unsigned_abs(),
            })?;
        }
        let new_amount = u64::try_from(new_amount).map_err(|_| Error::BalanceOverflow)?;
        self.set_balance(new_amount);
        Ok(self.balance())
    }

    /// How many bonds the player holds here.
    pub fn bond_count(&self) -> usize {
        self.ledger.len()
    }

    fn bond_check(&self) -> Result<()> {
        if !self.bond_system_active {
            Err(Error::BondSystemDisabled)?;
        }
        Ok(())
    }

    /// Add a bond template to the catalog, honoring the overwrite policy.
    pub(crate) fn add_bond_template(&mut self, template: BondTemplate, overwrite: bool) -> Result<CatalogChange> {
        self.bond_check()?;
        Ok(self.catalog.add(template, overwrite))
    }

    /// Add or overwrite a bond template.
    pub(crate) fn update_bond_template(&mut self, template: BondTemplate) -> Result<CatalogChange> {
        self.bond_check()?;
        Ok(self.catalog.update(template))
    }

    /// Look up a template for purchase.
    pub fn bond_template(&self, id: &BondTemplateID) -> Result<&BondTemplate> {
        self.bond_check()?;
        self.catalog.get(id).ok_or(Error::UnknownTemplate(*id))
    }

    /// Put a newly bought bond into the ledger. Payment is the caller's job.
    pub(crate) fn purchase_bond(&mut self, id: BondID, template_id: &BondTemplateID, now: &DateTime<Utc>) -> Result<BondInstance> {
        let template = self.bond_template(template_id)?.clone();
        Ok(self.ledger.purchase(id, &template, now))
    }

    /// Pull a mature bond out of the ledger and return its payout.
    pub(crate) fn redeem_bond(&mut self, id: &BondID, now: &DateTime<Utc>) -> Result<u64> {
        self.bond_check()?;
        let unit = self.time_unit;
        self.ledger.redeem(id, unit, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    #[test]
    fn balance_cannot_go_negative() {
        let mut bank = make_bank(0, 50, 10, TimeUnit::Hours);
        assert_eq!(bank.adjust_balance(-49), Ok(&1));
        assert_eq!(bank.balance(), &1);
        assert_eq!(bank.adjust_balance(-1), Ok(&0));
        let res = bank.adjust_balance(-1);
        assert_eq!(res, Err(Error::InsufficientBalance { available: 0, required: 1 }));
        assert_eq!(bank.balance(), &0);
        assert_eq!(bank.adjust_balance(1000), Ok(&1000));
    }

    #[test]
    fn balance_overflow() {
        let mut bank = make_bank(0, u64::MAX - 1, 10, TimeUnit::Hours);
        assert_eq!(bank.adjust_balance(2), Err(Error::BalanceOverflow));
        assert_eq!(bank.balance(), &(u64::MAX - 1));
    }

    #[test]
    fn bond_system_gates_everything() {
        let mut bank = make_bank(0, 0, 0, TimeUnit::Hours);
        bank.add_bond_template(make_template(0, "Basic Bond", 10, 1000, 10), false).unwrap();
        let bond = bank.purchase_bond(BondID::new(1), &BondTemplateID::new(0), &instant(0)).unwrap();

        bank.set_bond_system_active(false);
        assert_eq!(bank.add_bond_template(make_template(1, "Nope", 1, 1, 1), false), Err(Error::BondSystemDisabled));
        assert_eq!(bank.update_bond_template(make_template(1, "Nope", 1, 1, 1)), Err(Error::BondSystemDisabled));
        assert_eq!(bank.catalog().len(), 1);
        assert_eq!(bank.bond_template(&BondTemplateID::new(0)).map(|_| ()), Err(Error::BondSystemDisabled));
        assert_eq!(bank.purchase_bond(BondID::new(2), &BondTemplateID::new(0), &instant(0)), Err(Error::BondSystemDisabled));
        assert_eq!(bank.redeem_bond(bond.id(), &instant(100)), Err(Error::BondSystemDisabled));
        assert_eq!(bank.bond_count(), 1);

        bank.set_bond_system_active(true);
        assert_eq!(bank.redeem_bond(bond.id(), &instant(100)), Ok(1000));
        assert_eq!(bank.bond_count(), 0);
    }

    #[test]
    fn purchase_unknown_template() {
        let mut bank = make_bank(0, 0, 0, TimeUnit::Hours);
        let res = bank.purchase_bond(BondID::new(1), &BondTemplateID::new(5), &instant(0));
        assert_eq!(res, Err(Error::UnknownTemplate(BondTemplateID::new(5))));
        assert!(bank.ledger().is_empty());
    }

    #[test]
    fn redeem_uses_bank_time_unit() {
        let mut bank = make_bank(0, 0, 0, TimeUnit::Days);
        bank.update_bond_template(make_template(0, "Slow Bond", 10, 1000, 1)).unwrap();
        let bond = bank.purchase_bond(BondID::new(1), &BondTemplateID::new(0), &instant(0)).unwrap();
        assert_eq!(bank.redeem_bond(bond.id(), &instant(23)), Err(Error::NotMature { elapsed: 0, required: 1 }));
        assert_eq!(bank.redeem_bond(bond.id(), &instant(24)), Ok(1000));
    }
}
