//! The ledger holds the bonds a player owns at one bank. Bonds enter on
//! purchase and leave on redemption; nothing else removes them.

use chrono::{DateTime, Utc};
use crate::{
    error::{Error, Result},
    models::bond::{BondID, BondInstance, BondTemplate},
    system::time::TimeUnit,
};
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondLedger {
    bonds: Vec<BondInstance>,
}

impl BondLedger {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, id: &BondID) -> Option<&BondInstance> {
        self.bonds.iter().find(|b| b.id() == id)
    }

    fn get_or_err(&self, id: &BondID) -> Result<&BondInstance> {
        self.get(id).ok_or(Error::UnknownInstance(*id))
    }

    /// Record a purchase of `template` confirmed at `now`. The caller allocates
    /// the id (see `BankRegistry::next_bond_id()`) and takes payment.
    pub(crate) fn purchase(&mut self, id: BondID, template: &BondTemplate, now: &DateTime<Utc>) -> BondInstance {
        let bond = BondInstance::from_template(id, template, now);
        self.bonds.push(bond.clone());
        bond
    }

    /// How many time units a bond has been held.
    pub fn maturity_elapsed(&self, id: &BondID, unit: TimeUnit, now: &DateTime<Utc>) -> Result<u64> {
        Ok(self.get_or_err(id)?.elapsed(unit, now))
    }

    pub fn is_mature(&self, id: &BondID, unit: TimeUnit, now: &DateTime<Utc>) -> Result<bool> {
        Ok(self.get_or_err(id)?.is_mature(unit, now))
    }

    /// Remove a mature bond from the ledger, returning its payout. Crediting
    /// the payout is up to the caller.
    pub(crate) fn redeem(&mut self, id: &BondID, unit: TimeUnit, now: &DateTime<Utc>) -> Result<u64> {
        let bond = self.get_or_err(id)?;
        if !bond.is_mature(unit, now) {
            Err(Error::NotMature {
                elapsed: bond.elapsed(unit, now),
                required: *bond.mature_time(),
            })?;
        }
        let payout = *bond.matured_value();
        self.bonds.retain(|b| b.id() != id);
        Ok(payout)
    }

    /// A snapshot of owned bonds, oldest purchase first.
    pub fn list(&self) -> Vec<BondInstance> {
        self.bonds.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BondInstance> {
        self.bonds.iter()
    }

    /// The highest bond id in this ledger, if any.
    pub(crate) fn max_id(&self) -> Option<BondID> {
        self.bonds.iter().map(|b| *b.id()).max()
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    #[test]
    fn purchase_then_redeem() {
        let mut ledger = BondLedger::new();
        let template = make_template(0, "Basic Bond", 10, 1000, 10);
        let bond = ledger.purchase(BondID::new(1), &template, &instant(0));
        assert_eq!(bond.purchased(), &instant(0));
        assert_eq!(ledger.len(), 1);

        assert_eq!(ledger.maturity_elapsed(bond.id(), TimeUnit::Hours, &instant(9)), Ok(9));
        assert_eq!(ledger.is_mature(bond.id(), TimeUnit::Hours, &instant(9)), Ok(false));
        assert_eq!(ledger.is_mature(bond.id(), TimeUnit::Hours, &instant(10)), Ok(true));

        let res = ledger.redeem(bond.id(), TimeUnit::Hours, &instant(0));
        assert_eq!(res, Err(Error::NotMature { elapsed: 0, required: 10 }));
        let res = ledger.redeem(bond.id(), TimeUnit::Hours, &instant(9));
        assert_eq!(res, Err(Error::NotMature { elapsed: 9, required: 10 }));
        assert_eq!(ledger.len(), 1);

        assert_eq!(ledger.redeem(bond.id(), TimeUnit::Hours, &instant(10)), Ok(1000));
        assert!(ledger.is_empty());
        assert_eq!(ledger.redeem(bond.id(), TimeUnit::Hours, &instant(10)), Err(Error::UnknownInstance(BondID::new(1))));
    }

    #[test]
    fn redeem_only_removes_target() {
        let mut ledger = BondLedger::new();
        let quick = make_template(0, "Quick", 1, 2, 1);
        let slow = make_template(1, "Slow", 1, 2, 100);
        ledger.purchase(BondID::new(1), &quick, &instant(0));
        ledger.purchase(BondID::new(2), &slow, &instant(0));
        ledger.purchase(BondID::new(3), &quick, &instant(0));

        assert_eq!(ledger.redeem(&BondID::new(3), TimeUnit::Hours, &instant(1)), Ok(2));
        let ids = ledger.iter().map(|b| b.id().as_u64()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(ledger.max_id(), Some(BondID::new(2)));
        assert_eq!(ledger.list().len(), 2);
    }

    #[test]
    fn unknown_bonds() {
        let ledger = BondLedger::new();
        assert_eq!(ledger.is_mature(&BondID::new(9), TimeUnit::Seconds, &instant(0)), Err(Error::UnknownInstance(BondID::new(9))));
        assert_eq!(ledger.maturity_elapsed(&BondID::new(9), TimeUnit::Seconds, &instant(0)), Err(Error::UnknownInstance(BondID::new(9))));
        assert_eq!(ledger.max_id(), None);
    }
}
