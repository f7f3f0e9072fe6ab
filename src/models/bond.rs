//! Bonds come in two flavors: the template a bank offers for sale, and the
//! instance a player owns after buying one. An instance copies its template's
//! terms at purchase time, so later template updates never change a bond
//! already in the player's hands.
//!
//! Instances only come from a purchase (or a restored save), so there's no
//! public way to build one with made-up terms:
//!
//! ```compile_fail
//! let bond = bank_core::BondInstance::builder();
//! ```

use chrono::{DateTime, Utc};
use crate::system::time::{self, TimeUnit};

bank_model! {
    /// A bond offering in a bank's catalog.
    pub struct BondTemplate {
        id: BondTemplateID,
        /// Shown in the buy list
        name: String,
        /// What the player pays to buy one
        cost: u64,
        /// What the bond pays out once mature
        matured_value: u64,
        /// How many of the bank's time units until maturity
        mature_time: u64,
        /// Description shown while browsing
        #[builder(default)]
        #[serde(default)]
        help_text: String,
    }
    BondTemplateBuilder
}

bank_model! {
    /// A bond the player owns. The `id` is handed out by the registry and is
    /// unique across every bank.
    pub struct BondInstance {
        id: BondID,
        name: String,
        cost: u64,
        matured_value: u64,
        mature_time: u64,
        /// When the purchase was confirmed
        purchased: DateTime<Utc>,
    }
}

impl BondInstance {
    /// Stamp out a new bond from a template.
    pub(crate) fn from_template(id: BondID, template: &BondTemplate, purchased: &DateTime<Utc>) -> Self {
        Self {
            id,
            name: template.name().clone(),
            cost: *template.cost(),
            matured_value: *template.matured_value(),
            mature_time: *template.mature_time(),
            purchased: purchased.clone(),
        }
    }

    /// How many time units this bond has been held.
    pub fn elapsed(&self, unit: TimeUnit, now: &DateTime<Utc>) -> u64 {
        time::elapsed_units(Some(self.purchased()), now, unit)
    }

    /// Whether the bond has been held at least its mature time.
    pub fn is_mature(&self, unit: TimeUnit, now: &DateTime<Utc>) -> bool {
        self.elapsed(unit, now) >= self.mature_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;

    #[test]
    fn copies_template_terms() {
        let template = make_template(3, "Basic Bond", 10, 1000, 10);
        let now = instant(0);
        let bond = BondInstance::from_template(BondID::new(7), &template, &now);
        assert_eq!(bond.id(), &BondID::new(7));
        assert_eq!(bond.name(), "Basic Bond");
        assert_eq!(bond.cost(), &10);
        assert_eq!(bond.matured_value(), &1000);
        assert_eq!(bond.mature_time(), &10);
        assert_eq!(bond.purchased(), &now);
    }

    #[test]
    fn matures_at_boundary() {
        let template = make_template(0, "Basic Bond", 10, 1000, 10);
        let bond = BondInstance::from_template(BondID::new(1), &template, &instant(0));
        assert_eq!(bond.elapsed(TimeUnit::Hours, &instant(9)), 9);
        assert!(!bond.is_mature(TimeUnit::Hours, &instant(9)));
        assert!(bond.is_mature(TimeUnit::Hours, &instant(10)));
        assert!(bond.is_mature(TimeUnit::Hours, &instant(11)));
        // same span counted in days never gets there
        assert!(!bond.is_mature(TimeUnit::Days, &instant(11)));
    }

    #[test]
    fn builder_requires_fields() {
        let res = BondTemplate::builder()
            .id(BondTemplateID::new(1))
            .name("Half a bond")
            .build();
        assert!(res.is_err());
        let template = BondTemplate::builder()
            .id(BondTemplateID::new(1))
            .name("Whole bond")
            .cost(5u64)
            .matured_value(50u64)
            .mature_time(2u64)
            .build().unwrap();
        assert_eq!(template.help_text(), "");
    }
}
