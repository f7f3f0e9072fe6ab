//! The player's gold on hand lives outside the bank core. The core only ever
//! asks the host for it through the `Purse` trait.

use getset::Getters;
use serde::{Serialize, Deserialize};

/// The player's gold on hand, as seen by the bank.
pub trait Purse {
    /// How much gold the player is carrying.
    fn current_gold(&self) -> u64;

    /// Take gold from the player.
    fn lose_gold(&mut self, amount: u64);

    /// Give gold to the player.
    fn gain_gold(&mut self, amount: u64);
}

/// A plain in-memory purse, for hosts that don't have their own.
#[derive(Clone, Debug, Default, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Wallet {
    gold: u64,
}

impl Wallet {
    pub fn new(gold: u64) -> Self {
        Self { gold }
    }
}

impl Purse for Wallet {
    fn current_gold(&self) -> u64 {
        self.gold
    }

    fn lose_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_sub(amount);
    }

    fn gain_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates() {
        let mut wallet = Wallet::new(10);
        wallet.lose_gold(25);
        assert_eq!(wallet.gold(), &0);
        wallet.gain_gold(u64::MAX);
        wallet.gain_gold(1);
        assert_eq!(wallet.current_gold(), u64::MAX);
    }
}
