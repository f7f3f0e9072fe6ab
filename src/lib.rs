//! The core of an in-game banking system: banks that pay interest on gold
//! left with them, and bonds that can be bought, left to mature, and sold
//! back for a fixed payout.
//!
//! The core holds state and rules only. Menus, text, input, and the player's
//! gold on hand belong to the host game, which talks to the core through a
//! [Teller] and a [Purse].
//!
//! ```rust
//! use bank_core::{
//!     BankConfig, BankID, BankRegistry, Teller, Wallet,
//! };
//! use chrono::{Duration, Utc};
//!
//! let start = Utc::now();
//! let mut teller = Teller::new(BankRegistry::new(), BankConfig::new());
//! let mut wallet = Wallet::new(1000);
//!
//! teller.open(BankID::new(0), 10, None, &start).unwrap();
//! teller.deposit(&mut wallet, 1000).unwrap();
//! teller.close(BankID::new(0), &start).unwrap();
//!
//! let later = start + Duration::hours(5);
//! let bank = teller.open(BankID::new(0), 10, None, &later).unwrap();
//! assert_eq!(bank.balance(), &1500);
//! ```

pub mod error;
mod util;
#[macro_use]
pub mod models;
pub mod config;
pub mod funds;
pub mod system;
pub mod transactions;

pub use config::BankConfig;
pub use funds::{Purse, Wallet};
pub use models::{
    bank::{Bank, BankID},
    bond::{BondID, BondInstance, BondTemplate, BondTemplateID},
    catalog::{BondCatalog, CatalogChange},
    ledger::BondLedger,
    registry::BankRegistry,
};
pub use system::time::TimeUnit;
pub use transactions::{
    command::{Command, Outcome},
    teller::{BondStatus, Teller},
};
