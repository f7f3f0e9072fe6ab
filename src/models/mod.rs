//! Models are the typed aggregates the bank core operates on. Nothing in here
//! knows about sessions or the player's purse; that lives in
//! [transactions](../transactions/index.html).

#[macro_use]
mod lib;

// loaded in dependency order
pub mod bond;
pub mod catalog;
pub mod ledger;
pub mod bank;
pub mod registry;
