//! Transactions are the primary interface for interacting with the bank core.
//! The [Teller](teller/struct.Teller.html) owns the registry for the length of
//! a game and is the only thing that writes to it. Scripted
//! [commands](command/index.html) are parsed into typed values and run
//! through the teller too.
//!
//! Storage happens somewhere else. The host saves the registry (see
//! `BankRegistry::to_json()`) alongside the rest of its save data.

pub mod command;
pub mod teller;
