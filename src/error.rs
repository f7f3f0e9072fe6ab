//! The error module holds every way an operation against the bank core can be
//! rejected. None of these are fatal: a failed operation leaves the registry
//! exactly as it was.

use crate::models::{
    bank::BankID,
    bond::{BondID, BondTemplateID},
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// The amount was negative or above the configured maximum
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    /// A withdrawal or purchase asked for more than is available
    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: u64, required: u64 },
    /// A bond operation was attempted on a bank with bonds switched off
    #[error("the bond system is disabled for this bank")]
    BondSystemDisabled,
    /// The bank id is not in the registry
    #[error("unknown bank {0}")]
    UnknownBank(BankID),
    /// The bond template id is not in the bank's catalog
    #[error("unknown bond template {0}")]
    UnknownTemplate(BondTemplateID),
    /// The bond id is not in the bank's ledger
    #[error("unknown bond {0}")]
    UnknownInstance(BondID),
    /// A bond was redeemed before reaching its mature time
    #[error("bond is not mature ({elapsed} of {required} units elapsed)")]
    NotMature { elapsed: u64, required: u64 },
    /// A balance computation left the range of representable gold
    #[error("balance overflow")]
    BalanceOverflow,
    /// A bank is already open, and only one may be open at a time
    #[error("bank {0} is already open")]
    SessionAlreadyOpen(BankID),
    /// An in-session operation was attempted with no bank open
    #[error("no bank is open")]
    NoOpenSession,
    /// Closing (or operating on) a bank other than the open one
    #[error("bank {open} is open, not bank {requested}")]
    SessionMismatch { open: BankID, requested: BankID },
    /// A command string could not be parsed
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    /// A model builder was missing a field
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// Saving or restoring state failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
