//! Interest accrual. Interest is simple interest over the whole span since the
//! bank was last closed, applied in one lump when the bank is opened:
//!
//! ```text
//! balance' = balance + floor(elapsed * rate / 100 * balance)
//! ```
//!
//! Because the lump is folded back into the balance, interest compounds once
//! per visit and not per elapsed unit. Accrual never touches `last_access`;
//! marking the bank as settled happens when the session closes.

use chrono::{DateTime, Utc};
use crate::{
    error::{Error, Result},
    models::bank::Bank,
    system::time,
};
use rust_decimal::prelude::*;
use rust_decimal_macros::*;

/// The interest earned on `balance` at `rate` percent over `elapsed` units,
/// floored to whole gold.
pub fn interest_due(balance: u64, rate: u32, elapsed: u64) -> Result<u64> {
    if elapsed == 0 || rate == 0 || balance == 0 {
        return Ok(0);
    }
    Decimal::from(elapsed)
        .checked_mul(Decimal::from(rate))
        .and_then(|x| x.checked_mul(Decimal::from(balance)))
        .map(|x| x / dec!(100))
        .and_then(|x| x.floor().to_u64())
        .ok_or(Error::BalanceOverflow)
}

/// What the bank's balance would be after accruing interest up to `now` at
/// `rate`. Doesn't modify the bank.
///
/// A balance that would grow past `u64::MAX` stops there, so a bank that has
/// earned more than it can hold still opens.
pub fn accrued_balance(bank: &Bank, rate: u32, now: &DateTime<Utc>) -> Result<u64> {
    let elapsed = time::elapsed_units(bank.last_access().as_ref(), now, *bank.time_unit());
    let balance = *bank.balance();
    match interest_due(balance, rate, elapsed) {
        Ok(interest) => Ok(balance.saturating_add(interest)),
        Err(Error::BalanceOverflow) => Ok(u64::MAX),
        Err(e) => Err(e),
    }
}

/// Apply pending interest to the bank, returning the new balance.
pub fn accrue(bank: &mut Bank, now: &DateTime<Utc>) -> Result<u64> {
    let balance = accrued_balance(bank, *bank.interest_rate(), now)?;
    bank.set_balance(balance);
    Ok(balance)
}
