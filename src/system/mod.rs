//! The system module holds the pure engines of the bank core: counting
//! elapsed time in a bank's time unit, and the interest that time earns.

pub mod interest;
pub mod time;
