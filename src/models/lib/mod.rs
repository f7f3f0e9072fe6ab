#[macro_use]
pub mod bank_model;
