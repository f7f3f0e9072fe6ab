//! Scripted bank commands. Game events drive the bank with one-line commands
//! like `BankOpen 0 10` or `Bank 0 AddBond ...`; this module turns those lines
//! into a typed `Command` and runs it against a `Teller`.
//!
//! ```text
//! BankOpen <bankId> <interestRate> [<Seconds|Minutes|Hours|Days>]
//! Bank <bankId> AddBond <templateId> <name...> <cost> <maturedValue> <matureTime> <helpText...>
//! Bank <bankId> UpdateBond <templateId> <name...> <cost> <maturedValue> <matureTime> <helpText...>
//! Bank AddOverwrites <On|Off>
//! Bank <bankId> ChangeTimeUnit <Seconds|Minutes|Hours|Days>
//! Bank <bankId> BondSystemEnabled <0|1>
//! ```
//!
//! A bond name can be several words, and can end in numbers. The terms (cost,
//! matured value, mature time) are the last three integers in a row that
//! still leave some help text after them, or the trailing three if there's
//! no help text. Everything after the terms is the help text, where a literal
//! `\n` becomes a line break.

use chrono::{DateTime, Utc};
use crate::{
    error::{Error, Result},
    models::{
        bank::{Bank, BankID},
        bond::{BondTemplate, BondTemplateID},
        catalog::CatalogChange,
    },
    system::time::TimeUnit,
    transactions::teller::Teller,
};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Open { bank_id: BankID, interest_rate: u32, time_unit: Option<TimeUnit> },
    AddBond { bank_id: BankID, template: BondTemplate },
    UpdateBond { bank_id: BankID, template: BondTemplate },
    AddOverwrites(bool),
    ChangeTimeUnit { bank_id: BankID, time_unit: TimeUnit },
    BondSystemEnabled { bank_id: BankID, active: bool },
}

/// What running a command produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A bank was opened; the host should show the bank screen
    Opened(Bank),
    /// A catalog was written to
    Catalog(CatalogChange),
    Done,
}

fn number<T: FromStr>(token: &str, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::InvalidCommand(format!("bad {}: {}", what, token)))
}

fn is_number(token: &&str) -> bool {
    token.parse::<u64>().is_ok()
}

/// Parse the arguments of `AddBond`/`UpdateBond` (everything after the verb).
fn parse_template(args: &[&str]) -> Result<BondTemplate> {
    let (id, rest) = args.split_first()
        .ok_or_else(|| Error::InvalidCommand("missing bond template id".into()))?;
    let runs = rest.windows(3)
        .enumerate()
        .skip(1)
        .filter(|(_, window)| window.iter().all(is_number))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    let split = runs.iter()
        .rev()
        .find(|idx| **idx + 3 < rest.len())
        .or_else(|| runs.last())
        .copied()
        .ok_or_else(|| Error::InvalidCommand(format!("missing bond name or terms: {}", args.join(" "))))?;
    BondTemplate::builder()
        .id(number::<BondTemplateID>(id, "bond template id")?)
        .name(rest[..split].join(" "))
        .cost(number::<u64>(rest[split], "bond cost")?)
        .matured_value(number::<u64>(rest[split + 1], "bond matured value")?)
        .mature_time(number::<u64>(rest[split + 2], "bond mature time")?)
        .help_text(rest[split + 3..].join(" ").replace("\\n", "\n"))
        .build()
        .map_err(|e| Error::BuilderFailed(e))
}

/// Parse a single command line.
pub fn parse(line: &str) -> Result<Command> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let command = match tokens.as_slice() {
        ["BankOpen", bank_id, rate] => Command::Open {
            bank_id: number(bank_id, "bank id")?,
            interest_rate: number(rate, "interest rate")?,
            time_unit: None,
        },
        ["BankOpen", bank_id, rate, unit] => Command::Open {
            bank_id: number(bank_id, "bank id")?,
            interest_rate: number(rate, "interest rate")?,
            time_unit: Some(unit.parse()?),
        },
        ["Bank", "AddOverwrites", toggle] => match *toggle {
            "On" => Command::AddOverwrites(true),
            "Off" => Command::AddOverwrites(false),
            _ => Err(Error::InvalidCommand(format!("AddOverwrites takes On or Off, not {}", toggle)))?,
        },
        ["Bank", bank_id, "AddBond", args @ ..] => Command::AddBond {
            bank_id: number(bank_id, "bank id")?,
            template: parse_template(args)?,
        },
        ["Bank", bank_id, "UpdateBond", args @ ..] => Command::UpdateBond {
            bank_id: number(bank_id, "bank id")?,
            template: parse_template(args)?,
        },
        ["Bank", bank_id, "ChangeTimeUnit", unit] => Command::ChangeTimeUnit {
            bank_id: number(bank_id, "bank id")?,
            time_unit: unit.parse()?,
        },
        ["Bank", bank_id, "BondSystemEnabled", flag] => Command::BondSystemEnabled {
            bank_id: number(bank_id, "bank id")?,
            active: number::<u64>(flag, "bond system flag")? != 0,
        },
        _ => Err(Error::InvalidCommand(line.to_string()))?,
    };
    Ok(command)
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Command {
    /// Run this command. `now` is only used when opening a bank.
    pub fn apply(self, teller: &mut Teller, now: &DateTime<Utc>) -> Result<Outcome> {
        Ok(match self {
            Command::Open { bank_id, interest_rate, time_unit } => {
                Outcome::Opened(teller.open(bank_id, interest_rate, time_unit, now)?)
            }
            Command::AddBond { bank_id, template } => Outcome::Catalog(teller.add_bond_template(bank_id, template)?),
            Command::UpdateBond { bank_id, template } => Outcome::Catalog(teller.update_bond_template(bank_id, template)?),
            Command::AddOverwrites(overwrite) => {
                teller.set_add_overwrites(overwrite);
                Outcome::Done
            }
            Command::ChangeTimeUnit { bank_id, time_unit } => {
                teller.set_time_unit(&bank_id, time_unit)?;
                Outcome::Done
            }
            Command::BondSystemEnabled { bank_id, active } => {
                teller.set_bond_system_active(&bank_id, active)?;
                Outcome::Done
            }
        })
    }
}
