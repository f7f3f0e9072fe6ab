use chrono::{DateTime, Duration, TimeZone, Utc};
use crate::{
    config::BankConfig,
    models::{
        bank::{Bank, BankID},
        bond::{BondTemplate, BondTemplateID},
        registry::BankRegistry,
    },
    system::time::TimeUnit,
    transactions::teller::Teller,
};

/// A fixed instant `hours` hours after our test epoch. Tests never use the
/// wall clock so elapsed-time math stays exact.
pub(crate) fn instant(hours: i64) -> DateTime<Utc> {
    epoch() + Duration::hours(hours)
}

/// A fixed instant `millis` milliseconds after our test epoch.
pub(crate) fn instant_ms(millis: i64) -> DateTime<Utc> {
    epoch() + Duration::milliseconds(millis)
}

fn epoch() -> DateTime<Utc> {
    // 2020-01-01T00:00:00Z
    Utc.timestamp_opt(1_577_836_800, 0).unwrap()
}

pub(crate) fn make_bank(id: u64, balance: u64, interest_rate: u32, time_unit: TimeUnit) -> Bank {
    Bank::builder()
        .id(BankID::new(id))
        .balance(balance)
        .interest_rate(interest_rate)
        .time_unit(time_unit)
        .bond_system_active(true)
        .build().unwrap()
}

pub(crate) fn make_template<T: Into<String>>(id: u64, name: T, cost: u64, matured_value: u64, mature_time: u64) -> BondTemplate {
    let name = name.into();
    BondTemplate::builder()
        .id(BondTemplateID::new(id))
        .help_text(format!("{} matures after {} units.", name, mature_time))
        .name(name)
        .cost(cost)
        .matured_value(matured_value)
        .mature_time(mature_time)
        .build().unwrap()
}

pub(crate) fn make_teller() -> Teller {
    Teller::new(BankRegistry::new(), BankConfig::new())
}
