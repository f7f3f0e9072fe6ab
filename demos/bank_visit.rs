use bank_core::{
    error::Result,
    BankConfig, BankID, BankRegistry, BondTemplateID, Command, Outcome, Teller, Wallet,
};
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

/// A game's event scripts set up the bank's bonds before the player ever
/// walks in, then open the bank.
fn setup(teller: &mut Teller) -> Result<()> {
    let script = [
        r"Bank 0 AddBond 0 Basic Bond 10 1000 10 This bond will mature after 10 hours.\nPays 1000 gold.",
        r"Bank 0 AddBond 1 Quick Bond 50 60 1 Matures after an hour.",
    ];
    let now = Utc::now();
    for line in script.iter() {
        line.parse::<Command>()?.apply(teller, &now)?;
    }
    Ok(())
}

fn example() -> Result<()> {
    let mut teller = Teller::new(BankRegistry::new(), BankConfig::new());
    let mut wallet = Wallet::new(2000);
    setup(&mut teller)?;

    // first visit: stash some gold and buy a bond
    let start = Utc::now();
    let opened = "BankOpen 0 10".parse::<Command>()?.apply(&mut teller, &start)?;
    if let Outcome::Opened(bank) = opened {
        println!("Welcome to bank {}! Balance: {}", bank.id(), bank.balance());
    }
    teller.deposit(&mut wallet, 1000)?;
    let bond = teller.buy_bond(&mut wallet, &BondTemplateID::new(0), &start)?;
    println!("Bought {} (#{}) for {} gold", bond.name(), bond.id(), bond.cost());
    teller.close(BankID::new(0), &start)?;

    // the host saves, and some time later loads the game again
    let save = teller.into_registry().to_json()?;
    let mut teller = Teller::new(BankRegistry::from_json(&save)?, BankConfig::new());

    let later = start + Duration::hours(12);
    let bank = teller.open(BankID::new(0), 10, None, &later)?;
    println!("Twelve hours later, balance: {}", bank.balance());
    for status in teller.bond_status(&later)? {
        println!("  {}: {} units held, mature: {}", status.bond().name(), status.elapsed(), status.mature());
    }
    let payout = teller.sell_bond(&mut wallet, bond.id(), &later)?;
    println!("Sold bond for {} gold, now carrying {}", payout, wallet.gold());
    teller.close(BankID::new(0), &later)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(e) = example() {
        eprintln!("bank visit failed: {}", e);
        std::process::exit(1);
    }
}
