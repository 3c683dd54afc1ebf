//! # Demo Scenarios
//!
//! Sample stock and the canned shopping trips the binary can replay.

use crate::config::DemoConfig;
use crate::console::ConsoleSink;
use cart_core::{
    Cart, CartResult, Catalog, Checkout, Customer, Money, Product, Receipt, SharedClock, Weight,
};
use chrono::{Days, NaiveDate};
use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use tracing::info;

/// A canned shopping trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Cheese, biscuits and a scratch card; succeeds
    Provided,
    /// Includes expired biscuits
    Expired,
    /// Costs more than the customer can pay
    InsufficientBalance,
    /// Asks for more scratch cards than are in stock
    InsufficientStock,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Provided,
        Scenario::Expired,
        Scenario::InsufficientBalance,
        Scenario::InsufficientStock,
    ];

    /// Products and quantities added to the cart, in order
    pub fn selections(&self) -> &'static [(&'static str, u32)] {
        match self {
            Scenario::Provided => &[("Cheese", 2), ("Biscuits", 1), ("Scratch Card", 1)],
            Scenario::Expired => &[("Cheese", 2), ("Lotus Biscuits", 1), ("Scratch Card", 2)],
            Scenario::InsufficientBalance => &[("Cheese", 4), ("Biscuits", 2)],
            Scenario::InsufficientStock => &[("Cheese", 1), ("Scratch Card", 4)],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        f.write_str(&name)
    }
}

/// Built-in stock, with expiry dates relative to `today`
pub fn sample_catalog(today: NaiveDate) -> CartResult<Catalog> {
    Catalog::from_products([
        Product::new("Cheese", Money::from_major(100), 10)
            .with_expiry(today + Days::new(2))
            .with_weight(Weight::from_grams(400)),
        Product::new("Biscuits", Money::from_major(150), 5)
            .with_expiry(today + Days::new(1))
            .with_weight(Weight::from_grams(700)),
        Product::new("Lotus Biscuits", Money::from_major(150), 5)
            .with_expiry(today - Days::new(1))
            .with_weight(Weight::from_grams(700)),
        Product::new("TV", Money::from_major(200), 3).with_weight(Weight::from_grams(5000)),
        Product::new("Scratch Card", Money::from_major(50), 3),
    ])
}

/// Sample catalog, or the configured TOML file
pub fn load_catalog(config: &DemoConfig, today: NaiveDate) -> anyhow::Result<Catalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(sample_catalog(today)?);
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let catalog = Catalog::from_toml(&content, today)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    info!("Loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Add selections in order, stopping at the first rejection
fn fill_cart(cart: &mut Cart, catalog: &Catalog, selections: &[(&str, u32)]) -> CartResult<()> {
    for (name, quantity) in selections {
        cart.add_product(catalog.require(name)?, *quantity)?;
    }
    Ok(())
}

/// Replay one scenario against fresh stock and a fresh customer.
///
/// Rejections are written as `NOTE:` lines and checkout still runs on
/// whatever made it into the cart. Returns the receipt when checkout succeeds.
pub fn run_scenario<W: Write>(
    scenario: Scenario,
    config: &DemoConfig,
    clock: SharedClock,
    sink: &mut ConsoleSink<W>,
) -> anyhow::Result<Option<Receipt>> {
    let mut catalog = load_catalog(config, clock.today())?;
    let mut customer = Customer::new(config.customer.clone(), config.balance);
    let mut cart = Cart::with_clock(clock.clone());

    info!(%scenario, "running scenario");

    if let Err(err) = fill_cart(&mut cart, &catalog, scenario.selections()) {
        if !err.is_validation() {
            return Err(err.into());
        }
        sink.note(&err);
    }

    let checkout = Checkout::new(clock).with_policy(config.policy());
    match checkout.run(&mut customer, &cart, &mut catalog, sink) {
        Ok(receipt) => Ok(Some(receipt)),
        Err(err) if err.is_validation() => {
            sink.note(&err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
