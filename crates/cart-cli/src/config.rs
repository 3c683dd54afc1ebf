//! # Demo Configuration
//!
//! Command-line flags with environment fallbacks. A `.env` file in the
//! working directory is loaded first, so every flag can be set there too.

use crate::demo::Scenario;
use cart_core::{CheckoutPolicy, Money};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How receipts are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Shipment notice and receipt as console text
    #[default]
    Text,
    /// Receipt as pretty-printed JSON
    Json,
}

/// Raw command-line arguments
#[derive(Debug, Parser)]
#[command(name = "quick-cart", version, about = "Retail checkout demo")]
pub struct Cli {
    /// Scenario to run
    #[arg(long, env = "CART_SCENARIO", value_enum, default_value_t = Scenario::Provided)]
    pub scenario: Scenario,

    /// Run every scenario, each with fresh stock and balance
    #[arg(long)]
    pub all: bool,

    /// TOML catalog to use instead of the built-in sample
    #[arg(long, env = "CART_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Customer name
    #[arg(long, env = "CUSTOMER_NAME", default_value = "Shaza")]
    pub customer: String,

    /// Starting customer balance
    #[arg(long, env = "CUSTOMER_BALANCE", default_value_t = 500.0)]
    pub balance: f64,

    /// Flat fee for orders with shippable products
    #[arg(long, env = "SHIPPING_FEE", default_value_t = 30.0)]
    pub shipping_fee: f64,

    /// Receipt format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Validated demo configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub scenarios: Vec<Scenario>,
    pub catalog_path: Option<PathBuf>,
    pub customer: String,
    pub balance: Money,
    pub shipping_fee: Money,
    pub format: OutputFormat,
}

impl DemoConfig {
    /// Load `.env`, then parse process arguments
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::try_from(Cli::parse())
    }

    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            shipping_fee: self.shipping_fee,
        }
    }
}

impl TryFrom<Cli> for DemoConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> anyhow::Result<Self> {
        let balance = non_negative_amount("balance", cli.balance)?;
        let shipping_fee = non_negative_amount("shipping fee", cli.shipping_fee)?;

        let scenarios = if cli.all {
            Scenario::ALL.to_vec()
        } else {
            vec![cli.scenario]
        };

        Ok(Self {
            scenarios,
            catalog_path: cli.catalog,
            customer: cli.customer,
            balance,
            shipping_fee,
            format: cli.format,
        })
    }
}

fn non_negative_amount(what: &str, value: f64) -> anyhow::Result<Money> {
    match Money::try_from_decimal(value) {
        Some(amount) if !amount.is_negative() => Ok(amount),
        _ => anyhow::bail!("{what} must be a non-negative amount, got {value}"),
    }
}
