//! # quick-cart
//!
//! Replays canned shopping trips against the checkout engine.
//!
//! ## Usage
//!
//! ```bash
//! quick-cart --scenario insufficient-balance
//! quick-cart --all --format json
//! CUSTOMER_BALANCE=1000 quick-cart --catalog config/products.toml
//! ```

use cart_cli::{run_scenario, ConsoleSink, DemoConfig};
use cart_core::system_clock;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only notices and receipts
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = DemoConfig::load()?;
    info!(
        scenarios = config.scenarios.len(),
        customer = %config.customer,
        balance = %config.balance,
        "configuration loaded"
    );

    let clock = system_clock();
    let show_headings = config.scenarios.len() > 1;
    let mut sink = ConsoleSink::new(std::io::stdout().lock(), config.format);

    for &scenario in &config.scenarios {
        if show_headings {
            sink.heading(scenario);
        }
        run_scenario(scenario, &config, clock.clone(), &mut sink)?;
    }

    sink.finish()?;
    Ok(())
}
