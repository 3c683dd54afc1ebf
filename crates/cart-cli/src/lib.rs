//! # cart-cli
//!
//! Console demo driver for quick-cart.
//!
//! This crate provides:
//! - `DemoConfig` built from flags, environment and `.env`
//! - Canned `Scenario`s over a sample catalog
//! - `ConsoleSink`, printing shipment notices, receipts and `NOTE:` lines
//!
//! ## Scenarios
//!
//! | Name | Cart | Outcome |
//! |------|------|---------|
//! | `provided` | 2 Cheese, 1 Biscuits, 1 Scratch Card | receipt |
//! | `expired` | 2 Cheese, then expired Lotus Biscuits | note, receipt for the cheese |
//! | `insufficient-balance` | 4 Cheese, 2 Biscuits | notice, then note |
//! | `insufficient-stock` | 1 Cheese, then 4 Scratch Cards | note, receipt for the cheese |

pub mod config;
pub mod console;
pub mod demo;

pub use config::{Cli, DemoConfig, OutputFormat};
pub use console::ConsoleSink;
pub use demo::{run_scenario, sample_catalog, Scenario};
