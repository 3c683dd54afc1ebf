//! # cart-core
//!
//! Core types for the quick-cart checkout engine.
//!
//! This crate provides:
//! - `Product` and `Catalog`, with optional expiry and shipping capabilities
//! - `Cart` for accumulating selections
//! - `Customer` with a spendable balance
//! - `ship` and `ShipmentNotice` for the physical part of an order
//! - `Checkout`, `Receipt` and the `ReceiptSink` trait
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{checkout, Cart, Catalog, Customer, Money, Product, Weight};
//!
//! let mut catalog = Catalog::from_products([
//!     Product::new("TV", Money::from_major(200), 3).with_weight(Weight::from_grams(5000)),
//! ])?;
//!
//! let mut cart = Cart::new();
//! cart.add_product(catalog.get("TV").unwrap(), 1)?;
//!
//! let mut customer = Customer::new("Shaza", Money::from_major(500));
//! let receipt = checkout(&mut customer, &cart, &mut catalog)?;
//!
//! assert_eq!(receipt.amount, Money::from_major(230));
//! # Ok::<(), cart_core::CartError>(())
//! ```

pub mod cart;
pub mod checkout;
pub mod clock;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod receipt;
pub mod shipping;
pub mod weight;

// Re-exports for convenience
pub use cart::{Cart, CartEntry};
pub use checkout::{checkout, Checkout, CheckoutPolicy, DEFAULT_SHIPPING_FEE};
pub use clock::{fixed_clock, system_clock, Clock, FixedClock, SharedClock, SystemClock};
pub use customer::Customer;
pub use error::{CartError, CartResult};
pub use money::Money;
pub use product::{Catalog, Product};
pub use receipt::{LoggingSink, Receipt, ReceiptLine, ReceiptSink, RecordingSink};
pub use shipping::{ship, ShipmentItem, ShipmentLine, ShipmentNotice};
pub use weight::Weight;
