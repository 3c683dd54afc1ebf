//! # Cart
//!
//! Ordered product selections awaiting checkout.

use crate::clock::{system_clock, SharedClock};
use crate::error::{CartError, CartResult};
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A product selection in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product name (identity key into the catalog)
    pub name: String,

    /// Requested quantity
    pub quantity: u32,
}

/// Shopping cart. Entries keep insertion order for the receipt.
#[derive(Clone)]
pub struct Cart {
    entries: Vec<CartEntry>,
    clock: SharedClock,
}

impl Cart {
    /// Create an empty cart reading dates from the system clock
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    /// Create an empty cart reading dates from `clock`
    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Rejects expired products and requests larger than the product's
    /// current stock. Adding a product already in the cart accumulates.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> CartResult<()> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity {
                name: product.name().to_string(),
            });
        }

        if let Err(err) = product.ensure_available(quantity, self.clock.today()) {
            warn!(product = product.name(), quantity, error = %err, "rejected cart addition");
            return Err(err);
        }

        match self.entries.iter_mut().find(|e| e.name == product.name()) {
            Some(entry) => {
                entry.quantity = entry.quantity.checked_add(quantity).ok_or_else(|| {
                    warn!(product = product.name(), quantity, "cart quantity overflow");
                    CartError::QuantityOverflow {
                        name: product.name().to_string(),
                    }
                })?;
            }
            None => self.entries.push(CartEntry {
                name: product.name().to_string(),
                quantity,
            }),
        }

        debug!(product = product.name(), quantity, "added to cart");
        Ok(())
    }

    /// Check if cart is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total units across all entries, saturating at `u32::MAX`
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |total, e| total.saturating_add(e.quantity))
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Requested quantity for a product name, if present
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.quantity)
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("entries", &self.entries)
            .field("today", &self.clock.today())
            .finish()
    }
}
