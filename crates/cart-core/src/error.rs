//! # Cart Error Types
//!
//! Typed error handling for the quick-cart checkout engine.
//! All cart and checkout operations return `Result<T, CartError>`.

use crate::money::Money;
use thiserror::Error;

/// Core error type for cart, catalog and checkout operations
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Product is past its expiry date
    #[error("{name} is expired.")]
    Expired { name: String },

    /// Requested more than the product has in stock
    #[error("Not enough stock of {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// Checkout attempted on a cart with no entries
    #[error("Cart is empty.")]
    EmptyCart,

    /// Customer cannot cover the checkout total
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Money, available: Money },

    /// Cart entry refers to a product missing from the catalog
    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    /// Zero quantities are rejected
    #[error("Invalid quantity for {name}: must be at least 1")]
    InvalidQuantity { name: String },

    /// Adding to an existing entry would exceed the largest countable quantity
    #[error("Quantity of {name} in cart is too large")]
    QuantityOverflow { name: String },

    /// Line total or order total cannot be represented
    #[error("Amount for {name} is too large")]
    AmountOverflow { name: String },

    /// Catalog file could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CartError {
    /// Returns true if this error is a business-rule rejection that the
    /// caller should report to the shopper rather than treat as a fault
    pub fn is_validation(&self) -> bool {
        !matches!(self, CartError::Catalog(_) | CartError::Serialization(_))
    }
}

impl From<toml::de::Error> for CartError {
    fn from(err: toml::de::Error) -> Self {
        CartError::Catalog(err.to_string())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::Serialization(err.to_string())
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        assert!(CartError::EmptyCart.is_validation());
        assert!(CartError::Expired {
            name: "Cheese".into()
        }
        .is_validation());
        assert!(CartError::AmountOverflow {
            name: "Gold".into()
        }
        .is_validation());
        assert!(!CartError::Catalog("bad toml".into()).is_validation());
    }

    #[test]
    fn test_messages() {
        assert_eq!(CartError::EmptyCart.to_string(), "Cart is empty.");
        assert_eq!(
            CartError::Expired {
                name: "Lotus Biscuits".into()
            }
            .to_string(),
            "Lotus Biscuits is expired."
        );
        assert_eq!(
            CartError::InsufficientBalance {
                required: Money::from_major(730),
                available: Money::from_major(500),
            }
            .to_string(),
            "Insufficient balance: required 730, available 500"
        );
        assert_eq!(
            CartError::InsufficientStock {
                name: "Scratch Card".into(),
                requested: 4,
                available: 3,
            }
            .to_string(),
            "Not enough stock of Scratch Card: requested 4, available 3"
        );
    }
}
