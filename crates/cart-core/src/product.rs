//! # Product Types
//!
//! Products and the catalog that owns them.
//! Capabilities (expiry, shipping weight) are optional and independent:
//! a product can carry either, both, or neither.

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::weight::Weight;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A product available for purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the identity key in carts
    name: String,

    /// Unit price
    price: Money,

    /// Units in stock
    quantity: u32,

    /// Expiry date (expirable products only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_on: Option<NaiveDate>,

    /// Unit weight (shippable products only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<Weight>,
}

impl Product {
    /// Create a product with no capabilities
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            expires_on: None,
            weight: None,
        }
    }

    /// Builder: make the product expirable
    pub fn with_expiry(mut self, expires_on: NaiveDate) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    /// Builder: make the product shippable
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expires_on
    }

    /// Unit weight, present only for shippable products
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    pub fn is_expirable(&self) -> bool {
        self.expires_on.is_some()
    }

    pub fn is_shippable(&self) -> bool {
        self.weight.is_some()
    }

    /// A product expires the day after its expiry date.
    /// Products without an expiry date never expire.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|date| today > date)
    }

    /// Fail if the product is expired or cannot cover `requested` units
    pub fn ensure_available(&self, requested: u32, today: NaiveDate) -> CartResult<()> {
        if self.is_expired(today) {
            return Err(CartError::Expired {
                name: self.name.clone(),
            });
        }
        if requested > self.quantity {
            return Err(CartError::InsufficientStock {
                name: self.name.clone(),
                requested,
                available: self.quantity,
            });
        }
        Ok(())
    }

    /// Take `amount` units out of stock. Refuses to go below zero.
    pub fn reduce_quantity(&mut self, amount: u32) -> CartResult<()> {
        self.quantity = self
            .quantity
            .checked_sub(amount)
            .ok_or_else(|| CartError::InsufficientStock {
                name: self.name.clone(),
                requested: amount,
                available: self.quantity,
            })?;
        Ok(())
    }
}

/// Catalog entry as written in `config/products.toml`.
/// Expiry is relative so a catalog file stays valid from day to day.
#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    name: String,
    price: f64,
    quantity: u32,
    #[serde(default)]
    expires_in_days: Option<i64>,
    #[serde(default)]
    weight_kg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<CatalogEntry>,
}

impl CatalogEntry {
    fn into_product(self, today: NaiveDate) -> CartResult<Product> {
        let price = Money::try_from_decimal(self.price)
            .filter(|price| !price.is_negative())
            .ok_or_else(|| {
                CartError::Catalog(format!("{} has an invalid price: {}", self.name, self.price))
            })?;

        let mut product = Product::new(self.name, price, self.quantity);

        if let Some(days) = self.expires_in_days {
            let offset = Days::new(days.unsigned_abs());
            let date = if days >= 0 {
                today.checked_add_days(offset)
            } else {
                today.checked_sub_days(offset)
            }
            .ok_or_else(|| {
                CartError::Catalog(format!("{} has an out-of-range expiry", product.name))
            })?;
            product = product.with_expiry(date);
        }

        if let Some(kg) = self.weight_kg {
            let weight = Weight::try_from_kg(kg).ok_or_else(|| {
                CartError::Catalog(format!("{} has an invalid weight: {}kg", product.name, kg))
            })?;
            product = product.with_weight(weight);
        }

        Ok(product)
    }
}

/// Ordered collection of products, looked up by name.
/// Names are unique within a catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Build a catalog, rejecting duplicate names
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> CartResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.add(product)?;
        }
        Ok(catalog)
    }

    /// Add a product to the catalog. Fails if the name is already taken.
    pub fn add(&mut self, product: Product) -> CartResult<()> {
        if self.get(&product.name).is_some() {
            return Err(CartError::Catalog(format!(
                "duplicate product name: {}",
                product.name
            )));
        }
        self.products.push(product);
        Ok(())
    }

    /// Products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Find a product by name for mutation
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name == name)
    }

    /// Find a product by name or fail with `ProductNotFound`
    pub fn require(&self, name: &str) -> CartResult<&Product> {
        self.get(name).ok_or_else(|| CartError::ProductNotFound {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load catalog from TOML, resolving relative expiry against `today`
    pub fn from_toml(toml_str: &str, today: NaiveDate) -> CartResult<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        let products = file
            .products
            .into_iter()
            .map(|entry| entry.into_product(today))
            .collect::<CartResult<Vec<_>>>()?;
        Self::from_products(products)
    }
}
