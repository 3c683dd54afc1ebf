//! # Shipping
//!
//! Builds the shipment notice for the physical part of an order.

use crate::cart::Cart;
use crate::error::CartResult;
use crate::product::Product;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shippable product as collected during checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub name: String,
    pub weight: Weight,
}

impl ShipmentItem {
    /// Returns `None` for products without a shipping weight
    pub fn from_product(product: &Product) -> Option<Self> {
        product.weight().map(|weight| Self {
            name: product.name().to_string(),
            weight,
        })
    }
}

/// One line of the shipment notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub quantity: u32,
    pub name: String,
    /// Weight of a single unit
    pub unit_weight: Weight,
}

/// Packing summary for the shippable items of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentNotice {
    pub lines: Vec<ShipmentLine>,
    pub total_weight: Weight,
}

impl ShipmentNotice {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Serialize the notice as pretty-printed JSON
    pub fn to_json(&self) -> CartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ShipmentNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for line in &self.lines {
            writeln!(f, "{}x {}    {}", line.quantity, line.name, line.unit_weight)?;
        }
        write!(f, "Total package weight {}kg", self.total_weight.display_kg())
    }
}

/// Match each shippable item to its cart quantity and total the weight.
/// Items absent from the cart are skipped.
pub fn ship(items: &[ShipmentItem], cart: &Cart) -> ShipmentNotice {
    let mut lines = Vec::with_capacity(items.len());
    let mut total_weight = Weight::ZERO;

    for item in items {
        let Some(quantity) = cart.quantity_of(&item.name) else {
            continue;
        };
        total_weight += item.weight * quantity;
        lines.push(ShipmentLine {
            quantity,
            name: item.name.clone(),
            unit_weight: item.weight,
        });
    }

    ShipmentNotice {
        lines,
        total_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::fixed_clock;
    use crate::money::Money;
    use chrono::NaiveDate;

    fn cart_with(products: &[(&Product, u32)]) -> Cart {
        let mut cart = Cart::with_clock(fixed_clock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()));
        for (product, qty) in products {
            cart.add_product(product, *qty).unwrap();
        }
        cart
    }

    #[test]
    fn test_weight_totals_only_shippable_items() {
        let cheese = Product::new("Cheese", Money::from_major(100), 10).with_weight(Weight::from_grams(400));
        let biscuits = Product::new("Biscuits", Money::from_major(150), 5).with_weight(Weight::from_grams(700));
        let card = Product::new("Scratch Card", Money::from_major(50), 3);
        let cart = cart_with(&[(&cheese, 2), (&biscuits, 1), (&card, 1)]);

        let items: Vec<_> = [&cheese, &biscuits, &card]
            .into_iter()
            .filter_map(ShipmentItem::from_product)
            .collect();
        assert_eq!(items.len(), 2);

        let notice = ship(&items, &cart);
        assert_eq!(notice.total_weight, Weight::from_grams(1500));
        assert!(notice.lines.iter().all(|l| l.name != "Scratch Card"));
    }

    #[test]
    fn test_notice_text() {
        let cheese = Product::new("Cheese", Money::from_major(100), 10).with_weight(Weight::from_grams(400));
        let biscuits = Product::new("Biscuits", Money::from_major(150), 5).with_weight(Weight::from_grams(700));
        let cart = cart_with(&[(&cheese, 2), (&biscuits, 1)]);
        let items: Vec<_> = [&cheese, &biscuits]
            .into_iter()
            .filter_map(ShipmentItem::from_product)
            .collect();

        assert_eq!(
            ship(&items, &cart).to_string(),
            "** Shipment notice **\n\
             2x Cheese    400g\n\
             1x Biscuits    700g\n\
             Total package weight 1.5kg"
        );
    }

    #[test]
    fn test_items_missing_from_cart_are_skipped() {
        let tv = Product::new("TV", Money::from_major(200), 3).with_weight(Weight::from_grams(5000));
        let cart = cart_with(&[]);
        let notice = ship(&[ShipmentItem::from_product(&tv).unwrap()], &cart);
        assert!(notice.is_empty());
        assert_eq!(notice.total_weight, Weight::ZERO);
    }

    #[test]
    fn test_sub_gram_weights_are_not_rounded_before_totalling() {
        let pin = Product::new("Pin", Money::from_minor(1), 1000)
            .with_weight(Weight::try_from_kg(0.0015).unwrap());
        let cart = cart_with(&[(&pin, 1000)]);
        let notice = ship(&[ShipmentItem::from_product(&pin).unwrap()], &cart);

        assert_eq!(
            notice.to_string(),
            "** Shipment notice **\n\
             1000x Pin    2g\n\
             Total package weight 1.5kg"
        );
    }

    #[test]
    fn test_notice_json() {
        let tv = Product::new("TV", Money::from_major(200), 3).with_weight(Weight::from_grams(5000));
        let cart = cart_with(&[(&tv, 2)]);
        let notice = ship(&[ShipmentItem::from_product(&tv).unwrap()], &cart);

        let value: serde_json::Value = serde_json::from_str(&notice.to_json().unwrap()).unwrap();
        assert_eq!(value["lines"][0]["name"], "TV");
        assert_eq!(value["lines"][0]["quantity"], 2);
        assert_eq!(value["total_weight"], 10_000_000);
    }
}
