//! # Checkout
//!
//! Turns a cart into a finalized purchase.
//!
//! ```text
//!  Cart ──► validate each entry ──► take stock ──► ship? ──► charge ──► Receipt
//!            (expiry, stock)         (per entry)   (+fee)    (balance)
//! ```
//!
//! Checkout is a single linear pass. Stock is taken from each product as its
//! entry is processed, so a failure on a later entry or on the final charge
//! leaves earlier entries' stock already reduced. Callers that need
//! all-or-nothing behavior must snapshot the catalog themselves.

use crate::cart::Cart;
use crate::clock::SharedClock;
use crate::customer::Customer;
use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::product::Catalog;
use crate::receipt::{LoggingSink, Receipt, ReceiptLine, ReceiptSink};
use crate::shipping::{ship, ShipmentItem};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Flat fee charged whenever an order contains a shippable product
pub const DEFAULT_SHIPPING_FEE: Money = Money::from_major(30);

/// Pricing knobs applied at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    pub shipping_fee: Money,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            shipping_fee: DEFAULT_SHIPPING_FEE,
        }
    }
}

/// Checkout service
#[derive(Clone)]
pub struct Checkout {
    clock: SharedClock,
    policy: CheckoutPolicy,
}

impl Checkout {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            policy: CheckoutPolicy::default(),
        }
    }

    /// Checkout sharing the cart's clock
    pub fn for_cart(cart: &Cart) -> Self {
        Self::new(cart.clock().clone())
    }

    /// Builder: set pricing policy
    pub fn with_policy(mut self, policy: CheckoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    /// Validate the cart, take stock, charge the customer and issue a receipt.
    ///
    /// The shipment notice goes to `sink` before the customer is charged;
    /// the receipt goes to `sink` only on success.
    #[instrument(skip_all, fields(customer = %customer.name, entries = cart.len()))]
    pub fn run(
        &self,
        customer: &mut Customer,
        cart: &Cart,
        catalog: &mut Catalog,
        sink: &mut dyn ReceiptSink,
    ) -> CartResult<Receipt> {
        if cart.is_empty() {
            return Err(rejected(CartError::EmptyCart));
        }

        let today = self.clock.today();
        let mut subtotal = Money::ZERO;
        let mut lines = Vec::with_capacity(cart.len());
        let mut shippable = Vec::new();

        for entry in cart.entries() {
            let product = catalog
                .get_mut(&entry.name)
                .ok_or_else(|| CartError::ProductNotFound {
                    name: entry.name.clone(),
                })
                .map_err(rejected)?;

            product
                .ensure_available(entry.quantity, today)
                .map_err(rejected)?;

            let overflow = || CartError::AmountOverflow {
                name: entry.name.clone(),
            };
            let line_total = product
                .price()
                .checked_mul(entry.quantity)
                .ok_or_else(overflow)
                .map_err(rejected)?;
            subtotal = subtotal
                .checked_add(line_total)
                .ok_or_else(overflow)
                .map_err(rejected)?;
            product.reduce_quantity(entry.quantity)?;
            debug!(
                product = %entry.name,
                quantity = entry.quantity,
                remaining = product.quantity(),
                "stock taken"
            );

            if let Some(item) = ShipmentItem::from_product(product) {
                shippable.push(item);
            }

            lines.push(ReceiptLine {
                quantity: entry.quantity,
                name: entry.name.clone(),
                unit_price: product.price(),
                line_total,
            });
        }

        let (shipment, shipping) = if shippable.is_empty() {
            (None, Money::ZERO)
        } else {
            let notice = ship(&shippable, cart);
            sink.on_shipment(&notice);
            (Some(notice), self.policy.shipping_fee)
        };

        let amount = subtotal.checked_add(shipping).ok_or_else(|| {
            rejected(CartError::AmountOverflow {
                name: "order total".into(),
            })
        })?;

        if !customer.try_spend(amount) {
            return Err(rejected(CartError::InsufficientBalance {
                required: amount,
                available: customer.balance(),
            }));
        }

        let receipt = Receipt {
            id: Uuid::new_v4(),
            customer: customer.name.clone(),
            lines,
            subtotal,
            shipping,
            amount,
            remaining_balance: customer.balance(),
            shipment,
            created_at: Utc::now(),
        };

        info!(
            receipt_id = %receipt.id,
            subtotal = %subtotal,
            shipping = %shipping,
            amount = %amount,
            "checkout complete"
        );
        sink.on_receipt(&receipt);

        Ok(receipt)
    }
}

fn rejected(err: CartError) -> CartError {
    warn!(error = %err, "checkout rejected");
    err
}

/// Check out with the cart's clock, the default policy and a logging sink
pub fn checkout(customer: &mut Customer, cart: &Cart, catalog: &mut Catalog) -> CartResult<Receipt> {
    Checkout::for_cart(cart).run(customer, cart, catalog, &mut LoggingSink)
}
