//! # Receipts
//!
//! The receipt produced by a successful checkout, and the sink trait through
//! which checkout hands out its shipment notice and receipt.

use crate::error::CartResult;
use crate::money::Money;
use crate::shipping::ShipmentNotice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

const SEPARATOR: &str = "----------------------";

/// A purchased line on the receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Finalized purchase summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    /// Customer name
    pub customer: String,

    /// Purchased lines in cart order
    pub lines: Vec<ReceiptLine>,

    pub subtotal: Money,

    /// Flat fee, zero when nothing is shipped
    pub shipping: Money,

    /// Amount debited from the customer
    pub amount: Money,

    /// Customer balance after the debit
    pub remaining_balance: Money,

    /// Shipment notice, if any product was shippable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<ShipmentNotice>,

    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Total units purchased
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> CartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {}     {}", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Subtotal     {}", self.subtotal)?;
        writeln!(f, "Shipping     {}", self.shipping)?;
        write!(f, "Amount       {}", self.amount)
    }
}

/// Receiver for what checkout emits.
///
/// The shipment notice is emitted as soon as shipping is computed, before
/// the customer is charged, so it can arrive even when checkout later fails.
/// The receipt is emitted only on success.
#[allow(unused_variables)]
pub trait ReceiptSink {
    fn on_shipment(&mut self, notice: &ShipmentNotice) {
        info!(
            items = notice.lines.len(),
            weight = %notice.total_weight,
            "shipment prepared"
        );
    }

    fn on_receipt(&mut self, receipt: &Receipt) {
        info!(
            receipt_id = %receipt.id,
            amount = %receipt.amount,
            "checkout receipt issued"
        );
    }
}

/// Sink that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl ReceiptSink for LoggingSink {}

/// Sink that keeps everything it is given
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub notices: Vec<ShipmentNotice>,
    pub receipts: Vec<Receipt>,
}

impl ReceiptSink for RecordingSink {
    fn on_shipment(&mut self, notice: &ShipmentNotice) {
        self.notices.push(notice.clone());
    }

    fn on_receipt(&mut self, receipt: &Receipt) {
        self.receipts.push(receipt.clone());
    }
}
