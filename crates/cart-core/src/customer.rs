//! Customer account with a spendable balance.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A customer paying from a prepaid balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    balance: Money,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debit `amount` if the balance covers it.
    /// Returns false and leaves the balance untouched otherwise.
    pub fn try_spend(&mut self, amount: Money) -> bool {
        if self.balance >= amount {
            self.balance = self.balance - amount;
            true
        } else {
            false
        }
    }
}
