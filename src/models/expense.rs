//! Property expense model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A property expense; no cross-entity references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date the expense was paid
    #[serde(with = "super::date_format")]
    pub date: NaiveDate,

    /// Expense category (e.g. "Repairs", "Utilities")
    pub category: String,

    /// Recipient of the payment
    pub payee: String,

    /// Amount paid
    pub payment: Money,
}

impl Expense {
    /// Crate-private: live expenses come only from `ExpenseStore::add_expense`.
    pub(crate) fn new(
        date: NaiveDate,
        category: impl Into<String>,
        payee: impl Into<String>,
        payment: Money,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            payee: payee.into(),
            payment,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} ({})",
            self.payee,
            self.category,
            self.payment,
            self.date.format("%B %-d, %Y")
        )
    }
}
