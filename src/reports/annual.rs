//! Annual income/expense report
//!
//! Pure function of the store snapshots: sums rent and expenses falling in
//! the requested year and renders the fixed report layout.

use chrono::Datelike;
use std::fmt;

use crate::models::Money;
use crate::store::Store;

/// Summary of one year's earnings and expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualReport {
    /// Year the report covers
    pub year: i32,
    /// Sum of rent payments dated in the year
    pub earnings: Money,
    /// Sum of expenses dated in the year, reported as a negated magnitude
    pub expenses: Money,
    /// earnings + expenses
    pub net: Money,
}

impl AnnualReport {
    /// Generate the report for a year from the current store snapshots.
    ///
    /// Deterministic for a given store state and year; no side effects.
    pub fn generate(store: &Store, year: i32) -> Self {
        let earnings: Money = store
            .rent
            .rent()
            .into_iter()
            .flatten()
            .filter(|r| r.date.year() == year)
            .map(|r| r.payment)
            .sum();

        let expense_total: Money = store
            .expenses
            .expenses()
            .into_iter()
            .flatten()
            .filter(|e| e.date.year() == year)
            .map(|e| e.payment)
            .sum();

        let expenses = -expense_total;
        Self {
            year,
            earnings,
            expenses,
            net: earnings + expenses,
        }
    }
}

impl fmt::Display for AnnualReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Annual Report ({})", self.year)?;
        writeln!(f, " Total Earnings:  {}", self.earnings)?;
        writeln!(f, " Total Expenses:  {}", self.expenses)?;
        writeln!(f, " ----------------------")?;
        writeln!(f, "Net Income:      {}", self.net)
    }
}
