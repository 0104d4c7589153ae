//! In-memory expense store
//!
//! Expenses are independent of tenants; the only validation on insert is that
//! the calendar date actually exists.

use chrono::NaiveDate;

use crate::error::{RentbookError, RentbookResult};
use crate::models::{Expense, Money};
use crate::storage::LoadAuthority;

/// Store for expense records
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Option<Vec<Expense>>,
}

impl ExpenseStore {
    /// Create an empty, uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense.
    ///
    /// Rejects calendar-invalid dates (day 31 of February and the like); no
    /// other field validation.
    pub fn add_expense(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        category: impl Into<String>,
        payee: impl Into<String>,
        payment: Money,
    ) -> RentbookResult<Expense> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            RentbookError::Validation(format!(
                "invalid expense date: {}-{}-{}",
                year, month, day
            ))
        })?;

        let expense = Expense::new(date, category, payee, payment);
        self.records
            .get_or_insert_with(Vec::new)
            .push(expense.clone());
        Ok(expense)
    }

    /// Replace the in-memory sequence with records loaded from disk.
    ///
    /// Empty batch is a no-op success; no cross-entity validation needed.
    pub fn load(&mut self, records: Vec<Expense>, _auth: &LoadAuthority) -> RentbookResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        self.records = Some(records);
        Ok(())
    }

    /// Read-only snapshot of the expense sequence, in insertion order.
    ///
    /// `None` means the store was never loaded or populated.
    pub fn expenses(&self) -> Option<&[Expense]> {
        self.records.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_expense() {
        let mut store = ExpenseStore::new();
        let expense = store
            .add_expense(2024, 3, 15, "Repairs", "Bob's Hardware", Money::from_cents(5000))
            .unwrap();

        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(expense.category, "Repairs");
        assert_eq!(store.expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_add_expense_rejects_invalid_date() {
        let mut store = ExpenseStore::new();

        // February has no 30th day
        let result = store.add_expense(2024, 2, 30, "Repairs", "Bob", Money::from_cents(5000));
        assert!(matches!(result, Err(RentbookError::Validation(_))));

        // Store size unchanged
        assert!(store.expenses().is_none());
    }

    #[test]
    fn test_load_replaces_and_empty_is_noop() {
        let auth = LoadAuthority::for_tests();
        let mut store = ExpenseStore::new();
        store
            .add_expense(2024, 1, 1, "Utilities", "Big Electric Co", Money::from_cents(9000))
            .unwrap();

        store.load(Vec::new(), &auth).unwrap();
        assert_eq!(store.expenses().unwrap().len(), 1);

        let replacement = Expense::new(
            NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
            "Repairs",
            "Bob",
            Money::from_cents(100),
        );
        store.load(vec![replacement.clone()], &auth).unwrap();
        assert_eq!(store.expenses().unwrap(), &[replacement]);
    }
}
