//! CLI commands for expenses

use clap::Subcommand;

use crate::display::{format_expenses, system_message};
use crate::error::{RentbookError, RentbookResult};
use crate::models::Money;
use crate::storage::FileGateway;
use crate::store::Store;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Payment year
        year: i32,
        /// Payment month (1-12)
        month: u32,
        /// Payment day of month
        day: u32,
        /// Expense category (e.g. "Repairs", "Utilities")
        category: String,
        /// Recipient of the payment
        payee: String,
        /// Payment amount (e.g. "50.00")
        payment: String,
    },
    /// List all expenses, most recent first
    List,
}

/// Handle an expense subcommand
pub fn handle_expense_command(
    store: &mut Store,
    gateway: &FileGateway,
    cmd: ExpenseCommands,
) -> RentbookResult<()> {
    match cmd {
        ExpenseCommands::Add {
            year,
            month,
            day,
            category,
            payee,
            payment,
        } => {
            let payment = Money::parse(&payment)
                .map_err(|e| RentbookError::Validation(e.to_string()))?;

            let expense = store
                .expenses
                .add_expense(year, month, day, category, payee, payment)?;
            gateway.save_all(store)?;
            system_message(&format!("Added Expense: {}", expense));
        }
        ExpenseCommands::List => match store.expenses.expenses() {
            Some(expenses) if !expenses.is_empty() => {
                println!("{}", format_expenses(expenses))
            }
            _ => system_message("There are no Expenses to display..."),
        },
    }
    Ok(())
}
