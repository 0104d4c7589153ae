//! Terminal output formatting
//!
//! Record listings print most-recent-first, since the newest entry for an
//! apartment is the one the operator usually cares about.

use chrono::Datelike;

use crate::models::{Expense, Rent, Tenant};
use crate::store::TenantStore;

/// Deliver a system message directly to the operator
pub fn system_message(message: &str) {
    println!("[SYSTEM] {}", message);
}

/// Format the tenant list, most recent first
pub fn format_tenants(tenants: &[Tenant]) -> String {
    let mut output = String::from("Display Tenants\n");
    for tenant in tenants.iter().rev() {
        output.push_str(&format!("{}\n", tenant));
    }
    output
}

/// Format the rent list, most recent first, resolving tenant names
pub fn format_rent(rent: &[Rent], tenants: &TenantStore) -> String {
    let mut output = String::from("Display Rent\n");
    for record in rent.iter().rev() {
        let tenant = tenants
            .tenant_by_id(record.tenant_id)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "(unknown tenant)".to_string());
        output.push_str(&format!(
            "{} - {} ({} {})\n",
            tenant,
            record.payment,
            record.date.format("%B"),
            record.date.year()
        ));
    }
    output
}

/// Format the expense list, most recent first
pub fn format_expenses(expenses: &[Expense]) -> String {
    let mut output = String::from("Display Expenses\n");
    for expense in expenses.iter().rev() {
        output.push_str(&format!("{}\n", expense));
    }
    output
}
