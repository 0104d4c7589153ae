//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store layer.

pub mod expense;
pub mod rent;
pub mod report;
pub mod tenant;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use rent::{handle_rent_command, RentCommands};
pub use report::{handle_report_command, ReportCommands};
pub use tenant::{handle_tenant_command, TenantCommands};
