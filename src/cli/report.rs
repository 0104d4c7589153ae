//! CLI commands for reports

use clap::Subcommand;

use crate::error::RentbookResult;
use crate::reports::AnnualReport;
use crate::store::Store;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate the annual income/expense report for a year
    Annual {
        /// Report year
        year: i32,
    },
}

/// Handle a report subcommand
pub fn handle_report_command(store: &Store, cmd: ReportCommands) -> RentbookResult<()> {
    match cmd {
        ReportCommands::Annual { year } => {
            println!("{}", AnnualReport::generate(store, year));
        }
    }
    Ok(())
}
