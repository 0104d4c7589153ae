use anyhow::Result;
use clap::{Parser, Subcommand};

use rentbook_cli::cli::{
    handle_expense_command, handle_rent_command, handle_report_command, handle_tenant_command,
    ExpenseCommands, RentCommands, ReportCommands, TenantCommands,
};
use rentbook_cli::config::StorePaths;
use rentbook_cli::menu;
use rentbook_cli::storage::FileGateway;
use rentbook_cli::store::Store;

#[derive(Parser)]
#[command(
    name = "rentbook",
    version,
    about = "Console application for tracking rental tenants, rent payments, and property expenses",
    long_about = "RentBook tracks rental tenants, rent payments, and property expenses, \
                  persisting records as JSON files under a save_data directory and \
                  producing simple annual financial reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (login required)
    Menu,

    /// Tenant management commands
    #[command(subcommand)]
    Tenant(TenantCommands),

    /// Rent payment commands
    #[command(subcommand)]
    Rent(RentCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StorePaths::new();
    let gateway = FileGateway::new(paths.clone());
    let mut store = Store::new();

    match cli.command {
        None | Some(Commands::Menu) => {
            // The menu loads after login and saves on exit
            menu::run(&mut store, &gateway)?;
        }
        Some(Commands::Tenant(cmd)) => {
            gateway.load_all(&mut store)?;
            handle_tenant_command(&mut store, &gateway, cmd)?;
        }
        Some(Commands::Rent(cmd)) => {
            gateway.load_all(&mut store)?;
            handle_rent_command(&mut store, &gateway, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            gateway.load_all(&mut store)?;
            handle_expense_command(&mut store, &gateway, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            gateway.load_all(&mut store)?;
            handle_report_command(&store, cmd)?;
        }
        Some(Commands::Config) => {
            println!("RentBook Configuration");
            println!("======================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Tenant file:    {}", paths.tenant_file().display());
            println!("Rent file:      {}", paths.rent_file().display());
            println!("Expense file:   {}", paths.expense_file().display());
            println!("Login file:     {}", paths.login_file().display());
        }
    }

    Ok(())
}
