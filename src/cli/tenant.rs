//! CLI commands for tenants

use clap::Subcommand;

use crate::display::{format_tenants, system_message};
use crate::error::RentbookResult;
use crate::storage::FileGateway;
use crate::store::Store;

/// Tenant subcommands
#[derive(Subcommand, Debug)]
pub enum TenantCommands {
    /// Record a new tenant
    Add {
        /// Tenant name
        name: String,
        /// Apartment number
        apartment: u32,
    },
    /// List all tenants, most recent first
    List,
}

/// Handle a tenant subcommand
pub fn handle_tenant_command(
    store: &mut Store,
    gateway: &FileGateway,
    cmd: TenantCommands,
) -> RentbookResult<()> {
    match cmd {
        TenantCommands::Add { name, apartment } => {
            if let Some(current) = store.tenants.current_for_apartment(apartment) {
                system_message(&format!(
                    "Apartment {} already has a current tenant: {}. New rent for this apartment will go to the new tenant.",
                    apartment, current
                ));
            }
            let tenant = store.tenants.add_tenant(name, apartment);
            gateway.save_all(store)?;
            system_message(&format!("Added Tenant: {}", tenant));
        }
        TenantCommands::List => match store.tenants.tenants() {
            Some(tenants) if !tenants.is_empty() => println!("{}", format_tenants(tenants)),
            _ => system_message("There are no Tenants to display..."),
        },
    }
    Ok(())
}
