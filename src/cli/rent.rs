//! CLI commands for rent payments

use clap::Subcommand;

use crate::display::{format_rent, system_message};
use crate::error::{RentbookError, RentbookResult};
use crate::models::Money;
use crate::storage::FileGateway;
use crate::store::Store;

/// Rent subcommands
#[derive(Subcommand, Debug)]
pub enum RentCommands {
    /// Record a rent payment for the current tenant of an apartment
    Add {
        /// Apartment number
        apartment: u32,
        /// Payment year
        year: i32,
        /// Payment month (1-12)
        month: u32,
        /// Payment amount (e.g. "1200.00")
        payment: String,
    },
    /// List all rent payments, most recent first
    List,
}

/// Handle a rent subcommand
pub fn handle_rent_command(
    store: &mut Store,
    gateway: &FileGateway,
    cmd: RentCommands,
) -> RentbookResult<()> {
    match cmd {
        RentCommands::Add {
            apartment,
            year,
            month,
            payment,
        } => {
            let payment = Money::parse(&payment)
                .map_err(|e| RentbookError::Validation(e.to_string()))?;

            let tenant = store
                .tenants
                .current_for_apartment(apartment)
                .cloned()
                .ok_or_else(|| {
                    RentbookError::tenant_not_found(format!("apartment {}", apartment))
                })?;

            // Advisory duplicate check; the record is inserted regardless
            if let Some(date) = chrono::NaiveDate::from_ymd_opt(year, month, 1) {
                if store.rent.is_duplicate(&tenant, date, payment) {
                    system_message("This is a duplicate entry, ignoring...");
                }
            }

            let rent = store.rent.add_rent(&tenant, year, month, payment)?;
            gateway.save_all(store)?;
            system_message(&format!(
                "Added Rent: {} - {} ({})",
                tenant,
                rent.payment,
                rent.date.format("%B %Y")
            ));
        }
        RentCommands::List => match store.rent.rent() {
            Some(rent) if !rent.is_empty() => {
                println!("{}", format_rent(rent, &store.tenants))
            }
            _ => system_message("There are no Rent Payments to display..."),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorePaths;
    use tempfile::TempDir;

    fn test_context() -> (TempDir, Store, FileGateway) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_data_dir(temp_dir.path().join("save_data"));
        (temp_dir, Store::new(), FileGateway::new(paths))
    }

    #[test]
    fn test_add_resolves_current_tenant() {
        let (_temp_dir, mut store, gateway) = test_context();
        store.tenants.add_tenant("Old", 1);
        let current = store.tenants.add_tenant("New", 1);

        handle_rent_command(
            &mut store,
            &gateway,
            RentCommands::Add {
                apartment: 1,
                year: 2023,
                month: 6,
                payment: "1200.00".into(),
            },
        )
        .unwrap();

        let rent = store.rent.rent().unwrap();
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].tenant_id, current.id);
        assert_eq!(rent[0].payment, Money::from_cents(120000));
    }

    #[test]
    fn test_add_rejects_unknown_apartment() {
        let (_temp_dir, mut store, gateway) = test_context();
        store.tenants.add_tenant("Jared", 1);

        let result = handle_rent_command(
            &mut store,
            &gateway,
            RentCommands::Add {
                apartment: 42,
                year: 2023,
                month: 6,
                payment: "1200.00".into(),
            },
        );

        assert!(matches!(result, Err(RentbookError::NotFound { .. })));
        assert!(store.rent.rent().is_none());
    }

    #[test]
    fn test_add_rejects_invalid_month() {
        let (_temp_dir, mut store, gateway) = test_context();
        store.tenants.add_tenant("Jared", 1);

        let result = handle_rent_command(
            &mut store,
            &gateway,
            RentCommands::Add {
                apartment: 1,
                year: 2023,
                month: 13,
                payment: "1200.00".into(),
            },
        );

        assert!(matches!(result, Err(RentbookError::Validation(_))));
        assert!(store.rent.rent().is_none());
    }
}
