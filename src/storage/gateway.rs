//! Persistence gateway
//!
//! Orchestrates loading all three stores at startup and saving them after
//! mutations. Load order is a hard requirement: tenants before rent, because
//! rent validation resolves tenant identities.

use crate::config::StorePaths;
use crate::display::system_message;
use crate::error::{RentbookError, RentbookResult};
use crate::models::{Expense, Rent, Tenant};
use crate::store::Store;

use super::file_io::{read_records, write_json_atomic};

/// Capability token required by the stores' load operations.
///
/// The field is private and there is no public constructor, so only this
/// module can mint one: load calls from anywhere else do not compile.
pub struct LoadAuthority {
    _private: (),
}

impl LoadAuthority {
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self { _private: () }
    }
}

/// Gateway between the in-memory stores and the JSON save files
pub struct FileGateway {
    paths: StorePaths,
}

impl FileGateway {
    /// Create a gateway over the given paths
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    fn authority(&self) -> LoadAuthority {
        LoadAuthority { _private: () }
    }

    /// Load all stores from the save files: tenants, then rent, then expenses.
    ///
    /// A missing or empty file is "no data", not an error. A rent batch that
    /// fails referential integrity is reported and skipped, leaving the rent
    /// store as it was. An I/O or parse failure aborts the remaining loads;
    /// stores already loaded keep their state.
    pub fn load_all(&self, store: &mut Store) -> RentbookResult<()> {
        let auth = self.authority();

        match read_records::<Tenant, _>(self.paths.tenant_file())? {
            Some(records) => store.tenants.load(records, &auth)?,
            None => system_message("Tenant save file does not exist or contains no data, ignoring..."),
        }

        match read_records::<Rent, _>(self.paths.rent_file())? {
            Some(records) => {
                if let Err(err) = store.rent.load(records, &store.tenants, &auth) {
                    match err {
                        RentbookError::ReferentialIntegrity(_) => {
                            system_message("Invalid data found in rent.json... Ignoring...");
                        }
                        other => return Err(other),
                    }
                }
            }
            None => system_message("Rent save file does not exist or contains no data, ignoring..."),
        }

        match read_records::<Expense, _>(self.paths.expense_file())? {
            Some(records) => store.expenses.load(records, &auth)?,
            None => {
                system_message("Expense save file does not exist or contains no data, ignoring...")
            }
        }

        Ok(())
    }

    /// Save all store snapshots to the save files.
    ///
    /// Creates the directory and any missing files, reporting informationally
    /// when it does. Each file is written atomically on its own; an I/O
    /// failure aborts the remaining writes, so a failed save can leave files
    /// from different stores at different generations.
    pub fn save_all(&self, store: &Store) -> RentbookResult<()> {
        if self.paths.ensure_directories()? {
            system_message("No directory found, created directory...");
        }

        for (file, label) in [
            (self.paths.tenant_file(), "tenant"),
            (self.paths.rent_file(), "rent"),
            (self.paths.expense_file(), "expense"),
        ] {
            if !file.exists() {
                system_message(&format!("No {} save file found, created file...", label));
            }
        }

        // Uninitialized stores serialize as JSON null, same as an absent
        // sequence reads back in.
        write_json_atomic(self.paths.tenant_file(), &store.tenants.tenants())?;
        write_json_atomic(self.paths.rent_file(), &store.rent.rent())?;
        write_json_atomic(self.paths.expense_file(), &store.expenses.expenses())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn test_gateway() -> (TempDir, FileGateway) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_data_dir(temp_dir.path().join("save_data"));
        (temp_dir, FileGateway::new(paths))
    }

    fn populated_store() -> Store {
        let mut store = Store::new();
        let jared = store.tenants.add_tenant("Jared", 1);
        store.tenants.add_tenant("Garret", 2);
        store
            .rent
            .add_rent(&jared, 2023, 6, Money::from_cents(120000))
            .unwrap();
        store
            .expenses
            .add_expense(2023, 3, 15, "Repairs", "Bob's Hardware", Money::from_cents(30000))
            .unwrap();
        store
    }

    #[test]
    fn test_load_all_with_no_files_is_no_data() {
        let (_temp_dir, gateway) = test_gateway();
        let mut store = Store::new();

        gateway.load_all(&mut store).unwrap();

        assert!(store.tenants.tenants().is_none());
        assert!(store.rent.rent().is_none());
        assert!(store.expenses.expenses().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_temp_dir, gateway) = test_gateway();
        let store = populated_store();

        gateway.save_all(&store).unwrap();

        let mut reloaded = Store::new();
        gateway.load_all(&mut reloaded).unwrap();

        assert_eq!(reloaded.tenants.tenants(), store.tenants.tenants());
        assert_eq!(reloaded.rent.rent(), store.rent.rent());
        assert_eq!(reloaded.expenses.expenses(), store.expenses.expenses());
    }

    #[test]
    fn test_save_load_idempotent_on_stable_storage() {
        let (_temp_dir, gateway) = test_gateway();
        let mut store = populated_store();

        gateway.save_all(&store).unwrap();
        gateway.load_all(&mut store).unwrap();
        let first = fs::read_to_string(gateway.paths().tenant_file()).unwrap();

        gateway.save_all(&store).unwrap();
        gateway.load_all(&mut store).unwrap();
        let second = fs::read_to_string(gateway.paths().tenant_file()).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.tenants.tenants().unwrap().len(), 2);
    }

    #[test]
    fn test_save_all_writes_null_for_uninitialized_stores() {
        let (_temp_dir, gateway) = test_gateway();
        let store = Store::new();

        gateway.save_all(&store).unwrap();

        let contents = fs::read_to_string(gateway.paths().tenant_file()).unwrap();
        assert_eq!(contents.trim(), "null");
    }

    #[test]
    fn test_load_all_skips_rent_with_unknown_tenant() {
        let (_temp_dir, gateway) = test_gateway();

        // Save a consistent dataset, then corrupt the rent file to reference
        // a tenant that does not exist.
        let store = populated_store();
        gateway.save_all(&store).unwrap();

        let stranger_rent = serde_json::json!([{
            "tenant_id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "06/01/2023",
            "payment": 120000
        }]);
        fs::write(
            gateway.paths().rent_file(),
            serde_json::to_string(&stranger_rent).unwrap(),
        )
        .unwrap();

        let mut reloaded = Store::new();
        gateway.load_all(&mut reloaded).unwrap();

        // Tenants and expenses loaded, bad rent batch ignored wholesale
        assert_eq!(reloaded.tenants.tenants().unwrap().len(), 2);
        assert!(reloaded.rent.rent().is_none());
        assert_eq!(reloaded.expenses.expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_load_all_malformed_file_is_error() {
        let (_temp_dir, gateway) = test_gateway();
        gateway.paths().ensure_directories().unwrap();
        fs::write(gateway.paths().tenant_file(), "not json").unwrap();

        let mut store = Store::new();
        assert!(gateway.load_all(&mut store).is_err());
    }
}
