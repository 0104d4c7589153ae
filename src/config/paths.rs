//! Path management for RentBook
//!
//! All persisted state lives in a single `save_data` directory next to the
//! working directory, matching the layout the save files have always used.
//!
//! ## Path Resolution Order
//!
//! 1. `RENTBOOK_DATA_DIR` environment variable (if set)
//! 2. `./save_data`

use std::path::PathBuf;

use crate::error::RentbookResult;

/// Manages all paths used by RentBook
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Directory holding all save files
    data_dir: PathBuf,
}

impl StorePaths {
    /// Create a new StorePaths instance
    ///
    /// Uses `RENTBOOK_DATA_DIR` when set, otherwise `./save_data`.
    pub fn new() -> Self {
        let data_dir = match std::env::var("RENTBOOK_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => PathBuf::from(".").join("save_data"),
        };
        Self { data_dir }
    }

    /// Create StorePaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to tenant.json
    pub fn tenant_file(&self) -> PathBuf {
        self.data_dir.join("tenant.json")
    }

    /// Get the path to rent.json
    pub fn rent_file(&self) -> PathBuf {
        self.data_dir.join("rent.json")
    }

    /// Get the path to expense.json
    pub fn expense_file(&self) -> PathBuf {
        self.data_dir.join("expense.json")
    }

    /// Get the path to login.json
    pub fn login_file(&self) -> PathBuf {
        self.data_dir.join("login.json")
    }

    /// Ensure the data directory exists.
    ///
    /// Returns `true` when the directory had to be created.
    pub fn ensure_directories(&self) -> RentbookResult<bool> {
        if self.data_dir.is_dir() {
            return Ok(false);
        }
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(true)
    }
}

impl Default for StorePaths {
    fn default() -> Self {
        Self::new()
    }
}
