//! Login credential storage
//!
//! `login.json` maps a SHA-256 hex digest of a username to a SHA-256 hex
//! digest of that user's password. The file is auto-created with a default
//! `admin`/`password` pair when missing or empty.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::config::StorePaths;
use crate::display::system_message;
use crate::error::RentbookResult;

use super::file_io::{read_json, write_json_atomic};

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password";

/// Hashed username -> hashed password
pub type LoginTable = HashMap<String, String>;

/// Hex-encoded SHA-256 digest of the input
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Load the login table, creating it with default credentials if missing.
pub fn load_or_create(paths: &StorePaths) -> RentbookResult<LoginTable> {
    if paths.ensure_directories()? {
        system_message("No directory found, created directory...");
    }

    let login_file = paths.login_file();
    let missing = !login_file.exists()
        || std::fs::metadata(&login_file).map(|m| m.len() == 0).unwrap_or(true);

    if missing {
        system_message("No login file found, created file...");
        let mut defaults = LoginTable::new();
        defaults.insert(digest_hex(DEFAULT_USERNAME), digest_hex(DEFAULT_PASSWORD));
        write_json_atomic(&login_file, &defaults)?;
        return Ok(defaults);
    }

    read_json(&login_file)
}

/// Check a username/password pair against the table
pub fn verify(table: &LoginTable, username: &str, password: &str) -> bool {
    table
        .get(&digest_hex(username))
        .is_some_and(|stored| *stored == digest_hex(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_paths() -> (TempDir, StorePaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_data_dir(temp_dir.path().join("save_data"));
        (temp_dir, paths)
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let digest = digest_hex("admin");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, digest_hex("admin"));
        assert_ne!(digest, digest_hex("Admin"));
    }

    #[test]
    fn test_creates_default_credentials() {
        let (_temp_dir, paths) = test_paths();

        let table = load_or_create(&paths).unwrap();
        assert!(paths.login_file().exists());
        assert!(verify(&table, "admin", "password"));
        assert!(!verify(&table, "admin", "wrong"));
        assert!(!verify(&table, "nobody", "password"));
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let (_temp_dir, paths) = test_paths();

        let mut custom = LoginTable::new();
        custom.insert(digest_hex("landlord"), digest_hex("hunter2"));
        paths.ensure_directories().unwrap();
        write_json_atomic(paths.login_file(), &custom).unwrap();

        let table = load_or_create(&paths).unwrap();
        assert!(verify(&table, "landlord", "hunter2"));
        assert!(!verify(&table, "admin", "password"));
    }

    #[test]
    fn test_empty_file_gets_defaults() {
        let (_temp_dir, paths) = test_paths();
        paths.ensure_directories().unwrap();
        std::fs::write(paths.login_file(), "").unwrap();

        let table = load_or_create(&paths).unwrap();
        assert!(verify(&table, "admin", "password"));
    }
}
