//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RentbookError;

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, RentbookError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(RentbookError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| RentbookError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| RentbookError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a record sequence from a save file.
///
/// A missing file, a zero-length file, a JSON `null`, and an empty array all
/// mean "no data" and come back as `None`. Anything else that fails to parse
/// is a storage error.
pub fn read_records<T, P>(path: P) -> Result<Option<Vec<T>>, RentbookError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }
    let len = fs::metadata(path)
        .map_err(|e| RentbookError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?
        .len();
    if len == 0 {
        return Ok(None);
    }

    let records: Option<Vec<T>> = read_json(path)?;
    Ok(records.filter(|r| !r.is_empty()))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), RentbookError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RentbookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| RentbookError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| RentbookError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| RentbookError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| RentbookError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        RentbookError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
