//! Persistence layer for RentBook
//!
//! JSON file storage with atomic writes plus the gateway that owns the
//! load/save lifecycle of the in-memory stores.

pub mod file_io;
pub mod gateway;
pub mod login;

pub use file_io::{read_json, read_records, write_json_atomic};
pub use gateway::{FileGateway, LoadAuthority};
