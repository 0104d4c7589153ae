//! RentBook - console rental tracking application
//!
//! This library provides the core functionality for RentBook: an in-memory
//! record store for tenants, rent payments, and property expenses, persisted
//! as JSON files, with annual financial reporting on top.
//!
//! # Architecture
//!
//! - `config`: Path management for the `save_data` directory
//! - `error`: Custom error types
//! - `models`: Core data models (tenants, rent, expenses, money)
//! - `store`: In-memory record stores with referential-integrity rules
//! - `storage`: JSON file persistence gateway and login credentials
//! - `reports`: Annual income/expense report
//! - `display`: Terminal output formatting
//! - `menu`: Interactive text-menu loop
//! - `cli`: Direct clap subcommand handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;

pub use error::{RentbookError, RentbookResult};
