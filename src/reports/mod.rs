//! Financial reports derived from the record stores

pub mod annual;

pub use annual::AnnualReport;
