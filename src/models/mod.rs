//! Core data models for RentBook

pub mod date_format;
pub mod expense;
pub mod ids;
pub mod money;
pub mod rent;
pub mod tenant;

pub use expense::Expense;
pub use ids::TenantId;
pub use money::Money;
pub use rent::Rent;
pub use tenant::Tenant;
