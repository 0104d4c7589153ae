//! In-memory record stores
//!
//! Each entity kind is owned by a single ordered store. The `Store`
//! coordinator is constructed once at process start and passed by reference
//! to everything that needs it; there is no global state.

pub mod expenses;
pub mod rent;
pub mod tenants;

pub use expenses::ExpenseStore;
pub use rent::RentStore;
pub use tenants::TenantStore;

/// All three record stores, bundled for context passing
#[derive(Debug, Default)]
pub struct Store {
    pub tenants: TenantStore,
    pub rent: RentStore,
    pub expenses: ExpenseStore,
}

impl Store {
    /// Create a fresh store with all sequences uninitialized
    pub fn new() -> Self {
        Self::default()
    }
}
