//! In-memory tenant store
//!
//! Owns the authoritative ordered list of tenants. Insertion order matters:
//! the most recently added tenant for an apartment is the current resident.

use crate::error::RentbookResult;
use crate::models::{Tenant, TenantId};
use crate::storage::LoadAuthority;

/// Store for tenant records
///
/// The backing sequence is `None` until the first add or a non-empty load;
/// tenants are never removed.
#[derive(Debug, Default)]
pub struct TenantStore {
    records: Option<Vec<Tenant>>,
}

impl TenantStore {
    /// Create an empty, uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new tenant and append it to the sequence.
    ///
    /// Always succeeds; returns a copy of the stored record.
    pub fn add_tenant(&mut self, name: impl Into<String>, apt_num: u32) -> Tenant {
        let tenant = Tenant::new(name, apt_num);
        self.records
            .get_or_insert_with(Vec::new)
            .push(tenant.clone());
        tenant
    }

    /// Replace the in-memory sequence with records loaded from disk.
    ///
    /// Requires a `LoadAuthority`, which only the persistence gateway can
    /// construct. An empty batch is a no-op success: existing in-memory
    /// state, if any, is left untouched.
    pub fn load(&mut self, records: Vec<Tenant>, _auth: &LoadAuthority) -> RentbookResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        self.records = Some(records);
        Ok(())
    }

    /// Read-only snapshot of the tenant sequence, in insertion order.
    ///
    /// `None` means the store was never loaded or populated.
    pub fn tenants(&self) -> Option<&[Tenant]> {
        self.records.as_deref()
    }

    /// Look up a tenant by identity. Linear scan, first match.
    pub fn tenant_by_id(&self, id: TenantId) -> Option<&Tenant> {
        self.records.as_deref()?.iter().find(|t| t.id == id)
    }

    /// The current resident of an apartment: the most recently added tenant
    /// with a matching apartment number.
    pub fn current_for_apartment(&self, apt_num: u32) -> Option<&Tenant> {
        self.records
            .as_deref()?
            .iter()
            .rev()
            .find(|t| t.apt_num == apt_num)
    }
}
