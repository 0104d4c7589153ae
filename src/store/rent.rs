//! In-memory rent payment store
//!
//! Every rent record references a tenant by id. Referential integrity is
//! enforced at load time; duplicate detection is advisory only and never
//! blocks an insert.

use chrono::NaiveDate;

use crate::error::{RentbookError, RentbookResult};
use crate::models::{Money, Rent, Tenant};
use crate::storage::LoadAuthority;

use super::tenants::TenantStore;

/// Store for rent payment records
#[derive(Debug, Default)]
pub struct RentStore {
    records: Option<Vec<Rent>>,
}

impl RentStore {
    /// Create an empty, uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rent payment for a tenant.
    ///
    /// Rejects month outside 1-12 and negative years. The payment date is
    /// normalized to the 1st of the month. Duplicates are not rejected here;
    /// callers run `is_duplicate` beforehand if they want to warn.
    pub fn add_rent(
        &mut self,
        tenant: &Tenant,
        year: i32,
        month: u32,
        payment: Money,
    ) -> RentbookResult<Rent> {
        if !(1..=12).contains(&month) {
            return Err(RentbookError::Validation(format!(
                "rent month must be between 1 and 12, got {}",
                month
            )));
        }
        if year < 0 {
            return Err(RentbookError::Validation(format!(
                "rent year must not be negative, got {}",
                year
            )));
        }

        let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            RentbookError::Validation(format!("invalid rent date: {}-{}-01", year, month))
        })?;

        let rent = Rent::new(tenant.id, date, payment);
        self.records.get_or_insert_with(Vec::new).push(rent.clone());
        Ok(rent)
    }

    /// Replace the in-memory sequence with records loaded from disk.
    ///
    /// Every record's tenant id must resolve through the tenant store. If any
    /// record fails, the whole batch is rejected and prior in-memory state is
    /// preserved. An empty batch is a no-op success.
    pub fn load(
        &mut self,
        records: Vec<Rent>,
        tenants: &TenantStore,
        _auth: &LoadAuthority,
    ) -> RentbookResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        for rent in &records {
            if tenants.tenant_by_id(rent.tenant_id).is_none() {
                return Err(RentbookError::ReferentialIntegrity(format!(
                    "rent record references unknown tenant {}",
                    rent.tenant_id
                )));
            }
        }
        self.records = Some(records);
        Ok(())
    }

    /// True iff an existing record matches the tenant identity, exact date,
    /// and exact payment amount. Advisory: the store never blocks
    /// re-insertion of a matching record.
    pub fn is_duplicate(&self, tenant: &Tenant, date: NaiveDate, payment: Money) -> bool {
        self.records
            .as_deref()
            .into_iter()
            .flatten()
            .any(|r| r.matches(tenant, date, payment))
    }

    /// Read-only snapshot of the rent sequence, in insertion order.
    ///
    /// `None` means the store was never loaded or populated.
    pub fn rent(&self) -> Option<&[Rent]> {
        self.records.as_deref()
    }
}
