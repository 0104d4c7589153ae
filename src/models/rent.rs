//! Rent payment model
//!
//! A rent record holds a weak reference to its tenant: just the id, resolved
//! through the tenant store when a name is needed. The payment date is always
//! normalized to the first of the month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::TenantId;
use super::money::Money;
use super::tenant::Tenant;

/// A single rent payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rent {
    /// Id of the tenant this payment is associated to
    pub tenant_id: TenantId,

    /// Payment month, day fixed to the 1st
    #[serde(with = "super::date_format")]
    pub date: NaiveDate,

    /// Payment amount
    pub payment: Money,
}

impl Rent {
    /// Crate-private: live rent records come only from `RentStore::add_rent`.
    pub(crate) fn new(tenant_id: TenantId, date: NaiveDate, payment: Money) -> Self {
        Self {
            tenant_id,
            date,
            payment,
        }
    }

    /// Check whether this record duplicates the given tenant/date/payment
    /// combination. Tenant comparison is by identity.
    pub fn matches(&self, tenant: &Tenant, date: NaiveDate, payment: Money) -> bool {
        self.tenant_id == tenant.id && self.date == date && self.payment == payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_all_fields() {
        let tenant = Tenant::new("Jared", 1);
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let rent = Rent::new(tenant.id, date, Money::from_cents(100000));

        assert!(rent.matches(&tenant, date, Money::from_cents(100000)));

        // Any field off means no match
        assert!(!rent.matches(&tenant, date, Money::from_cents(100001)));
        let other_date = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        assert!(!rent.matches(&tenant, other_date, Money::from_cents(100000)));
        let other_tenant = Tenant::new("Jared", 1);
        assert!(!rent.matches(&other_tenant, date, Money::from_cents(100000)));
    }

    #[test]
    fn test_date_serialized_as_mdy_string() {
        let tenant = Tenant::new("Jared", 1);
        let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        let rent = Rent::new(tenant.id, date, Money::from_cents(95000));

        let json = serde_json::to_string(&rent).unwrap();
        assert!(json.contains(r#""date":"02/01/2023""#));

        let deserialized: Rent = serde_json::from_str(&json).unwrap();
        assert_eq!(rent, deserialized);
    }
}
