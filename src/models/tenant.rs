//! Tenant model
//!
//! A tenant is identified by an opaque id assigned once at creation. Equality
//! is identity-based: two records with the same id are the same tenant no
//! matter what the other fields say.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TenantId;

/// A rental tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier, immutable once assigned
    pub id: TenantId,

    /// Tenant name
    pub name: String,

    /// Apartment number the tenant occupies
    pub apt_num: u32,
}

impl Tenant {
    /// Create a new tenant with a fresh identity.
    ///
    /// Crate-private: live tenants come only from `TenantStore::add_tenant`.
    /// Deserialization produces records, not store entries.
    pub(crate) fn new(name: impl Into<String>, apt_num: u32) -> Self {
        Self {
            id: TenantId::new(),
            name: name.into(),
            apt_num,
        }
    }
}

impl PartialEq for Tenant {
    /// Identity equality: only the id is compared.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tenant {}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Apt: {})", self.name, self.apt_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tenant() {
        let tenant = Tenant::new("Jared", 1);
        assert_eq!(tenant.name, "Jared");
        assert_eq!(tenant.apt_num, 1);
        assert!(!tenant.id.as_uuid().is_nil());
    }

    #[test]
    fn test_identity_equality() {
        let a = Tenant::new("Jared", 1);
        let mut b = a.clone();
        b.name = "Renamed".into();
        b.apt_num = 99;

        // Same id, still the same tenant
        assert_eq!(a, b);

        let c = Tenant::new("Jared", 1);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let tenant = Tenant::new("Garret", 2);
        assert_eq!(tenant.to_string(), "Garret (Apt: 2)");
    }

    #[test]
    fn test_serialization_round_trip() {
        let tenant = Tenant::new("Jared", 1);
        let json = serde_json::to_string(&tenant).unwrap();
        let deserialized: Tenant = serde_json::from_str(&json).unwrap();

        assert_eq!(tenant, deserialized);
        assert_eq!(tenant.name, deserialized.name);
        assert_eq!(tenant.apt_num, deserialized.apt_num);
    }
}
