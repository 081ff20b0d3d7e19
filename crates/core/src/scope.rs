//! Tenant scoping: system-wide vs tenant-bound contexts.
//!
//! Tenants are top-level organizations (hotel chains). Users belong to a
//! specific tenant, except system operators, who carry no tenant binding and
//! operate across all tenants.

use serde::{Deserialize, Serialize};

use crate::id::TenantId;

/// Scope classification for an authenticated (or anonymous) context.
///
/// A context is system-wide when it explicitly claims so, or when no tenant
/// id is bound at all. Anything else is tenant-bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "tenantId")]
pub enum TenantScope {
    /// No tenant binding; operates across all tenants.
    SystemWide,
    /// Bound to a single tenant.
    TenantBound(TenantId),
}

impl TenantScope {
    /// Classify from the raw session fields.
    ///
    /// Rule: system-wide iff `is_system_wide` is claimed OR `tenant_id` is
    /// absent. A claimed system-wide flag wins even when a tenant id is
    /// present (the credential layer owns that claim).
    pub fn classify(is_system_wide: bool, tenant_id: Option<&TenantId>) -> Self {
        match tenant_id {
            Some(id) if !is_system_wide => Self::TenantBound(id.clone()),
            _ => Self::SystemWide,
        }
    }

    pub fn is_system_wide(&self) -> bool {
        matches!(self, Self::SystemWide)
    }

    pub fn tenant_id(&self) -> Option<&TenantId> {
        match self {
            Self::SystemWide => None,
            Self::TenantBound(id) => Some(id),
        }
    }
}

/// Descriptor for a tenant organization.
///
/// Detailed tenant information (name, settings) normally comes from the API;
/// this carries the minimum the UI shell needs for display and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub subdomain: String,
}

impl Tenant {
    /// Build a placeholder descriptor from an id alone, for contexts where
    /// only the token claim is available and no lookup has happened yet.
    pub fn from_id(id: TenantId) -> Self {
        let shown = id.as_str();
        let name = if shown.chars().count() > 8 {
            let prefix: String = shown.chars().take(8).collect();
            format!("Tenant {prefix}...")
        } else {
            format!("Tenant {shown}")
        };
        Self {
            id,
            name,
            subdomain: "current".to_string(),
        }
    }
}
