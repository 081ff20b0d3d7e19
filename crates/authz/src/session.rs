//! Session descriptor supplied by the external session provider.
//!
//! This is a transport-agnostic snapshot of authentication state. The
//! provider owns and mutates it (login, logout, profile change, token
//! refresh); this crate only reads it. Decisions must never be cached
//! across a session change.

use serde::{Deserialize, Serialize};

use stayops_core::{TenantId, TenantScope, UserId};

use crate::role::{RoleName, RoleSet};

/// Snapshot of a session's authentication state.
///
/// `roles` is the canonical source of truth. `legacy_role` exists for
/// backward compatibility with providers that issue a single role; it is
/// folded into the effective role set only when `roles` is empty
/// (see [`Session::effective_roles`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,

    /// True during the window between process start and session resolution.
    /// While set, callers must suspend judgment: render a loading state,
    /// never redirect. This is a first-class blocking state, not an error.
    pub is_initializing: bool,

    #[serde(default)]
    pub roles: RoleSet,

    /// Single-role field from older provider payloads.
    #[serde(default)]
    pub legacy_role: Option<RoleName>,

    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    #[serde(default)]
    pub is_system_wide: bool,

    /// Identity of the authenticated user, when the provider supplies it.
    /// Decision logic never reads this; it exists for log correlation.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl Session {
    /// The provider's boot state: not yet resolved, not authenticated.
    pub fn initializing() -> Self {
        Self {
            is_authenticated: false,
            is_initializing: true,
            roles: RoleSet::new(),
            legacy_role: None,
            tenant_id: None,
            is_system_wide: false,
            user_id: None,
        }
    }

    /// A resolved, unauthenticated session.
    pub fn anonymous() -> Self {
        Self {
            is_initializing: false,
            ..Self::initializing()
        }
    }

    /// Build an authenticated session from a provider login payload.
    ///
    /// Providers send either a roles array or a single legacy role; both
    /// arrive here unmodified and are reconciled by `effective_roles`.
    /// When the payload carries no explicit system-wide claim, the absence
    /// of a tenant binding implies one.
    pub fn authenticated(
        user_id: UserId,
        roles: impl IntoIterator<Item = RoleName>,
        legacy_role: Option<RoleName>,
        tenant_id: Option<TenantId>,
    ) -> Self {
        let is_system_wide = tenant_id.is_none();
        Self {
            is_authenticated: true,
            is_initializing: false,
            roles: roles.into_iter().collect(),
            legacy_role,
            tenant_id,
            is_system_wide,
            user_id: Some(user_id),
        }
    }

    /// The canonical role set for this session.
    ///
    /// `roles` when non-empty; else the singleton of `legacy_role`; else
    /// empty. This is the only place the dual role representation is
    /// reconciled — downstream checks must go through here rather than
    /// inspecting `legacy_role` ad hoc.
    pub fn effective_roles(&self) -> RoleSet {
        if !self.roles.is_empty() {
            return self.roles.clone();
        }
        self.legacy_role.into_iter().collect()
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.effective_roles().contains(&role)
    }

    /// Classify this session as system-wide or tenant-bound.
    pub fn tenant_scope(&self) -> TenantScope {
        TenantScope::classify(self.is_system_wide, self.tenant_id.as_ref())
    }
}
