//! Access policy evaluation.
//!
//! - No IO
//! - No panics
//! - No business logic beyond the policy check itself

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hierarchy::rank;
use crate::requirement::RouteRequirement;
use crate::session::Session;

/// Why access was denied.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("role mismatch")]
    RoleMismatch,
}

/// Outcome of an access check. A value, never cached across sessions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "decision", content = "reason")]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `session` may access a route declaring `requirement`.
///
/// Unauthenticated sessions are denied before any role inspection. A
/// `None` requirement admits any authenticated session. `SingleRole` is
/// hierarchy-based; `AnyOfRoles` is exact-membership (see
/// [`RouteRequirement`]). Missing or empty role data is not an error: it
/// degrades to `Deny`.
pub fn evaluate(session: &Session, requirement: &RouteRequirement) -> Decision {
    if !session.is_authenticated {
        tracing::warn!(requirement = ?requirement, "access_denied_unauthenticated");
        return Decision::Deny(DenyReason::Unauthenticated);
    }

    if matches!(requirement, RouteRequirement::None) {
        return Decision::Allow;
    }

    let effective = session.effective_roles();

    let allowed = match requirement {
        RouteRequirement::None => true,
        RouteRequirement::SingleRole(required) => {
            let needed = rank(*required);
            effective.iter().any(|role| rank(*role) >= needed)
        }
        RouteRequirement::AnyOfRoles(wanted) => {
            effective.iter().any(|role| wanted.contains(role))
        }
    };

    if allowed {
        tracing::debug!(roles = ?effective, requirement = ?requirement, "access_allowed");
        Decision::Allow
    } else {
        tracing::warn!(
            tenant_id = session.tenant_id.as_ref().map(|t| t.as_str()),
            roles = ?effective,
            requirement = ?requirement,
            "access_denied_role_mismatch"
        );
        Decision::Deny(DenyReason::RoleMismatch)
    }
}
