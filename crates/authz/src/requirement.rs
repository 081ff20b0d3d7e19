//! Access requirements attached to protected routes.

use serde::{Deserialize, Serialize};

use crate::role::{RoleName, RoleSet};

/// The access rule a protected route declares at configuration time.
///
/// The two role-checked modes carry deliberately different semantics and
/// must not be unified:
///
/// - [`SingleRole`](RouteRequirement::SingleRole) is **hierarchy-based**: a
///   higher-ranked role satisfies a lower-ranked requirement.
/// - [`AnyOfRoles`](RouteRequirement::AnyOfRoles) is **exact-membership**:
///   the session must hold one of the listed roles, with no hierarchy
///   substitution.
///
/// Both modes are load-bearing at their respective call sites; collapsing
/// them into one comparison would silently change route behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "requires", content = "role")]
pub enum RouteRequirement {
    /// Authentication only; no role check.
    None,
    /// Hierarchy-checked against a single role.
    SingleRole(RoleName),
    /// Exact-matched against a set of roles.
    AnyOfRoles(RoleSet),
}

impl RouteRequirement {
    pub fn any_of(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self::AnyOfRoles(roles.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tags_each_variant() {
        let single = serde_json::to_string(&RouteRequirement::SingleRole(RoleName::Admin)).unwrap();
        assert_eq!(single, r#"{"requires":"single_role","role":"ADMIN"}"#);

        let none = serde_json::to_string(&RouteRequirement::None).unwrap();
        assert_eq!(none, r#"{"requires":"none"}"#);
    }

    #[test]
    fn any_of_collects_into_a_set() {
        let req = RouteRequirement::any_of([RoleName::Housekeeping, RoleName::Maintenance]);
        let RouteRequirement::AnyOfRoles(roles) = &req else {
            panic!("expected AnyOfRoles");
        };
        assert_eq!(roles.len(), 2);
    }
}
