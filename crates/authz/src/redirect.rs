//! Landing-path resolution after an authentication transition.

use serde::{Deserialize, Serialize};

use crate::role::RoleName;
use crate::session::Session;

/// The fixed candidate list of post-authentication landing paths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    Login,
    SystemDashboard,
    HotelAdminDashboard,
    AdminDashboard,
    FrontdeskDashboard,
    OperationsDashboard,
    StaffDashboard,
    HotelSearch,
}

impl RedirectTarget {
    /// The literal path the navigation layer consumes.
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::SystemDashboard => "/system-dashboard",
            RedirectTarget::HotelAdminDashboard => "/hotel-admin/dashboard",
            RedirectTarget::AdminDashboard => "/admin/dashboard",
            RedirectTarget::FrontdeskDashboard => "/frontdesk/dashboard",
            RedirectTarget::OperationsDashboard => "/operations/dashboard",
            RedirectTarget::StaffDashboard => "/staff/dashboard",
            RedirectTarget::HotelSearch => "/hotels/search",
        }
    }
}

impl core::fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

/// Resolve the landing path for a session, once per authentication
/// transition (login success, initial load completion).
///
/// Returns `None` while the session is still initializing: the caller must
/// render a loading state and wait, not redirect.
///
/// The rules below are a strict business priority list — first match wins.
/// The ordering deliberately disagrees with the role hierarchy table
/// (HOTEL_ADMIN routes before tenant-bound ADMIN even though ADMIN outranks
/// it); do not reorder to match the hierarchy.
pub fn resolve_landing(session: &Session) -> Option<RedirectTarget> {
    if session.is_initializing {
        return None;
    }
    if !session.is_authenticated {
        return Some(RedirectTarget::Login);
    }

    let roles = &session.roles;
    let tenant_bound = session.tenant_id.is_some();

    let target = if roles.contains(&RoleName::SystemAdmin)
        || (roles.contains(&RoleName::Admin) && !tenant_bound)
    {
        RedirectTarget::SystemDashboard
    } else if roles.contains(&RoleName::HotelAdmin) {
        RedirectTarget::HotelAdminDashboard
    } else if roles.contains(&RoleName::Admin) && tenant_bound {
        RedirectTarget::AdminDashboard
    } else if roles.contains(&RoleName::Frontdesk) {
        RedirectTarget::FrontdeskDashboard
    } else if roles.contains(&RoleName::OperationsSupervisor) {
        RedirectTarget::OperationsDashboard
    } else if roles.contains(&RoleName::Housekeeping) || roles.contains(&RoleName::Maintenance) {
        RedirectTarget::StaffDashboard
    } else if let Some(target) = session.legacy_role.and_then(|r| legacy_target(r, tenant_bound)) {
        target
    } else {
        // Authenticated but no recognized role: the public search page.
        RedirectTarget::HotelSearch
    };

    tracing::debug!(landing = %target, roles = ?session.effective_roles(), "landing_resolved");
    Some(target)
}

/// Single-role fallback chain for legacy provider payloads, mirroring the
/// multi-role rules above.
fn legacy_target(role: RoleName, tenant_bound: bool) -> Option<RedirectTarget> {
    match role {
        RoleName::SystemAdmin => Some(RedirectTarget::SystemDashboard),
        RoleName::HotelAdmin => Some(RedirectTarget::HotelAdminDashboard),
        RoleName::Admin if tenant_bound => Some(RedirectTarget::AdminDashboard),
        RoleName::Admin => Some(RedirectTarget::SystemDashboard),
        RoleName::Frontdesk => Some(RedirectTarget::FrontdeskDashboard),
        RoleName::OperationsSupervisor => Some(RedirectTarget::OperationsDashboard),
        RoleName::Housekeeping | RoleName::Maintenance => Some(RedirectTarget::StaffDashboard),
        RoleName::HotelManager | RoleName::Guest => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stayops_core::{TenantId, UserId};

    fn session_with(
        roles: impl IntoIterator<Item = RoleName>,
        tenant: Option<&str>,
    ) -> Session {
        Session::authenticated(
            UserId::new(),
            roles,
            None,
            tenant.map(|t| TenantId::new(t.to_string())),
        )
    }

    #[test]
    fn initializing_session_yields_no_target() {
        assert_eq!(resolve_landing(&Session::initializing()), None);
    }

    #[test]
    fn unauthenticated_goes_to_login() {
        assert_eq!(
            resolve_landing(&Session::anonymous()),
            Some(RedirectTarget::Login)
        );
    }

    #[test]
    fn system_admin_goes_to_system_dashboard() {
        let session = session_with([RoleName::SystemAdmin], Some("t1"));
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::SystemDashboard)
        );
    }

    #[test]
    fn tenantless_admin_goes_to_system_dashboard() {
        let session = session_with([RoleName::Admin], None);
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::SystemDashboard)
        );
    }

    #[test]
    fn tenant_bound_admin_goes_to_admin_dashboard() {
        let session = session_with([RoleName::Admin], Some("t1"));
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::AdminDashboard)
        );
    }

    #[test]
    fn hotel_admin_goes_to_hotel_admin_dashboard() {
        let session = session_with([RoleName::HotelAdmin], Some("t1"));
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::HotelAdminDashboard)
        );
    }

    // HOTEL_ADMIN routes before tenant-bound ADMIN even though ADMIN
    // outranks it in the hierarchy: routing priority is a business list.
    #[test]
    fn hotel_admin_wins_over_tenant_bound_admin() {
        let session = session_with([RoleName::HotelAdmin, RoleName::Admin], Some("t1"));
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::HotelAdminDashboard)
        );
    }

    #[test]
    fn frontdesk_goes_to_frontdesk_dashboard() {
        let session = session_with([RoleName::Frontdesk], Some("t1"));
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::FrontdeskDashboard)
        );
    }

    #[test]
    fn operations_supervisor_goes_to_operations_dashboard() {
        let session = session_with([RoleName::OperationsSupervisor], Some("t1"));
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::OperationsDashboard)
        );
    }

    #[test]
    fn housekeeping_and_maintenance_share_the_staff_dashboard() {
        for role in [RoleName::Housekeeping, RoleName::Maintenance] {
            let session = session_with([role], Some("t1"));
            assert_eq!(
                resolve_landing(&session),
                Some(RedirectTarget::StaffDashboard)
            );
        }
    }

    #[test]
    fn no_recognized_role_falls_back_to_hotel_search() {
        let session = session_with([], None);
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::HotelSearch)
        );
    }

    #[test]
    fn guest_role_falls_through_to_hotel_search() {
        let session = session_with([RoleName::Guest], None);
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::HotelSearch)
        );
    }

    #[test]
    fn legacy_admin_without_tenant_goes_to_system_dashboard() {
        let session = Session {
            legacy_role: Some(RoleName::Admin),
            ..session_with([], None)
        };
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::SystemDashboard)
        );
    }

    #[test]
    fn legacy_admin_with_tenant_goes_to_admin_dashboard() {
        let session = Session {
            legacy_role: Some(RoleName::Admin),
            ..session_with([], Some("t1"))
        };
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::AdminDashboard)
        );
    }

    #[test]
    fn multi_role_rules_take_priority_over_the_legacy_chain() {
        let session = Session {
            legacy_role: Some(RoleName::HotelAdmin),
            ..session_with([RoleName::Frontdesk], Some("t1"))
        };
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::FrontdeskDashboard)
        );
    }

    // The legacy chain still applies when the roles set matched nothing,
    // e.g. a GUEST-only set with an old single-role ADMIN field.
    #[test]
    fn legacy_chain_fires_when_no_multi_role_rule_matched() {
        let session = Session {
            legacy_role: Some(RoleName::Frontdesk),
            ..session_with([RoleName::Guest], Some("t1"))
        };
        assert_eq!(
            resolve_landing(&session),
            Some(RedirectTarget::FrontdeskDashboard)
        );
    }

    #[test]
    fn paths_match_the_navigation_contract() {
        assert_eq!(RedirectTarget::Login.path(), "/login");
        assert_eq!(RedirectTarget::SystemDashboard.path(), "/system-dashboard");
        assert_eq!(
            RedirectTarget::HotelAdminDashboard.path(),
            "/hotel-admin/dashboard"
        );
        assert_eq!(RedirectTarget::AdminDashboard.path(), "/admin/dashboard");
        assert_eq!(
            RedirectTarget::FrontdeskDashboard.path(),
            "/frontdesk/dashboard"
        );
        assert_eq!(
            RedirectTarget::OperationsDashboard.path(),
            "/operations/dashboard"
        );
        assert_eq!(RedirectTarget::StaffDashboard.path(), "/staff/dashboard");
        assert_eq!(RedirectTarget::HotelSearch.path(), "/hotels/search");
    }
}
