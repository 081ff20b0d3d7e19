//! Static route table: path patterns and their access requirements.
//!
//! Requirements are declared once, at table construction, and never
//! mutated. Paths are patterns as the navigation layer declares them
//! (`:id`-style parameters included verbatim); the table does not do
//! parameter matching, it is a configuration index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::requirement::RouteRequirement;
use crate::role::RoleName;

/// Immutable map from route path to its access requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteRequirement>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder {
            routes: BTreeMap::new(),
        }
    }

    /// Requirement for a declared path, or `None` for undeclared (public)
    /// paths.
    pub fn requirement(&self, path: &str) -> Option<&RouteRequirement> {
        self.routes.get(path)
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteRequirement)> {
        self.routes.iter().map(|(path, req)| (path.as_str(), req))
    }

    /// The application's protected-route configuration.
    ///
    /// Admin and system screens are hierarchy-checked against ADMIN,
    /// hotel-admin screens against HOTEL_ADMIN, front-desk screens against
    /// FRONTDESK. The staff dashboard is exact-matched: housekeeping and
    /// maintenance share it, and equal-ranked roles outside the list
    /// (front desk) must not slip in via the hierarchy.
    pub fn standard() -> Self {
        let admin = || RouteRequirement::SingleRole(RoleName::Admin);
        let hotel_admin = || RouteRequirement::SingleRole(RoleName::HotelAdmin);
        let frontdesk = || RouteRequirement::SingleRole(RoleName::Frontdesk);

        Self::builder()
            // Authenticated-only screens.
            .route("/profile", RouteRequirement::None)
            .route("/my-bookings", RouteRequirement::None)
            .route("/system-dashboard", RouteRequirement::None)
            // System administration.
            .route("/system/hotels", admin())
            .route("/system/tenants", admin())
            .route("/system/users", admin())
            .route("/system/analytics", admin())
            .route("/system/settings", admin())
            // Tenant administration.
            .route("/admin", admin())
            .route("/admin/dashboard", admin())
            .route("/admin/hotels", admin())
            .route("/admin/hotels/:id", admin())
            .route("/admin/hotels/:id/edit", admin())
            .route("/admin/hotel-registrations", admin())
            .route("/admin/register-hotel", admin())
            .route("/admin/users", admin())
            .route("/admin/users/:id", admin())
            .route("/admin/users/:id/edit", admin())
            .route("/admin/add-user", admin())
            // Hotel administration.
            .route("/hotel-admin", hotel_admin())
            .route("/hotel-admin/dashboard", hotel_admin())
            .route("/hotel-admin/hotel", hotel_admin())
            .route("/hotel-admin/bookings/:id", hotel_admin())
            .route("/hotel-admin/bookings/:id/edit", hotel_admin())
            .route("/hotel-admin/staff", hotel_admin())
            .route("/hotel-admin/staff/:id", hotel_admin())
            .route("/hotel-admin/rooms", hotel_admin())
            .route("/hotel-admin/rooms/:id", hotel_admin())
            // Front desk.
            .route("/frontdesk", frontdesk())
            .route("/frontdesk/dashboard", frontdesk())
            .route("/frontdesk/bookings/:id", frontdesk())
            .route("/frontdesk/bookings/:id/edit", frontdesk())
            // Operations.
            .route(
                "/operations/dashboard",
                RouteRequirement::SingleRole(RoleName::OperationsSupervisor),
            )
            .route(
                "/staff/dashboard",
                RouteRequirement::any_of([RoleName::Housekeeping, RoleName::Maintenance]),
            )
            .build()
    }
}

/// Builder for [`RouteTable`]. Later declarations of the same path win,
/// matching declaration-order semantics of the navigation layer.
pub struct RouteTableBuilder {
    routes: BTreeMap<String, RouteRequirement>,
}

impl RouteTableBuilder {
    pub fn route(mut self, path: impl Into<String>, requirement: RouteRequirement) -> Self {
        self.routes.insert(path.into(), requirement);
        self
    }

    pub fn build(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }
}
