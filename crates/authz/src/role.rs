//! Role names used for access control.
//!
//! The set is closed: these are the exact role strings the credential layer
//! issues. Unknown strings are rejected at the boundary rather than carried
//! as opaque values, so every downstream comparison is exhaustive.

use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use stayops_core::DomainError;

/// A role granted to a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    SystemAdmin,
    Admin,
    HotelAdmin,
    HotelManager,
    Frontdesk,
    Housekeeping,
    Maintenance,
    OperationsSupervisor,
    Guest,
}

/// Set of roles held by a session.
///
/// Ordered so that logs and test assertions are deterministic.
pub type RoleSet = BTreeSet<RoleName>;

impl RoleName {
    /// Wire representation, matching what the credential layer issues.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::SystemAdmin => "SYSTEM_ADMIN",
            RoleName::Admin => "ADMIN",
            RoleName::HotelAdmin => "HOTEL_ADMIN",
            RoleName::HotelManager => "HOTEL_MANAGER",
            RoleName::Frontdesk => "FRONTDESK",
            RoleName::Housekeeping => "HOUSEKEEPING",
            RoleName::Maintenance => "MAINTENANCE",
            RoleName::OperationsSupervisor => "OPERATIONS_SUPERVISOR",
            RoleName::Guest => "GUEST",
        }
    }
}

impl core::fmt::Display for RoleName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SYSTEM_ADMIN" => Ok(RoleName::SystemAdmin),
            "ADMIN" => Ok(RoleName::Admin),
            "HOTEL_ADMIN" => Ok(RoleName::HotelAdmin),
            "HOTEL_MANAGER" => Ok(RoleName::HotelManager),
            "FRONTDESK" => Ok(RoleName::Frontdesk),
            "HOUSEKEEPING" => Ok(RoleName::Housekeeping),
            "MAINTENANCE" => Ok(RoleName::Maintenance),
            "OPERATIONS_SUPERVISOR" => Ok(RoleName::OperationsSupervisor),
            "GUEST" => Ok(RoleName::Guest),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}
