//! Role hierarchy table.
//!
//! A total, monotonic ranking over role names, used only by hierarchy-based
//! (`SingleRole`) checks. Higher-ranked roles automatically satisfy
//! lower-ranked requirements.

use crate::role::RoleName;

/// Rank of a role in the hierarchy.
///
/// Canonical ranking (ascending): GUEST=1, FRONTDESK=2, HOUSEKEEPING=2,
/// HOTEL_MANAGER=3, HOTEL_ADMIN=4, ADMIN=5.
///
/// SYSTEM_ADMIN, OPERATIONS_SUPERVISOR and MAINTENANCE have no entry in the
/// table and rank 0, which makes them lose every hierarchy comparison.
/// Likely an oversight in the product's role model, but load-bearing today:
/// do not add entries for them without product confirmation.
pub const fn rank(role: RoleName) -> u8 {
    match role {
        RoleName::Guest => 1,
        RoleName::Frontdesk => 2,
        RoleName::Housekeeping => 2,
        RoleName::HotelManager => 3,
        RoleName::HotelAdmin => 4,
        RoleName::Admin => 5,
        RoleName::SystemAdmin | RoleName::OperationsSupervisor | RoleName::Maintenance => 0,
    }
}
