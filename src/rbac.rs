//! Role-based access control
//!
//! Pure permission checks keyed by a user's fixed role. Every function is
//! total and side-effect-free: a missing user or resource yields `false`,
//! never an error.

use crate::constants::{permissions, roles, routes};
use crate::models::{Booking, Court, User};

/// Check whether the user's role grants a named permission.
pub fn has_permission(user: Option<&User>, permission: &str) -> bool {
    let Some(user) = user else {
        return false;
    };

    let granted: &[&str] = match user.role.as_str() {
        roles::SUPER_ADMIN => &[
            permissions::MANAGE_USERS,
            permissions::MANAGE_COURTS,
            permissions::MANAGE_BOOKINGS,
            permissions::VIEW_ANALYTICS,
            permissions::SYSTEM_SETTINGS,
            permissions::VIEW_ALL_DATA,
        ],
        roles::FIELD_OWNER => &[
            permissions::MANAGE_OWN_COURTS,
            permissions::VIEW_OWN_BOOKINGS,
            permissions::MANAGE_OWN_BOOKINGS,
            permissions::VIEW_OWN_DATA,
        ],
        roles::REGULAR_USER => &[
            permissions::VIEW_COURTS,
            permissions::CREATE_BOOKING,
            permissions::MANAGE_OWN_BOOKINGS,
            permissions::VIEW_OWN_DATA,
        ],
        _ => &[],
    };

    granted.contains(&permission)
}

/// Check whether the user's role may visit a client route.
///
/// Unknown routes and unknown roles deny.
pub fn can_access_route(user: Option<&User>, route: &str) -> bool {
    let Some(user) = user else {
        return false;
    };

    match user.role.as_str() {
        roles::SUPER_ADMIN => true,
        roles::FIELD_OWNER => routes::FIELD_OWNER.contains(&route),
        roles::REGULAR_USER => routes::REGULAR_USER.contains(&route),
        _ => false,
    }
}

/// Check whether the user may view a court.
///
/// Regular users may view any court; field owners only their own.
pub fn can_access_court(user: Option<&User>, court: Option<&Court>) -> bool {
    let (Some(user), Some(court)) = (user, court) else {
        return false;
    };

    match user.role.as_str() {
        roles::SUPER_ADMIN => true,
        roles::FIELD_OWNER => court.owner_id == user.id,
        roles::REGULAR_USER => true,
        _ => false,
    }
}

/// Check whether the user may modify or delete a court.
pub fn can_manage_court(user: Option<&User>, court: Option<&Court>) -> bool {
    let (Some(user), Some(court)) = (user, court) else {
        return false;
    };

    match user.role.as_str() {
        roles::SUPER_ADMIN => true,
        roles::FIELD_OWNER => court.owner_id == user.id,
        _ => false,
    }
}

/// Check whether the user may view or manage a booking.
///
/// Field owners see bookings made on their courts, resolved by a linear scan
/// of the provided court list. Regular users see only their own bookings.
pub fn can_access_booking(user: Option<&User>, booking: Option<&Booking>, courts: &[Court]) -> bool {
    let (Some(user), Some(booking)) = (user, booking) else {
        return false;
    };

    match user.role.as_str() {
        roles::SUPER_ADMIN => true,
        roles::FIELD_OWNER => courts
            .iter()
            .find(|c| c.id == booking.court_id)
            .is_some_and(|c| c.owner_id == user.id),
        roles::REGULAR_USER => booking.user_id == user.id,
        _ => false,
    }
}
