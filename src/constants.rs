//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Minimum display name length
pub const MIN_NAME_LENGTH: u64 = 2;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 100;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const SUPER_ADMIN: &str = "super_admin";
    pub const FIELD_OWNER: &str = "field_owner";
    pub const REGULAR_USER: &str = "regular_user";

    /// All user roles
    pub const ALL: &[&str] = &[SUPER_ADMIN, FIELD_OWNER, REGULAR_USER];

    /// Roles that may be chosen at self-registration
    pub const REGISTRABLE: &[&str] = &[FIELD_OWNER, REGULAR_USER];
}

// =============================================================================
// PERMISSIONS
// =============================================================================

/// Named permissions granted per role
pub mod permissions {
    pub const MANAGE_USERS: &str = "manage_users";
    pub const MANAGE_COURTS: &str = "manage_courts";
    pub const MANAGE_BOOKINGS: &str = "manage_bookings";
    pub const VIEW_ANALYTICS: &str = "view_analytics";
    pub const SYSTEM_SETTINGS: &str = "system_settings";
    pub const VIEW_ALL_DATA: &str = "view_all_data";
    pub const MANAGE_OWN_COURTS: &str = "manage_own_courts";
    pub const VIEW_OWN_BOOKINGS: &str = "view_own_bookings";
    pub const MANAGE_OWN_BOOKINGS: &str = "manage_own_bookings";
    pub const VIEW_OWN_DATA: &str = "view_own_data";
    pub const VIEW_COURTS: &str = "view_courts";
    pub const CREATE_BOOKING: &str = "create_booking";
}

// =============================================================================
// CLIENT ROUTES
// =============================================================================

/// Route allow-lists per role (super admins may access every route)
pub mod routes {
    pub const FIELD_OWNER: &[&str] = &[
        "/dashboard",
        "/courts",
        "/bookings",
        "/profile",
        "/courts/create",
    ];

    pub const REGULAR_USER: &[&str] = &["/courts", "/bookings", "/profile"];
}

// =============================================================================
// BOOKING SETTINGS
// =============================================================================

/// Booking lifecycle statuses
pub mod booking_status {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const CANCELLED: &str = "cancelled";
    pub const COMPLETED: &str = "completed";

    /// All booking statuses
    pub const ALL: &[&str] = &[PENDING, CONFIRMED, CANCELLED, COMPLETED];
}

/// Booking payment statuses
pub mod payment_status {
    pub const PENDING: &str = "pending";
    pub const PAID: &str = "paid";
    pub const REFUNDED: &str = "refunded";

    /// All payment statuses
    pub const ALL: &[&str] = &[PENDING, PAID, REFUNDED];
}

/// Minimum booking duration in hours
pub const MIN_BOOKING_HOURS: f64 = 1.0;

/// Number of bookings shown in the dashboard "recent" list
pub const DASHBOARD_RECENT_BOOKINGS: usize = 5;

/// Number of bookings shown in the dashboard "upcoming" list
pub const DASHBOARD_UPCOMING_BOOKINGS: usize = 5;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";
