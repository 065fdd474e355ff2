//! Business logic services

pub mod auth_service;
pub mod booking_service;
pub mod court_service;
pub mod dashboard_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use court_service::CourtService;
pub use dashboard_service::DashboardService;
pub use user_service::UserService;
