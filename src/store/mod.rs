//! Data store contract and implementations
//!
//! One `Store` trait with two interchangeable implementations selected by
//! configuration: an in-memory store for tests and demo deployments and a
//! Postgres store for production. `update` methods perform a shallow partial
//! merge by id and return `None` for a missing id; `delete` methods return a
//! success boolean. No transactions, no pagination.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{
    Booking, BookingPatch, Court, CourtPatch, NewBooking, NewCourt, NewUser, User, UserPatch,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence operations over users, courts and bookings
#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn list_users(&self) -> AppResult<Vec<User>>;
    async fn find_user(&self, id: &Uuid) -> AppResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn create_user(&self, new: NewUser) -> AppResult<User>;
    async fn update_user(&self, id: &Uuid, patch: UserPatch) -> AppResult<Option<User>>;
    async fn delete_user(&self, id: &Uuid) -> AppResult<bool>;

    // Courts
    async fn list_courts(&self) -> AppResult<Vec<Court>>;
    async fn find_court(&self, id: &Uuid) -> AppResult<Option<Court>>;
    async fn create_court(&self, new: NewCourt) -> AppResult<Court>;
    async fn update_court(&self, id: &Uuid, patch: CourtPatch) -> AppResult<Option<Court>>;
    async fn delete_court(&self, id: &Uuid) -> AppResult<bool>;

    // Bookings
    async fn list_bookings(&self) -> AppResult<Vec<Booking>>;
    async fn bookings_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Booking>>;
    async fn bookings_by_court(&self, court_id: &Uuid) -> AppResult<Vec<Booking>>;
    async fn find_booking(&self, id: &Uuid) -> AppResult<Option<Booking>>;
    async fn create_booking(&self, new: NewBooking) -> AppResult<Booking>;
    async fn update_booking(&self, id: &Uuid, patch: BookingPatch) -> AppResult<Option<Booking>>;
    async fn delete_booking(&self, id: &Uuid) -> AppResult<bool>;
}
