//! In-memory data store
//!
//! Vec-backed store used by the test suite and by demo deployments. Supports
//! an optional simulated latency per call to mimic a remote backend.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::constants::{booking_status, payment_status, roles};
use crate::error::{AppError, AppResult};
use crate::models::{
    Booking, BookingPatch, Court, CourtPatch, NewBooking, NewCourt, NewUser, User, UserPatch,
};
use crate::utils::hash_password;

use super::Store;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    courts: Vec<Court>,
    bookings: Vec<Booking>,
}

/// In-memory store over `RwLock`-guarded vectors
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a slow backend by sleeping before every operation
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            latency: Some(latency),
        }
    }

    /// Build a store seeded with the demo fixtures: one super admin, two
    /// field owners with a handful of courts, and a regular user with
    /// bookings. Demo passwords are the account name before the `@`.
    pub fn with_demo_data() -> AppResult<Self> {
        let store = Self::new();
        let mut tables = Tables::default();
        let now = Utc::now();

        let mut seed_user = |email: &str, name: &str, role: &str| -> AppResult<Uuid> {
            let password = email.split('@').next().unwrap_or(email);
            let user = User {
                id: Uuid::new_v4(),
                email: email.to_string(),
                name: name.to_string(),
                phone: None,
                avatar: None,
                role: role.to_string(),
                password_hash: hash_password(password)?,
                is_active: true,
                created_at: now,
                updated_at: now,
            };
            let id = user.id;
            tables.users.push(user);
            Ok(id)
        };

        let _admin = seed_user("admin@futsal.com", "Super Admin", roles::SUPER_ADMIN)?;
        let owner_one = seed_user("owner@futsal.com", "Field Owner One", roles::FIELD_OWNER)?;
        let owner_two = seed_user("owner2@futsal.com", "Field Owner Two", roles::FIELD_OWNER)?;
        let player = seed_user("user@futsal.com", "Regular User", roles::REGULAR_USER)?;

        let mut seed_court = |name: &str, desc: &str, price: f64, owner: Uuid, location: &str| {
            let court = Court {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: desc.to_string(),
                image: String::new(),
                price_per_hour: price,
                owner_id: owner,
                facilities: vec!["Changing Rooms".to_string(), "Parking".to_string()],
                location: location.to_string(),
                is_active: true,
                created_at: now,
            };
            let id = court.id;
            tables.courts.push(court);
            id
        };

        let premium = seed_court(
            "Premium Court A",
            "High-quality synthetic grass court with professional lighting",
            50.0,
            owner_one,
            "Downtown Sports Complex",
        );
        seed_court(
            "Court B",
            "Standard futsal court perfect for casual games",
            35.0,
            owner_one,
            "Community Center",
        );
        seed_court(
            "Arena Court X",
            "Modern indoor court with climate control",
            60.0,
            owner_two,
            "North Side Arena",
        );

        tables.bookings.push(Booking {
            id: Uuid::new_v4(),
            court_id: premium,
            user_id: player,
            date: now.date_naive(),
            start_time: chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: chrono::NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            total_price: 50.0,
            status: booking_status::CONFIRMED.to_string(),
            payment_status: payment_status::PAID.to_string(),
            notes: Some("Birthday celebration game".to_string()),
            created_at: now,
        });

        *store.tables.try_write().map_err(|_| {
            AppError::Internal(anyhow::anyhow!("Store locked during initialization"))
        })? = tables;

        Ok(store)
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.simulate_latency().await;
        Ok(self.tables.read().await.users.clone())
    }

    async fn find_user(&self, id: &Uuid) -> AppResult<Option<User>> {
        self.simulate_latency().await;
        Ok(self
            .tables
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == *id)
            .cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.simulate_latency().await;
        Ok(self
            .tables
            .read()
            .await
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create_user(&self, new: NewUser) -> AppResult<User> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == new.email) {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new.email,
            name: new.name,
            phone: new.phone,
            avatar: new.avatar,
            role: new.role,
            password_hash: new.password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &Uuid, patch: UserPatch) -> AppResult<Option<User>> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let Some(user) = tables.users.iter_mut().find(|u| u.id == *id) else {
            return Ok(None);
        };

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(password_hash) = patch.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: &Uuid) -> AppResult<bool> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != *id);
        Ok(tables.users.len() < before)
    }

    async fn list_courts(&self) -> AppResult<Vec<Court>> {
        self.simulate_latency().await;
        Ok(self.tables.read().await.courts.clone())
    }

    async fn find_court(&self, id: &Uuid) -> AppResult<Option<Court>> {
        self.simulate_latency().await;
        Ok(self
            .tables
            .read()
            .await
            .courts
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }

    async fn create_court(&self, new: NewCourt) -> AppResult<Court> {
        self.simulate_latency().await;
        let court = Court {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            image: new.image,
            price_per_hour: new.price_per_hour,
            owner_id: new.owner_id,
            facilities: new.facilities,
            location: new.location,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.tables.write().await.courts.push(court.clone());
        Ok(court)
    }

    async fn update_court(&self, id: &Uuid, patch: CourtPatch) -> AppResult<Option<Court>> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let Some(court) = tables.courts.iter_mut().find(|c| c.id == *id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            court.name = name;
        }
        if let Some(description) = patch.description {
            court.description = description;
        }
        if let Some(image) = patch.image {
            court.image = image;
        }
        if let Some(price_per_hour) = patch.price_per_hour {
            court.price_per_hour = price_per_hour;
        }
        if let Some(facilities) = patch.facilities {
            court.facilities = facilities;
        }
        if let Some(location) = patch.location {
            court.location = location;
        }
        if let Some(is_active) = patch.is_active {
            court.is_active = is_active;
        }

        Ok(Some(court.clone()))
    }

    async fn delete_court(&self, id: &Uuid) -> AppResult<bool> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let before = tables.courts.len();
        // Bookings referencing the court are intentionally left in place
        tables.courts.retain(|c| c.id != *id);
        Ok(tables.courts.len() < before)
    }

    async fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        self.simulate_latency().await;
        Ok(self.tables.read().await.bookings.clone())
    }

    async fn bookings_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Booking>> {
        self.simulate_latency().await;
        Ok(self
            .tables
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| b.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn bookings_by_court(&self, court_id: &Uuid) -> AppResult<Vec<Booking>> {
        self.simulate_latency().await;
        Ok(self
            .tables
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| b.court_id == *court_id)
            .cloned()
            .collect())
    }

    async fn find_booking(&self, id: &Uuid) -> AppResult<Option<Booking>> {
        self.simulate_latency().await;
        Ok(self
            .tables
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id == *id)
            .cloned())
    }

    async fn create_booking(&self, new: NewBooking) -> AppResult<Booking> {
        self.simulate_latency().await;
        let booking = Booking {
            id: Uuid::new_v4(),
            court_id: new.court_id,
            user_id: new.user_id,
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            total_price: new.total_price,
            status: new.status,
            payment_status: new.payment_status,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.tables.write().await.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_booking(&self, id: &Uuid, patch: BookingPatch) -> AppResult<Option<Booking>> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let Some(booking) = tables.bookings.iter_mut().find(|b| b.id == *id) else {
            return Ok(None);
        };

        if let Some(date) = patch.date {
            booking.date = date;
        }
        if let Some(start_time) = patch.start_time {
            booking.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            booking.end_time = end_time;
        }
        if let Some(status) = patch.status {
            booking.status = status;
        }
        if let Some(payment_status) = patch.payment_status {
            booking.payment_status = payment_status;
        }
        if let Some(notes) = patch.notes {
            booking.notes = Some(notes);
        }

        Ok(Some(booking.clone()))
    }

    async fn delete_booking(&self, id: &Uuid) -> AppResult<bool> {
        self.simulate_latency().await;
        let mut tables = self.tables.write().await;
        let before = tables.bookings.len();
        tables.bookings.retain(|b| b.id != *id);
        Ok(tables.bookings.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_court(owner_id: Uuid) -> NewCourt {
        NewCourt {
            name: "Premium Court A".to_string(),
            description: "Synthetic grass with floodlights".to_string(),
            image: "courts/a.jpg".to_string(),
            price_per_hour: 50.0,
            owner_id,
            facilities: vec!["Parking".to_string(), "Floodlights".to_string()],
            location: "Downtown Sports Complex".to_string(),
            is_active: true,
        }
    }

    fn new_booking(court_id: Uuid, user_id: Uuid) -> NewBooking {
        NewBooking {
            court_id,
            user_id,
            date: chrono::NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            start_time: chrono::NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: chrono::NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            total_price: 50.0,
            status: booking_status::PENDING.to_string(),
            payment_status: payment_status::PENDING.to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn court_create_then_get_round_trips() {
        let store = MemoryStore::new();
        let owner_id = Uuid::new_v4();

        let created = store.create_court(new_court(owner_id)).await.unwrap();
        let fetched = store.find_court(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Premium Court A");
        assert_eq!(fetched.price_per_hour, 50.0);
        assert_eq!(fetched.owner_id, owner_id);
        assert_eq!(fetched.facilities, created.facilities);
        assert_eq!(fetched.location, created.location);
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn booking_delete_twice_reports_not_found() {
        let store = MemoryStore::new();
        let booking = store
            .create_booking(new_booking(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();

        assert!(store.delete_booking(&booking.id).await.unwrap());
        assert!(!store.delete_booking(&booking.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_is_a_shallow_partial_merge() {
        let store = MemoryStore::new();
        let court = store.create_court(new_court(Uuid::new_v4())).await.unwrap();

        let patch = CourtPatch {
            price_per_hour: Some(65.0),
            is_active: Some(false),
            ..Default::default()
        };
        let updated = store.update_court(&court.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.price_per_hour, 65.0);
        assert!(!updated.is_active);
        // Untouched fields survive the merge
        assert_eq!(updated.name, court.name);
        assert_eq!(updated.facilities, court.facilities);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let store = MemoryStore::new();
        let result = store
            .update_booking(&Uuid::new_v4(), BookingPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn deleting_court_keeps_its_bookings() {
        let store = MemoryStore::new();
        let court = store.create_court(new_court(Uuid::new_v4())).await.unwrap();
        let booking = store
            .create_booking(new_booking(court.id, Uuid::new_v4()))
            .await
            .unwrap();

        assert!(store.delete_court(&court.id).await.unwrap());
        assert!(store.find_booking(&booking.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let store = MemoryStore::new();
        let new = NewUser {
            email: "user@futsal.com".to_string(),
            name: "Regular User".to_string(),
            phone: None,
            avatar: None,
            role: roles::REGULAR_USER.to_string(),
            password_hash: "x".to_string(),
        };
        store.create_user(new.clone()).await.unwrap();
        assert!(matches!(
            store.create_user(new).await,
            Err(AppError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn demo_data_seeds_accounts_and_courts() {
        let store = MemoryStore::with_demo_data().unwrap();
        let users = store.list_users().await.unwrap();
        let courts = store.list_courts().await.unwrap();

        assert_eq!(users.len(), 4);
        assert_eq!(courts.len(), 3);
        assert!(users.iter().any(|u| u.role == roles::SUPER_ADMIN));
    }
}
