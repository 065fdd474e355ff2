//! Dashboard statistics service

use chrono::Utc;

use crate::{
    constants::{DASHBOARD_RECENT_BOOKINGS, DASHBOARD_UPCOMING_BOOKINGS, payment_status},
    error::AppResult,
    handlers::dashboard::DashboardStats,
    models::{Booking, Court, User},
    store::Store,
};

/// Dashboard service for role-scoped statistics
pub struct DashboardService;

impl DashboardService {
    /// Compute dashboard statistics scoped to what the requester may see:
    /// super admins aggregate over everything, field owners over their own
    /// courts and the bookings made on them, regular users over their own
    /// bookings.
    pub async fn stats(store: &dyn Store, requester: &User) -> AppResult<DashboardStats> {
        let all_courts = store.list_courts().await?;

        let (courts, mut bookings): (Vec<Court>, Vec<Booking>) = if requester.is_super_admin() {
            (all_courts, store.list_bookings().await?)
        } else if requester.is_field_owner() {
            let courts: Vec<Court> = all_courts
                .into_iter()
                .filter(|c| c.owner_id == requester.id)
                .collect();
            let bookings = store
                .list_bookings()
                .await?
                .into_iter()
                .filter(|b| courts.iter().any(|c| c.id == b.court_id))
                .collect();
            (courts, bookings)
        } else {
            // Regular users don't own courts
            (Vec::new(), store.bookings_by_user(&requester.id).await?)
        };

        let total_revenue = bookings
            .iter()
            .filter(|b| b.payment_status == payment_status::PAID)
            .map(|b| b.total_price)
            .sum();

        let total_users = if requester.is_super_admin() {
            store
                .list_users()
                .await?
                .iter()
                .filter(|u| u.is_active)
                .count() as i64
        } else {
            0
        };

        let today = Utc::now().date_naive();
        let upcoming_bookings: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.is_upcoming(today))
            .take(DASHBOARD_UPCOMING_BOOKINGS)
            .cloned()
            .collect();

        bookings.sort_by_key(|b| b.created_at);
        let total_bookings = bookings.len() as i64;
        let recent_bookings: Vec<Booking> = bookings
            .iter()
            .rev()
            .take(DASHBOARD_RECENT_BOOKINGS)
            .cloned()
            .collect();

        Ok(DashboardStats {
            total_bookings,
            total_revenue,
            active_courts: courts.iter().filter(|c| c.is_active).count() as i64,
            total_users,
            recent_bookings,
            upcoming_bookings,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use uuid::Uuid;

    use super::*;
    use crate::constants::{booking_status, roles};
    use crate::models::{NewBooking, NewCourt, NewUser};
    use crate::store::MemoryStore;

    async fn seed_user(store: &MemoryStore, role: &str) -> User {
        store
            .create_user(NewUser {
                email: format!("{}@futsal.com", Uuid::new_v4()),
                name: role.to_string(),
                phone: None,
                avatar: None,
                role: role.to_string(),
                password_hash: "x".to_string(),
            })
            .await
            .unwrap()
    }

    async fn seed_court(store: &MemoryStore, owner_id: Uuid, price: f64) -> Court {
        store
            .create_court(NewCourt {
                name: "Court".to_string(),
                description: String::new(),
                image: String::new(),
                price_per_hour: price,
                owner_id,
                facilities: Vec::new(),
                location: String::new(),
                is_active: true,
            })
            .await
            .unwrap()
    }

    async fn seed_booking(
        store: &MemoryStore,
        court_id: Uuid,
        user_id: Uuid,
        price: f64,
        paid: bool,
        days_ahead: i64,
    ) -> Booking {
        store
            .create_booking(NewBooking {
                court_id,
                user_id,
                date: Utc::now().date_naive() + Duration::days(days_ahead),
                start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
                total_price: price,
                status: booking_status::CONFIRMED.to_string(),
                payment_status: if paid {
                    payment_status::PAID.to_string()
                } else {
                    payment_status::PENDING.to_string()
                },
                notes: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn revenue_counts_only_paid_bookings() {
        let store = MemoryStore::new();
        let admin = seed_user(&store, roles::SUPER_ADMIN).await;
        let owner = seed_user(&store, roles::FIELD_OWNER).await;
        let player = seed_user(&store, roles::REGULAR_USER).await;
        let court = seed_court(&store, owner.id, 50.0).await;

        seed_booking(&store, court.id, player.id, 50.0, true, 1).await;
        seed_booking(&store, court.id, player.id, 35.0, false, 2).await;

        let stats = DashboardService::stats(&store, &admin).await.unwrap();
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, 50.0);
        assert_eq!(stats.active_courts, 1);
        assert_eq!(stats.total_users, 3);
    }

    #[tokio::test]
    async fn field_owner_sees_only_own_courts_and_bookings() {
        let store = MemoryStore::new();
        let owner = seed_user(&store, roles::FIELD_OWNER).await;
        let other = seed_user(&store, roles::FIELD_OWNER).await;
        let player = seed_user(&store, roles::REGULAR_USER).await;
        let own_court = seed_court(&store, owner.id, 50.0).await;
        let foreign_court = seed_court(&store, other.id, 60.0).await;

        seed_booking(&store, own_court.id, player.id, 50.0, true, 1).await;
        seed_booking(&store, foreign_court.id, player.id, 60.0, true, 1).await;

        let stats = DashboardService::stats(&store, &owner).await.unwrap();
        assert_eq!(stats.total_bookings, 1);
        assert_eq!(stats.total_revenue, 50.0);
        assert_eq!(stats.active_courts, 1);
        // User counts are an admin-only figure
        assert_eq!(stats.total_users, 0);
    }

    #[tokio::test]
    async fn regular_user_sees_only_own_bookings_and_no_courts() {
        let store = MemoryStore::new();
        let owner = seed_user(&store, roles::FIELD_OWNER).await;
        let player = seed_user(&store, roles::REGULAR_USER).await;
        let other_player = seed_user(&store, roles::REGULAR_USER).await;
        let court = seed_court(&store, owner.id, 50.0).await;

        seed_booking(&store, court.id, player.id, 50.0, true, 1).await;
        seed_booking(&store, court.id, other_player.id, 50.0, true, 1).await;

        let stats = DashboardService::stats(&store, &player).await.unwrap();
        assert_eq!(stats.total_bookings, 1);
        assert_eq!(stats.active_courts, 0);
        assert_eq!(stats.upcoming_bookings.len(), 1);
    }
}
