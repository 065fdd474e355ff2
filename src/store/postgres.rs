//! Postgres data store

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::AppResult;
use crate::models::{
    Booking, BookingPatch, Court, CourtPatch, NewBooking, NewCourt, NewUser, User, UserPatch,
};

use super::Store;

/// Postgres-backed store
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using the store configuration and run pending migrations
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let url = config.database_url.as_deref().ok_or_else(|| {
            crate::error::AppError::Configuration("DATABASE_URL is not set".to_string())
        })?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| crate::error::AppError::Database(e.to_string()))?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY created_at"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_user(&self, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create_user(&self, new: NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, phone, avatar, role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&new.email)
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.avatar)
        .bind(&new.role)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_user(&self, id: &Uuid, patch: UserPatch) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                email = COALESCE($2, email),
                name = COALESCE($3, name),
                phone = COALESCE($4, phone),
                avatar = COALESCE($5, avatar),
                password_hash = COALESCE($6, password_hash),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.email)
        .bind(&patch.name)
        .bind(&patch.phone)
        .bind(&patch.avatar)
        .bind(&patch.password_hash)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete_user(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_courts(&self) -> AppResult<Vec<Court>> {
        let courts = sqlx::query_as::<_, Court>(r#"SELECT * FROM courts ORDER BY created_at"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(courts)
    }

    async fn find_court(&self, id: &Uuid) -> AppResult<Option<Court>> {
        let court = sqlx::query_as::<_, Court>(r#"SELECT * FROM courts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(court)
    }

    async fn create_court(&self, new: NewCourt) -> AppResult<Court> {
        let court = sqlx::query_as::<_, Court>(
            r#"
            INSERT INTO courts (name, description, image, price_per_hour, owner_id, facilities, location, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.image)
        .bind(new.price_per_hour)
        .bind(new.owner_id)
        .bind(&new.facilities)
        .bind(&new.location)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(court)
    }

    async fn update_court(&self, id: &Uuid, patch: CourtPatch) -> AppResult<Option<Court>> {
        let court = sqlx::query_as::<_, Court>(
            r#"
            UPDATE courts
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                price_per_hour = COALESCE($5, price_per_hour),
                facilities = COALESCE($6, facilities),
                location = COALESCE($7, location),
                is_active = COALESCE($8, is_active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(&patch.image)
        .bind(patch.price_per_hour)
        .bind(&patch.facilities)
        .bind(&patch.location)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(court)
    }

    async fn delete_court(&self, id: &Uuid) -> AppResult<bool> {
        // Bookings referencing the court are intentionally left in place
        let result = sqlx::query(r#"DELETE FROM courts WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        let bookings =
            sqlx::query_as::<_, Booking>(r#"SELECT * FROM bookings ORDER BY created_at"#)
                .fetch_all(&self.pool)
                .await?;

        Ok(bookings)
    }

    async fn bookings_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn bookings_by_court(&self, court_id: &Uuid) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"SELECT * FROM bookings WHERE court_id = $1 ORDER BY created_at"#,
        )
        .bind(court_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_booking(&self, id: &Uuid) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(r#"SELECT * FROM bookings WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    async fn create_booking(&self, new: NewBooking) -> AppResult<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (court_id, user_id, date, start_time, end_time, total_price, status, payment_status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(new.court_id)
        .bind(new.user_id)
        .bind(new.date)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.total_price)
        .bind(&new.status)
        .bind(&new.payment_status)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn update_booking(&self, id: &Uuid, patch: BookingPatch) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET
                date = COALESCE($2, date),
                start_time = COALESCE($3, start_time),
                end_time = COALESCE($4, end_time),
                status = COALESCE($5, status),
                payment_status = COALESCE($6, payment_status),
                notes = COALESCE($7, notes)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.date)
        .bind(patch.start_time)
        .bind(patch.end_time)
        .bind(&patch.status)
        .bind(&patch.payment_status)
        .bind(&patch.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn delete_booking(&self, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM bookings WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
