//! Repository for the `bookings` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::booking::{Booking, CreateBooking};
use crate::models::status::StatusUpdate;
use crate::store::{Record, Repository};

const COLUMNS: &str = "id, tour_id, first_name, last_name, email, phone, travel_date, \
     group_size, special_requests, status, created_at";

#[async_trait]
impl Repository<Booking> for PgStore {
    async fn list(&self, _filter: &()) -> Result<Vec<Booking>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY id");
        let rows = sqlx::query_as::<_, Booking>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<Booking>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        let row = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateBooking) -> Result<Booking, StoreError> {
        let booking = Booking::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO bookings (tour_id, first_name, last_name, email, phone, travel_date,
                 group_size, special_requests, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Booking>(&query)
            .bind(booking.tour_id)
            .bind(&booking.first_name)
            .bind(&booking.last_name)
            .bind(&booking.email)
            .bind(&booking.phone)
            .bind(booking.travel_date)
            .bind(booking.group_size)
            .bind(&booking.special_requests)
            .bind(&booking.status)
            .bind(booking.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, patch: StatusUpdate) -> Result<Option<Booking>, StoreError> {
        let query = format!("UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(&patch.status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
