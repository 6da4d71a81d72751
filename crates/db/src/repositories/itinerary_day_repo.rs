//! Repository for the `itinerary_days` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::itinerary_day::{
    CreateItineraryDay, ItineraryDay, ItineraryDayFilter, UpdateItineraryDay,
};
use crate::store::{Record, Removable, Repository};

const COLUMNS: &str = "id, itinerary_id, day_number, title, description, activities, \
     accommodation, meals, transportation, notes";

#[async_trait]
impl Repository<ItineraryDay> for PgStore {
    /// Days ordered by `day_number`.
    async fn list(&self, filter: &ItineraryDayFilter) -> Result<Vec<ItineraryDay>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM itinerary_days
             WHERE ($1::BIGINT IS NULL OR itinerary_id = $1)
             ORDER BY day_number, id"
        );
        let rows = sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(filter.itinerary_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<ItineraryDay>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM itinerary_days WHERE id = $1");
        let row = sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateItineraryDay) -> Result<ItineraryDay, StoreError> {
        let day = ItineraryDay::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO itinerary_days (itinerary_id, day_number, title, description,
                 activities, accommodation, meals, transportation, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(day.itinerary_id)
            .bind(day.day_number)
            .bind(&day.title)
            .bind(&day.description)
            .bind(&day.activities)
            .bind(&day.accommodation)
            .bind(&day.meals)
            .bind(&day.transportation)
            .bind(&day.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: DbId,
        patch: UpdateItineraryDay,
    ) -> Result<Option<ItineraryDay>, StoreError> {
        let query = format!(
            "UPDATE itinerary_days SET
                day_number = COALESCE($2, day_number),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                activities = COALESCE($5, activities),
                accommodation = COALESCE($6, accommodation),
                meals = COALESCE($7, meals),
                transportation = COALESCE($8, transportation),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(id)
            .bind(patch.day_number)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(&patch.activities)
            .bind(&patch.accommodation)
            .bind(&patch.meals)
            .bind(&patch.transportation)
            .bind(&patch.notes)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl Removable<ItineraryDay> for PgStore {
    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM itinerary_days WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
