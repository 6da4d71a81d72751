//! Repository for the `itineraries` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::itinerary::{CreateItinerary, Itinerary, UpdateItinerary};
use crate::store::{Record, Removable, Repository};

const COLUMNS: &str = "id, tour_id, name, description, start_date, end_date, guide_id, \
     driver_id, max_participants, current_participants, status, created_at";

#[async_trait]
impl Repository<Itinerary> for PgStore {
    async fn list(&self, _filter: &()) -> Result<Vec<Itinerary>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM itineraries ORDER BY id");
        let rows = sqlx::query_as::<_, Itinerary>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<Itinerary>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM itineraries WHERE id = $1");
        let row = sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateItinerary) -> Result<Itinerary, StoreError> {
        let itinerary = Itinerary::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO itineraries (tour_id, name, description, start_date, end_date,
                 guide_id, driver_id, max_participants, current_participants, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Itinerary>(&query)
            .bind(itinerary.tour_id)
            .bind(&itinerary.name)
            .bind(&itinerary.description)
            .bind(itinerary.start_date)
            .bind(itinerary.end_date)
            .bind(itinerary.guide_id)
            .bind(itinerary.driver_id)
            .bind(itinerary.max_participants)
            .bind(itinerary.current_participants)
            .bind(&itinerary.status)
            .bind(itinerary.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: DbId,
        patch: UpdateItinerary,
    ) -> Result<Option<Itinerary>, StoreError> {
        let query = format!(
            "UPDATE itineraries SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                guide_id = COALESCE($6, guide_id),
                driver_id = COALESCE($7, driver_id),
                max_participants = COALESCE($8, max_participants),
                current_participants = COALESCE($9, current_participants),
                status = COALESCE($10, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(patch.start_date)
            .bind(patch.end_date)
            .bind(patch.guide_id)
            .bind(patch.driver_id)
            .bind(patch.max_participants)
            .bind(patch.current_participants)
            .bind(&patch.status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl Removable<Itinerary> for PgStore {
    /// Days go with it through `ON DELETE CASCADE`.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
