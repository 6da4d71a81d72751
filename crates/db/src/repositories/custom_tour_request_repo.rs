//! Repository for the `custom_tour_requests` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::custom_tour_request::{
    CreateCustomTourRequest, CustomTourRequest, UpdateCustomTourRequest,
};
use crate::store::{Record, Repository};

const COLUMNS: &str = "id, first_name, last_name, email, phone, duration, group_size, budget, \
     interests, preferred_dates, special_requirements, destinations, accommodation_type, \
     transport_preference, status, admin_notes, estimated_price, assigned_itinerary_id, created_at";

#[async_trait]
impl Repository<CustomTourRequest> for PgStore {
    async fn list(&self, _filter: &()) -> Result<Vec<CustomTourRequest>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM custom_tour_requests ORDER BY id");
        let rows = sqlx::query_as::<_, CustomTourRequest>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<CustomTourRequest>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM custom_tour_requests WHERE id = $1");
        let row = sqlx::query_as::<_, CustomTourRequest>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateCustomTourRequest) -> Result<CustomTourRequest, StoreError> {
        let request = CustomTourRequest::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO custom_tour_requests (first_name, last_name, email, phone, duration,
                 group_size, budget, interests, preferred_dates, special_requirements,
                 destinations, accommodation_type, transport_preference, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomTourRequest>(&query)
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(&request.email)
            .bind(&request.phone)
            .bind(request.duration)
            .bind(request.group_size)
            .bind(request.budget)
            .bind(&request.interests)
            .bind(&request.preferred_dates)
            .bind(&request.special_requirements)
            .bind(&request.destinations)
            .bind(&request.accommodation_type)
            .bind(&request.transport_preference)
            .bind(&request.status)
            .bind(request.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: DbId,
        patch: UpdateCustomTourRequest,
    ) -> Result<Option<CustomTourRequest>, StoreError> {
        let query = format!(
            "UPDATE custom_tour_requests SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                duration = COALESCE($6, duration),
                group_size = COALESCE($7, group_size),
                budget = COALESCE($8, budget),
                interests = COALESCE($9, interests),
                preferred_dates = COALESCE($10, preferred_dates),
                special_requirements = COALESCE($11, special_requirements),
                destinations = COALESCE($12, destinations),
                accommodation_type = COALESCE($13, accommodation_type),
                transport_preference = COALESCE($14, transport_preference),
                status = COALESCE($15, status),
                admin_notes = COALESCE($16, admin_notes),
                estimated_price = COALESCE($17, estimated_price),
                assigned_itinerary_id = COALESCE($18, assigned_itinerary_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CustomTourRequest>(&query)
            .bind(id)
            .bind(&patch.first_name)
            .bind(&patch.last_name)
            .bind(&patch.email)
            .bind(&patch.phone)
            .bind(patch.duration)
            .bind(patch.group_size)
            .bind(patch.budget)
            .bind(&patch.interests)
            .bind(&patch.preferred_dates)
            .bind(&patch.special_requirements)
            .bind(&patch.destinations)
            .bind(&patch.accommodation_type)
            .bind(&patch.transport_preference)
            .bind(&patch.status)
            .bind(&patch.admin_notes)
            .bind(patch.estimated_price)
            .bind(patch.assigned_itinerary_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
