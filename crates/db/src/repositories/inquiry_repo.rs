//! Repository for the `inquiries` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::inquiry::{CreateInquiry, Inquiry};
use crate::models::status::StatusUpdate;
use crate::store::{Record, Repository};

const COLUMNS: &str = "id, first_name, last_name, email, phone, tour_interest, \
     preferred_dates, group_size, message, status, created_at";

#[async_trait]
impl Repository<Inquiry> for PgStore {
    async fn list(&self, _filter: &()) -> Result<Vec<Inquiry>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM inquiries ORDER BY id");
        let rows = sqlx::query_as::<_, Inquiry>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<Inquiry>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        let row = sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateInquiry) -> Result<Inquiry, StoreError> {
        let inquiry = Inquiry::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO inquiries (first_name, last_name, email, phone, tour_interest,
                 preferred_dates, group_size, message, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Inquiry>(&query)
            .bind(&inquiry.first_name)
            .bind(&inquiry.last_name)
            .bind(&inquiry.email)
            .bind(&inquiry.phone)
            .bind(&inquiry.tour_interest)
            .bind(&inquiry.preferred_dates)
            .bind(&inquiry.group_size)
            .bind(&inquiry.message)
            .bind(&inquiry.status)
            .bind(inquiry.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, patch: StatusUpdate) -> Result<Option<Inquiry>, StoreError> {
        let query = format!("UPDATE inquiries SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .bind(&patch.status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
