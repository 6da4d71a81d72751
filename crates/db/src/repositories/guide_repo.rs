//! Repository for the `guides` table.
//!
//! Email addresses are unique here (`uq_guides_email`); a duplicate
//! registration fails with a unique violation.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::guide::{CreateGuide, Guide, GuideFilter};
use crate::models::status::StatusUpdate;
use crate::store::{Record, Repository};

const COLUMNS: &str =
    "id, name, email, phone, license_image_url, registration_type, status, created_at";

#[async_trait]
impl Repository<Guide> for PgStore {
    async fn list(&self, filter: &GuideFilter) -> Result<Vec<Guide>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM guides
             WHERE ($1::TEXT IS NULL OR registration_type = $1)
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, Guide>(&query)
            .bind(&filter.registration_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<Guide>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM guides WHERE id = $1");
        let row = sqlx::query_as::<_, Guide>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateGuide) -> Result<Guide, StoreError> {
        let guide = Guide::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO guides (name, email, phone, license_image_url, registration_type,
                 status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Guide>(&query)
            .bind(&guide.name)
            .bind(&guide.email)
            .bind(&guide.phone)
            .bind(&guide.license_image_url)
            .bind(&guide.registration_type)
            .bind(&guide.status)
            .bind(guide.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, patch: StatusUpdate) -> Result<Option<Guide>, StoreError> {
        let query = format!("UPDATE guides SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Guide>(&query)
            .bind(id)
            .bind(&patch.status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
