//! Repository for the `tours` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::tour::{CreateTour, Tour, TourFilter, UpdateTour};
use crate::store::{Record, Repository};

/// Column list shared across queries. `rating` is `NUMERIC(2,1)` and is
/// read back as its text form.
const COLUMNS: &str = "id, name, description, duration, price, category, image_url, \
     rating::TEXT AS rating, review_count, highlights, is_active, max_group_size, difficulty, \
     best_season, includes, excludes";

#[async_trait]
impl Repository<Tour> for PgStore {
    /// List tours in insertion order, active only unless the filter asks
    /// for everything.
    async fn list(&self, filter: &TourFilter) -> Result<Vec<Tour>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM tours
             WHERE ($1 OR is_active) AND ($2::TEXT IS NULL OR category = $2)
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, Tour>(&query)
            .bind(filter.include_inactive)
            .bind(&filter.category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<Tour>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM tours WHERE id = $1");
        let row = sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateTour) -> Result<Tour, StoreError> {
        let tour = Tour::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO tours (name, description, duration, price, category, image_url, rating,
                 review_count, highlights, is_active, max_group_size, difficulty, best_season,
                 includes, excludes)
             VALUES ($1, $2, $3, $4, $5, $6, $7::NUMERIC, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Tour>(&query)
            .bind(&tour.name)
            .bind(&tour.description)
            .bind(tour.duration)
            .bind(tour.price)
            .bind(&tour.category)
            .bind(&tour.image_url)
            .bind(&tour.rating)
            .bind(tour.review_count)
            .bind(&tour.highlights)
            .bind(tour.is_active)
            .bind(tour.max_group_size)
            .bind(&tour.difficulty)
            .bind(&tour.best_season)
            .bind(&tour.includes)
            .bind(&tour.excludes)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Only non-`None` fields in `patch` are applied.
    async fn update(&self, id: DbId, patch: UpdateTour) -> Result<Option<Tour>, StoreError> {
        let query = format!(
            "UPDATE tours SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                duration = COALESCE($4, duration),
                price = COALESCE($5, price),
                category = COALESCE($6, category),
                image_url = COALESCE($7, image_url),
                rating = COALESCE($8::NUMERIC, rating),
                review_count = COALESCE($9, review_count),
                highlights = COALESCE($10, highlights),
                is_active = COALESCE($11, is_active),
                max_group_size = COALESCE($12, max_group_size),
                difficulty = COALESCE($13, difficulty),
                best_season = COALESCE($14, best_season),
                includes = COALESCE($15, includes),
                excludes = COALESCE($16, excludes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Tour>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(patch.duration)
            .bind(patch.price)
            .bind(&patch.category)
            .bind(&patch.image_url)
            .bind(&patch.rating)
            .bind(patch.review_count)
            .bind(&patch.highlights)
            .bind(patch.is_active)
            .bind(patch.max_group_size)
            .bind(&patch.difficulty)
            .bind(&patch.best_season)
            .bind(&patch.includes)
            .bind(&patch.excludes)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
