//! Repository for the `testimonials` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialFilter, UpdateTestimonial,
};
use crate::store::{Record, Repository};

const COLUMNS: &str =
    "id, name, country, image_url, text, rating, trip_name, duration, is_active";

#[async_trait]
impl Repository<Testimonial> for PgStore {
    async fn list(&self, filter: &TestimonialFilter) -> Result<Vec<Testimonial>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE $1 OR is_active ORDER BY id");
        let rows = sqlx::query_as::<_, Testimonial>(&query)
            .bind(filter.include_inactive)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<Testimonial>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        let row = sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateTestimonial) -> Result<Testimonial, StoreError> {
        let testimonial = Testimonial::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO testimonials (name, country, image_url, text, rating, trip_name,
                 duration, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Testimonial>(&query)
            .bind(&testimonial.name)
            .bind(&testimonial.country)
            .bind(&testimonial.image_url)
            .bind(&testimonial.text)
            .bind(testimonial.rating)
            .bind(&testimonial.trip_name)
            .bind(&testimonial.duration)
            .bind(testimonial.is_active)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: DbId,
        patch: UpdateTestimonial,
    ) -> Result<Option<Testimonial>, StoreError> {
        let query = format!(
            "UPDATE testimonials SET
                name = COALESCE($2, name),
                country = COALESCE($3, country),
                image_url = COALESCE($4, image_url),
                text = COALESCE($5, text),
                rating = COALESCE($6, rating),
                trip_name = COALESCE($7, trip_name),
                duration = COALESCE($8, duration),
                is_active = COALESCE($9, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.country)
            .bind(&patch.image_url)
            .bind(&patch.text)
            .bind(patch.rating)
            .bind(&patch.trip_name)
            .bind(&patch.duration)
            .bind(patch.is_active)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
