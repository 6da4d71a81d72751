//! Repository for the `blog_posts` table.

use async_trait::async_trait;
use chrono::Utc;
use tourdesk_core::types::DbId;

use super::PgStore;
use crate::error::StoreError;
use crate::models::blog_post::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};
use crate::store::{Record, Repository};

const COLUMNS: &str = "id, title, excerpt, content, image_url, category, author, \
     author_image, read_time, published_at, is_published";

#[async_trait]
impl Repository<BlogPost> for PgStore {
    async fn list(&self, filter: &BlogPostFilter) -> Result<Vec<BlogPost>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE $1 OR is_published ORDER BY id");
        let rows = sqlx::query_as::<_, BlogPost>(&query)
            .bind(filter.include_unpublished)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: DbId) -> Result<Option<BlogPost>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        let row = sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: CreateBlogPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost::from_create(0, input, Utc::now());
        let query = format!(
            "INSERT INTO blog_posts (title, excerpt, content, image_url, category, author,
                 author_image, read_time, published_at, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogPost>(&query)
            .bind(&post.title)
            .bind(&post.excerpt)
            .bind(&post.content)
            .bind(&post.image_url)
            .bind(&post.category)
            .bind(&post.author)
            .bind(&post.author_image)
            .bind(&post.read_time)
            .bind(post.published_at)
            .bind(post.is_published)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, patch: UpdateBlogPost) -> Result<Option<BlogPost>, StoreError> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                excerpt = COALESCE($3, excerpt),
                content = COALESCE($4, content),
                image_url = COALESCE($5, image_url),
                category = COALESCE($6, category),
                author = COALESCE($7, author),
                author_image = COALESCE($8, author_image),
                read_time = COALESCE($9, read_time),
                is_published = COALESCE($10, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.excerpt)
            .bind(&patch.content)
            .bind(&patch.image_url)
            .bind(&patch.category)
            .bind(&patch.author)
            .bind(&patch.author_image)
            .bind(&patch.read_time)
            .bind(patch.is_published)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
