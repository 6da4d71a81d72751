//! Blog articles.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::merge_patch;
use crate::store::Record;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    pub author_image: String,
    /// Display text such as "5 min read".
    pub read_time: String,
    pub published_at: Timestamp,
    pub is_published: bool,
}

/// DTO for a new post. `publishedAt` is set by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    pub author_image: String,
    pub read_time: String,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub author_image: Option<String>,
    pub read_time: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    /// Also return drafts (`isPublished = false`).
    pub include_unpublished: bool,
}

const BLOG_POST_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", FieldKind::Text),
    FieldSpec::required("excerpt", FieldKind::Text),
    FieldSpec::required("content", FieldKind::Text),
    FieldSpec::required("imageUrl", FieldKind::Text),
    FieldSpec::required("category", FieldKind::Text),
    FieldSpec::required("author", FieldKind::Text),
    FieldSpec::required("authorImage", FieldKind::Text),
    FieldSpec::required("readTime", FieldKind::Text),
    FieldSpec::optional("isPublished", FieldKind::Boolean),
];

impl InputSchema for CreateBlogPost {
    const FIELDS: &'static [FieldSpec] = BLOG_POST_FIELDS;
}

impl InputSchema for UpdateBlogPost {
    const FIELDS: &'static [FieldSpec] = BLOG_POST_FIELDS;
    const IMMUTABLE: &'static [&'static str] = &["id", "publishedAt"];
}

impl Record for BlogPost {
    type Create = CreateBlogPost;
    type Patch = UpdateBlogPost;
    type Filter = BlogPostFilter;

    const ENTITY: &'static str = "blog post";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateBlogPost, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            image_url: input.image_url,
            category: input.category,
            author: input.author,
            author_image: input.author_image,
            read_time: input.read_time,
            published_at: now,
            is_published: input.is_published.unwrap_or(true),
        }
    }

    fn apply_patch(&mut self, patch: UpdateBlogPost) {
        merge_patch!(self, patch;
            title, excerpt, content, image_url, category, author, author_image, read_time,
            is_published);
    }

    fn matches(&self, filter: &BlogPostFilter) -> bool {
        filter.include_unpublished || self.is_published
    }
}
