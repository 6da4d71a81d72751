//! Tours, testimonials and blog posts: the public catalog and its admin edits.

use serde_json::Value;
use tourdesk_core::types::DbId;
use tourdesk_db::models::blog_post::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};
use tourdesk_db::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialFilter, UpdateTestimonial,
};
use tourdesk_db::models::tour::{CreateTour, Tour, TourFilter, UpdateTour};
use tourdesk_db::Storage;

use super::{create_input, fetch, not_found, patch_existing, patch_input};
use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Tours
// ---------------------------------------------------------------------------

pub async fn list_tours(store: &dyn Storage, filter: &TourFilter) -> AppResult<Vec<Tour>> {
    Ok(store.tours().list(filter).await?)
}

pub async fn get_tour(store: &dyn Storage, id: DbId) -> AppResult<Tour> {
    fetch(store.tours(), id).await
}

pub async fn create_tour(store: &dyn Storage, raw: Value) -> AppResult<Tour> {
    let input: CreateTour = create_input(raw)?;
    let tour = store.tours().create(input).await?;
    tracing::info!(tour_id = tour.id, name = %tour.name, "Tour created");
    Ok(tour)
}

/// Partial update; `isActive: false` takes the tour out of the public list.
pub async fn update_tour(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<Tour> {
    let patch: UpdateTour = patch_input(raw)?;
    let tour: Tour = patch_existing(store.tours(), id, patch).await?;
    tracing::info!(tour_id = id, is_active = tour.is_active, "Tour updated");
    Ok(tour)
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

pub async fn list_testimonials(
    store: &dyn Storage,
    filter: &TestimonialFilter,
) -> AppResult<Vec<Testimonial>> {
    Ok(store.testimonials().list(filter).await?)
}

pub async fn create_testimonial(store: &dyn Storage, raw: Value) -> AppResult<Testimonial> {
    let input: CreateTestimonial = create_input(raw)?;
    let testimonial = store.testimonials().create(input).await?;
    tracing::info!(testimonial_id = testimonial.id, "Testimonial created");
    Ok(testimonial)
}

pub async fn update_testimonial(
    store: &dyn Storage,
    id: DbId,
    raw: Value,
) -> AppResult<Testimonial> {
    let patch: UpdateTestimonial = patch_input(raw)?;
    let testimonial: Testimonial = patch_existing(store.testimonials(), id, patch).await?;
    tracing::info!(testimonial_id = id, "Testimonial updated");
    Ok(testimonial)
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

pub async fn list_posts(store: &dyn Storage, filter: &BlogPostFilter) -> AppResult<Vec<BlogPost>> {
    Ok(store.blog_posts().list(filter).await?)
}

/// Unpublished posts are reported as missing unless `include_unpublished`.
pub async fn get_post(
    store: &dyn Storage,
    id: DbId,
    include_unpublished: bool,
) -> AppResult<BlogPost> {
    let post: BlogPost = fetch(store.blog_posts(), id).await?;
    if !post.is_published && !include_unpublished {
        return Err(not_found::<BlogPost>(id));
    }
    Ok(post)
}

pub async fn create_post(store: &dyn Storage, raw: Value) -> AppResult<BlogPost> {
    let input: CreateBlogPost = create_input(raw)?;
    let post = store.blog_posts().create(input).await?;
    tracing::info!(post_id = post.id, title = %post.title, "Blog post created");
    Ok(post)
}

pub async fn update_post(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<BlogPost> {
    let patch: UpdateBlogPost = patch_input(raw)?;
    let post: BlogPost = patch_existing(store.blog_posts(), id, patch).await?;
    tracing::info!(post_id = id, is_published = post.is_published, "Blog post updated");
    Ok(post)
}
