//! PostgreSQL backing.
//!
//! [`PgStore`] implements [`Repository`] once per entity, one module per
//! table. Creation defaults are filled by [`Record::from_create`] before
//! the insert, so rows match what the in-memory backing would produce.
//!
//! [`Record::from_create`]: crate::store::Record::from_create

mod blog_post_repo;
mod booking_repo;
mod custom_tour_request_repo;
mod guide_repo;
mod inquiry_repo;
mod itinerary_day_repo;
mod itinerary_repo;
mod testimonial_repo;
mod tour_repo;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::blog_post::BlogPost;
use crate::models::booking::Booking;
use crate::models::custom_tour_request::CustomTourRequest;
use crate::models::guide::Guide;
use crate::models::inquiry::Inquiry;
use crate::models::itinerary::Itinerary;
use crate::models::itinerary_day::ItineraryDay;
use crate::models::testimonial::Testimonial;
use crate::models::tour::Tour;
use crate::store::{Removable, Repository, Storage};

/// [`Storage`] over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    fn tours(&self) -> &dyn Repository<Tour> {
        self
    }

    fn bookings(&self) -> &dyn Repository<Booking> {
        self
    }

    fn inquiries(&self) -> &dyn Repository<Inquiry> {
        self
    }

    fn testimonials(&self) -> &dyn Repository<Testimonial> {
        self
    }

    fn blog_posts(&self) -> &dyn Repository<BlogPost> {
        self
    }

    fn guides(&self) -> &dyn Repository<Guide> {
        self
    }

    fn itineraries(&self) -> &dyn Removable<Itinerary> {
        self
    }

    fn itinerary_days(&self) -> &dyn Removable<ItineraryDay> {
        self
    }

    fn custom_tour_requests(&self) -> &dyn Repository<CustomTourRequest> {
        self
    }
}
