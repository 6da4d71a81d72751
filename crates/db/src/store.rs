//! Backing-agnostic repository contracts.

use async_trait::async_trait;
use tourdesk_core::types::{DbId, Timestamp};

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

/// A stored entity together with its creation, patch and filter types.
///
/// `from_create` is the one place creation defaults are applied, and both
/// backings go through it so they fill records identically.
pub trait Record: Clone + Send + Sync + 'static {
    type Create: Send + 'static;
    type Patch: Send + 'static;
    type Filter: Send + Sync + 'static;

    /// Entity name used in log lines and not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    /// Build a full record from validated input: assigns `id`, fills
    /// defaults, sets the initial status and any creation timestamp.
    fn from_create(id: DbId, input: Self::Create, now: Timestamp) -> Self;

    /// Merge the present fields of `patch` into this record.
    fn apply_patch(&mut self, patch: Self::Patch);

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Order a filtered listing. Defaults to insertion (id) order.
    fn sort(_rows: &mut [Self]) {}
}

/// Uniform CRUD contract for one entity.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Records matching `filter`, in insertion order unless the entity
    /// defines its own.
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError>;

    async fn get(&self, id: DbId) -> Result<Option<R>, StoreError>;

    async fn create(&self, input: R::Create) -> Result<R, StoreError>;

    /// Merge `patch` into record `id`. `None` when no such record exists.
    async fn update(&self, id: DbId, patch: R::Patch) -> Result<Option<R>, StoreError>;
}

/// Hard deletion, offered only for entities that may be removed.
#[async_trait]
pub trait Removable<R: Record>: Repository<R> {
    /// Returns whether a record existed and was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Every table the service uses, behind one object-safe handle.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backing name for health output and logs.
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StoreError>;

    fn tours(&self) -> &dyn Repository<Tour>;
    fn bookings(&self) -> &dyn Repository<Booking>;
    fn inquiries(&self) -> &dyn Repository<Inquiry>;
    fn testimonials(&self) -> &dyn Repository<Testimonial>;
    fn blog_posts(&self) -> &dyn Repository<BlogPost>;
    fn guides(&self) -> &dyn Repository<Guide>;
    fn itineraries(&self) -> &dyn Removable<Itinerary>;
    fn itinerary_days(&self) -> &dyn Removable<ItineraryDay>;
    fn custom_tour_requests(&self) -> &dyn Repository<CustomTourRequest>;
}
