//! Process-local backing: one ordered map per entity.
//!
//! Ids come from a per-table atomic counter, so they stay monotonic and
//! are never reused even when tests hammer a table from many tasks.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tourdesk_core::types::DbId;

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
use crate::store::{Record, Removable, Repository, Storage};

/// One entity table. `BTreeMap` keeps rows in id (= insertion) order.
pub struct MemTable<R> {
    rows: RwLock<BTreeMap<DbId, R>>,
    last_id: AtomicI64,
}

impl<R: Record> MemTable<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> Result<DbId, StoreError> {
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|_| StoreError::SequenceExhausted(R::ENTITY))
    }
}

impl<R: Record> Default for MemTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> Repository<R> for MemTable<R> {
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError> {
        let rows = self.rows.read().await;
        let mut matched: Vec<R> = rows.values().filter(|r| r.matches(filter)).cloned().collect();
        R::sort(&mut matched);
        Ok(matched)
    }

    async fn get(&self, id: DbId) -> Result<Option<R>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, input: R::Create) -> Result<R, StoreError> {
        let id = self.next_id()?;
        let record = R::from_create(id, input, Utc::now());
        self.rows.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: DbId, patch: R::Patch) -> Result<Option<R>, StoreError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&id).map(|record| {
            record.apply_patch(patch);
            record.clone()
        }))
    }
}

#[async_trait]
impl<R: Record> Removable<R> for MemTable<R> {
    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}

/// In-memory [`Storage`]. Contents are lost when the process exits, and no
/// uniqueness constraints are enforced.
#[derive(Default)]
pub struct MemStorage {
    tours: MemTable<Tour>,
    bookings: MemTable<Booking>,
    inquiries: MemTable<Inquiry>,
    testimonials: MemTable<Testimonial>,
    blog_posts: MemTable<BlogPost>,
    guides: MemTable<Guide>,
    itineraries: MemTable<Itinerary>,
    itinerary_days: MemTable<ItineraryDay>,
    custom_tour_requests: MemTable<CustomTourRequest>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn tours(&self) -> &dyn Repository<Tour> {
        &self.tours
    }

    fn bookings(&self) -> &dyn Repository<Booking> {
        &self.bookings
    }

    fn inquiries(&self) -> &dyn Repository<Inquiry> {
        &self.inquiries
    }

    fn testimonials(&self) -> &dyn Repository<Testimonial> {
        &self.testimonials
    }

    fn blog_posts(&self) -> &dyn Repository<BlogPost> {
        &self.blog_posts
    }

    fn guides(&self) -> &dyn Repository<Guide> {
        &self.guides
    }

    fn itineraries(&self) -> &dyn Removable<Itinerary> {
        &self.itineraries
    }

    fn itinerary_days(&self) -> &dyn Removable<ItineraryDay> {
        &self.itinerary_days
    }

    fn custom_tour_requests(&self) -> &dyn Repository<CustomTourRequest> {
        &self.custom_tour_requests
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let table: MemTable<Tour> = MemTable::new();
        assert_eq!(table.next_id().unwrap(), 1);
        assert_eq!(table.next_id().unwrap(), 2);
    }

    #[test]
    fn exhausted_sequence_is_an_error() {
        let table: MemTable<Tour> = MemTable::new();
        table.last_id.store(i64::MAX, Ordering::SeqCst);
        assert_matches!(table.next_id(), Err(StoreError::SequenceExhausted("tour")));
    }
}
