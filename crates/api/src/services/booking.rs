//! Booking submission and review.

use serde_json::Value;
use tourdesk_core::error::CoreError;
use tourdesk_core::lifecycle::booking;
use tourdesk_core::types::DbId;
use tourdesk_db::models::booking::{Booking, CreateBooking};
use tourdesk_db::models::status::StatusUpdate;
use tourdesk_db::Storage;

use super::{create_input, fetch, patch_existing};
use crate::error::AppResult;

/// Submit a booking. The referenced tour must exist; the booking starts
/// `pending`.
pub async fn create(store: &dyn Storage, raw: Value) -> AppResult<Booking> {
    let input: CreateBooking = create_input(raw)?;

    if store.tours().get(input.tour_id).await?.is_none() {
        return Err(CoreError::invalid(
            "tourId",
            format!("Tour {} does not exist", input.tour_id),
        )
        .into());
    }

    let booking = store.bookings().create(input).await?;
    tracing::info!(
        booking_id = booking.id,
        tour_id = booking.tour_id,
        group_size = booking.group_size,
        "Booking created",
    );
    Ok(booking)
}

pub async fn list(store: &dyn Storage) -> AppResult<Vec<Booking>> {
    Ok(store.bookings().list(&()).await?)
}

pub async fn get(store: &dyn Storage, id: DbId) -> AppResult<Booking> {
    fetch(store.bookings(), id).await
}

/// Move a booking to a new status. Unknown statuses are 400, disallowed
/// transitions 409; either way the stored booking is untouched.
pub async fn update_status(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<Booking> {
    let update: StatusUpdate = create_input(raw)?;
    booking::validate_status(&update.status)?;

    let current: Booking = fetch(store.bookings(), id).await?;
    booking::validate_transition(&current.status, &update.status)?;

    let from = current.status;
    let booking: Booking = patch_existing(store.bookings(), id, update).await?;
    tracing::info!(booking_id = id, from = %from, to = %booking.status, "Booking status changed");
    Ok(booking)
}
