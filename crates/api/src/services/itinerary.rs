//! Itinerary scheduling, staffing and the day-by-day plan.
//!
//! Staffing an itinerary marks each referenced guide `assigned`. That write
//! is separate from the itinerary write and best-effort: a failure is logged
//! and never undoes the itinerary change.

use serde_json::Value;
use tourdesk_core::error::CoreError;
use tourdesk_core::lifecycle::guide;
use tourdesk_core::types::DbId;
use tourdesk_db::models::itinerary::{CreateItinerary, Itinerary, UpdateItinerary};
use tourdesk_db::models::itinerary_day::{
    CreateItineraryDay, ItineraryDay, ItineraryDayFilter, UpdateItineraryDay,
};
use tourdesk_db::models::status::StatusUpdate;
use tourdesk_db::{Record, Storage};

use super::{create_input, fetch, not_found, patch_existing, patch_input};
use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Itineraries
// ---------------------------------------------------------------------------

/// Schedule an itinerary for an existing tour, then mark its guide and
/// driver as assigned.
pub async fn create(store: &dyn Storage, raw: Value) -> AppResult<Itinerary> {
    let input: CreateItinerary = create_input(raw)?;

    if store.tours().get(input.tour_id).await?.is_none() {
        return Err(CoreError::invalid(
            "tourId",
            format!("Tour {} does not exist", input.tour_id),
        )
        .into());
    }
    check_staff(store, [("guideId", input.guide_id), ("driverId", input.driver_id)]).await?;

    let itinerary = store.itineraries().create(input).await?;
    tracing::info!(
        itinerary_id = itinerary.id,
        tour_id = itinerary.tour_id,
        "Itinerary created",
    );

    assign_staff(store, itinerary.id, itinerary.staff()).await;
    Ok(itinerary)
}

pub async fn list(store: &dyn Storage) -> AppResult<Vec<Itinerary>> {
    Ok(store.itineraries().list(&()).await?)
}

pub async fn get(store: &dyn Storage, id: DbId) -> AppResult<Itinerary> {
    fetch(store.itineraries(), id).await
}

/// An itinerary and its days, ordered by day number.
pub async fn get_with_days(
    store: &dyn Storage,
    id: DbId,
) -> AppResult<(Itinerary, Vec<ItineraryDay>)> {
    let itinerary = fetch(store.itineraries(), id).await?;
    let days = store
        .itinerary_days()
        .list(&ItineraryDayFilter::for_itinerary(id))
        .await?;
    Ok((itinerary, days))
}

/// Partial update. Date and capacity invariants are checked against the
/// merged record before anything is written; newly referenced staff are
/// marked assigned afterwards.
pub async fn update(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<Itinerary> {
    let patch: UpdateItinerary = patch_input(raw)?;
    let current: Itinerary = fetch(store.itineraries(), id).await?;

    let mut merged = current.clone();
    merged.apply_patch(patch.clone());
    let errors = merged.invariant_errors();
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    let new_staff = [("guideId", patch.guide_id), ("driverId", patch.driver_id)];
    check_staff(store, new_staff).await?;

    let itinerary: Itinerary = patch_existing(store.itineraries(), id, patch).await?;
    tracing::info!(itinerary_id = id, status = %itinerary.status, "Itinerary updated");

    assign_staff(
        store,
        id,
        new_staff
            .into_iter()
            .filter_map(|(field, guide_id)| guide_id.map(|guide_id| (field, guide_id))),
    )
    .await;
    Ok(itinerary)
}

/// Delete an itinerary together with its days.
pub async fn delete(store: &dyn Storage, id: DbId) -> AppResult<()> {
    fetch::<Itinerary, _>(store.itineraries(), id).await?;

    let days = store
        .itinerary_days()
        .list(&ItineraryDayFilter::for_itinerary(id))
        .await?;
    for day in &days {
        store.itinerary_days().delete(day.id).await?;
    }

    if !store.itineraries().delete(id).await? {
        return Err(not_found::<Itinerary>(id));
    }
    tracing::info!(itinerary_id = id, days_removed = days.len(), "Itinerary deleted");
    Ok(())
}

/// Every referenced guide must exist and not be blacklisted.
async fn check_staff(
    store: &dyn Storage,
    staff: [(&'static str, Option<DbId>); 2],
) -> AppResult<()> {
    for (field, guide_id) in staff {
        let Some(guide_id) = guide_id else { continue };
        match store.guides().get(guide_id).await? {
            None => {
                return Err(
                    CoreError::invalid(field, format!("Guide {guide_id} does not exist")).into(),
                )
            }
            Some(g) => guide::validate_assignable(field, guide_id, &g.status)?,
        }
    }
    Ok(())
}

/// Mark each referenced guide `assigned`. Failures are logged only.
async fn assign_staff(
    store: &dyn Storage,
    itinerary_id: DbId,
    staff: impl Iterator<Item = (&'static str, DbId)>,
) {
    for (field, guide_id) in staff {
        let update = StatusUpdate {
            status: guide::STATUS_ASSIGNED.to_string(),
        };
        match store.guides().update(guide_id, update).await {
            Ok(Some(_)) => {
                tracing::debug!(itinerary_id, guide_id, field, "Guide marked assigned");
            }
            Ok(None) => {
                tracing::warn!(
                    itinerary_id,
                    guide_id,
                    field,
                    "Guide vanished before it could be marked assigned",
                );
            }
            Err(e) => {
                tracing::warn!(
                    itinerary_id,
                    guide_id,
                    field,
                    error = %e,
                    "Failed to mark guide assigned",
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Itinerary days
// ---------------------------------------------------------------------------

pub async fn list_days(store: &dyn Storage, itinerary_id: DbId) -> AppResult<Vec<ItineraryDay>> {
    fetch::<Itinerary, _>(store.itineraries(), itinerary_id).await?;
    Ok(store
        .itinerary_days()
        .list(&ItineraryDayFilter::for_itinerary(itinerary_id))
        .await?)
}

/// Add a day to itinerary `itinerary_id`. The path id wins over any
/// `itineraryId` in the body.
pub async fn create_day(
    store: &dyn Storage,
    itinerary_id: DbId,
    mut raw: Value,
) -> AppResult<ItineraryDay> {
    fetch::<Itinerary, _>(store.itineraries(), itinerary_id).await?;

    if let Value::Object(map) = &mut raw {
        map.insert("itineraryId".to_string(), Value::from(itinerary_id));
    }
    let input: CreateItineraryDay = create_input(raw)?;
    ensure_day_free(store, itinerary_id, input.day_number, None).await?;

    let day = store.itinerary_days().create(input).await?;
    tracing::info!(
        itinerary_id,
        day_id = day.id,
        day_number = day.day_number,
        "Itinerary day added",
    );
    Ok(day)
}

pub async fn update_day(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<ItineraryDay> {
    let patch: UpdateItineraryDay = patch_input(raw)?;
    let current: ItineraryDay = fetch(store.itinerary_days(), id).await?;

    if let Some(day_number) = patch.day_number {
        ensure_day_free(store, current.itinerary_id, day_number, Some(id)).await?;
    }

    let day: ItineraryDay = patch_existing(store.itinerary_days(), id, patch).await?;
    tracing::info!(day_id = id, day_number = day.day_number, "Itinerary day updated");
    Ok(day)
}

pub async fn delete_day(store: &dyn Storage, id: DbId) -> AppResult<()> {
    if !store.itinerary_days().delete(id).await? {
        return Err(not_found::<ItineraryDay>(id));
    }
    tracing::info!(day_id = id, "Itinerary day deleted");
    Ok(())
}

/// Day numbers are unique within an itinerary. `except` skips the day
/// being renumbered.
async fn ensure_day_free(
    store: &dyn Storage,
    itinerary_id: DbId,
    day_number: i32,
    except: Option<DbId>,
) -> AppResult<()> {
    let taken = store
        .itinerary_days()
        .list(&ItineraryDayFilter::for_itinerary(itinerary_id))
        .await?
        .into_iter()
        .any(|d| d.day_number == day_number && Some(d.id) != except);
    if taken {
        return Err(CoreError::Conflict(format!(
            "Itinerary {itinerary_id} already has a day {day_number}"
        ))
        .into());
    }
    Ok(())
}
