//! Custom tour requests: public submission and admin handling.

use serde_json::Value;
use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_db::models::custom_tour_request::{
    CreateCustomTourRequest, CustomTourRequest, UpdateCustomTourRequest,
};
use tourdesk_db::Storage;

use super::{create_input, fetch, patch_existing, patch_input};
use crate::error::AppResult;

pub async fn create(store: &dyn Storage, raw: Value) -> AppResult<CustomTourRequest> {
    let input: CreateCustomTourRequest = create_input(raw)?;
    let request = store.custom_tour_requests().create(input).await?;
    tracing::info!(
        request_id = request.id,
        duration = request.duration,
        group_size = request.group_size,
        "Custom tour request received",
    );
    Ok(request)
}

pub async fn list(store: &dyn Storage) -> AppResult<Vec<CustomTourRequest>> {
    Ok(store.custom_tour_requests().list(&()).await?)
}

pub async fn get(store: &dyn Storage, id: DbId) -> AppResult<CustomTourRequest> {
    fetch(store.custom_tour_requests(), id).await
}

/// Admin edit. A given `assignedItineraryId` must name an existing itinerary.
pub async fn update(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<CustomTourRequest> {
    let patch: UpdateCustomTourRequest = patch_input(raw)?;
    fetch::<CustomTourRequest, _>(store.custom_tour_requests(), id).await?;

    if let Some(itinerary_id) = patch.assigned_itinerary_id {
        if store.itineraries().get(itinerary_id).await?.is_none() {
            return Err(CoreError::invalid(
                "assignedItineraryId",
                format!("Itinerary {itinerary_id} does not exist"),
            )
            .into());
        }
    }

    let request: CustomTourRequest =
        patch_existing(store.custom_tour_requests(), id, patch).await?;
    tracing::info!(
        request_id = id,
        status = %request.status,
        assigned_itinerary_id = ?request.assigned_itinerary_id,
        "Custom tour request updated",
    );
    Ok(request)
}
