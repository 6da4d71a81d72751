//! Guide and driver registration and roster status.

use serde_json::Value;
use tourdesk_core::lifecycle::guide;
use tourdesk_core::types::DbId;
use tourdesk_db::models::guide::{CreateGuide, Guide, GuideFilter, RegisterGuide};
use tourdesk_db::models::status::StatusUpdate;
use tourdesk_db::Storage;

use super::{create_input, fetch, patch_existing};
use crate::error::AppResult;

/// Confirmation shown to applicants after registering.
pub const REGISTRATION_MESSAGE: &str =
    "Registration successful! We will call and inform you if we require your services.";

/// Register a guide or driver from the public form. The confirmation
/// email is checked and dropped; the guide starts `not_assigned`.
pub async fn register(store: &dyn Storage, raw: Value) -> AppResult<Guide> {
    let form: RegisterGuide = create_input(raw)?;
    let guide = store.guides().create(CreateGuide::from(form)).await?;
    tracing::info!(
        guide_id = guide.id,
        registration_type = %guide.registration_type,
        "Guide registered",
    );
    Ok(guide)
}

pub async fn list(store: &dyn Storage, filter: &GuideFilter) -> AppResult<Vec<Guide>> {
    Ok(store.guides().list(filter).await?)
}

pub async fn get(store: &dyn Storage, id: DbId) -> AppResult<Guide> {
    fetch(store.guides(), id).await
}

/// Set a guide's roster status. Values outside the status set are 400 and
/// leave the stored guide untouched.
pub async fn update_status(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<Guide> {
    let update: StatusUpdate = create_input(raw)?;
    guide::validate_status(&update.status)?;

    let guide: Guide = patch_existing(store.guides(), id, update).await?;
    tracing::info!(guide_id = id, status = %guide.status, "Guide status changed");
    Ok(guide)
}
