//! Contact inquiries and their follow-up status.

use serde_json::Value;
use tourdesk_core::lifecycle::inquiry;
use tourdesk_core::types::DbId;
use tourdesk_db::models::inquiry::{CreateInquiry, Inquiry};
use tourdesk_db::models::status::StatusUpdate;
use tourdesk_db::Storage;

use super::{create_input, fetch, patch_existing};
use crate::error::AppResult;

pub async fn create(store: &dyn Storage, raw: Value) -> AppResult<Inquiry> {
    let input: CreateInquiry = create_input(raw)?;
    let inquiry = store.inquiries().create(input).await?;
    tracing::info!(inquiry_id = inquiry.id, "Inquiry received");
    Ok(inquiry)
}

pub async fn list(store: &dyn Storage) -> AppResult<Vec<Inquiry>> {
    Ok(store.inquiries().list(&()).await?)
}

pub async fn get(store: &dyn Storage, id: DbId) -> AppResult<Inquiry> {
    fetch(store.inquiries(), id).await
}

pub async fn update_status(store: &dyn Storage, id: DbId, raw: Value) -> AppResult<Inquiry> {
    let update: StatusUpdate = create_input(raw)?;
    inquiry::validate_status(&update.status)?;

    let inquiry: Inquiry = patch_existing(store.inquiries(), id, update).await?;
    tracing::info!(inquiry_id = id, status = %inquiry.status, "Inquiry status changed");
    Ok(inquiry)
}
