//! Request orchestration between the HTTP surface and storage.
//!
//! Each submodule exposes free async functions that validate raw input,
//! consult the lifecycle rules and call the repositories. Handlers stay thin:
//! they extract parameters, call one service function and pick a status code.

pub mod booking;
pub mod catalog;
pub mod custom_tour;
pub mod guide;
pub mod inquiry;
pub mod itinerary;

use serde_json::Value;
use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_core::validation::{parse_create, parse_patch, InputSchema};
use tourdesk_db::{Record, Repository};

use crate::error::{AppError, AppResult};

/// Validate a creation body into its typed DTO.
pub(crate) fn create_input<T: InputSchema>(raw: Value) -> AppResult<T> {
    parse_create(raw).map_err(|errors| AppError::Core(CoreError::Validation(errors)))
}

/// Validate a partial-update body into its typed patch.
pub(crate) fn patch_input<T: InputSchema>(raw: Value) -> AppResult<T> {
    parse_patch(raw).map_err(|errors| AppError::Core(CoreError::Validation(errors)))
}

pub(crate) fn not_found<R: Record>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::ENTITY,
        id,
    })
}

/// Load record `id` or fail with 404.
pub(crate) async fn fetch<R, Repo>(repo: &Repo, id: DbId) -> AppResult<R>
where
    R: Record,
    Repo: Repository<R> + ?Sized,
{
    repo.get(id).await?.ok_or_else(|| not_found::<R>(id))
}

/// Apply `patch` to record `id` or fail with 404.
pub(crate) async fn patch_existing<R, Repo>(repo: &Repo, id: DbId, patch: R::Patch) -> AppResult<R>
where
    R: Record,
    Repo: Repository<R> + ?Sized,
{
    repo.update(id, patch).await?.ok_or_else(|| not_found::<R>(id))
}
