//! Registered tour guides and drivers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::error::CoreError;
use tourdesk_core::lifecycle::guide::{self, STATUS_NOT_ASSIGNED};
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldError, FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::status::StatusUpdate;
use crate::store::Record;

/// A row from the `guides` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_image_url: String,
    /// `guide` or `driver`.
    pub registration_type: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// The public registration form. Carries a confirmation email that is
/// checked and then dropped.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGuide {
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(must_match(other = "email", message = "Emails don't match"))]
    pub confirm_email: String,
    pub phone: String,
    pub license_image_url: String,
    pub registration_type: String,
}

impl InputSchema for RegisterGuide {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::required("confirmEmail", FieldKind::Text),
        FieldSpec::required("phone", FieldKind::Text),
        FieldSpec::required("licenseImageUrl", FieldKind::Text),
        FieldSpec::required("registrationType", FieldKind::Text),
    ];

    fn semantic_errors(&self) -> Vec<FieldError> {
        match guide::validate_registration_type(&self.registration_type) {
            Err(CoreError::Validation(errors)) => errors,
            _ => Vec::new(),
        }
    }
}

/// What the store needs to create a guide.
#[derive(Debug, Clone)]
pub struct CreateGuide {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_image_url: String,
    pub registration_type: String,
}

impl From<RegisterGuide> for CreateGuide {
    fn from(form: RegisterGuide) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            license_image_url: form.license_image_url,
            registration_type: form.registration_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuideFilter {
    /// `guide` or `driver`.
    pub registration_type: Option<String>,
}

impl Record for Guide {
    type Create = CreateGuide;
    type Patch = StatusUpdate;
    type Filter = GuideFilter;

    const ENTITY: &'static str = "guide";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateGuide, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            license_image_url: input.license_image_url,
            registration_type: input.registration_type,
            status: STATUS_NOT_ASSIGNED.to_string(),
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: StatusUpdate) {
        self.status = patch.status;
    }

    fn matches(&self, filter: &GuideFilter) -> bool {
        filter
            .registration_type
            .as_deref()
            .is_none_or(|t| t == self.registration_type)
    }
}
