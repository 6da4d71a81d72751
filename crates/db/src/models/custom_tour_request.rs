//! Requests for a tailor-made tour, triaged by an admin.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::error::CoreError;
use tourdesk_core::lifecycle::custom_tour::{
    self, ACCOMMODATION_TYPES, STATUS_PENDING, TRANSPORT_PREFERENCES,
};
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldError, FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::merge_patch;
use crate::store::Record;

/// A row from the `custom_tour_requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTourRequest {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Days.
    pub duration: i32,
    pub group_size: i32,
    /// USD.
    pub budget: Option<i32>,
    pub interests: Vec<String>,
    pub preferred_dates: Option<String>,
    pub special_requirements: Option<String>,
    pub destinations: Vec<String>,
    pub accommodation_type: Option<String>,
    pub transport_preference: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub estimated_price: Option<i32>,
    pub assigned_itinerary_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// The public request form. Admin-managed fields are not accepted here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomTourRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1 day"))]
    pub duration: i32,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub group_size: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub budget: Option<i32>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub preferred_dates: Option<String>,
    pub special_requirements: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    pub accommodation_type: Option<String>,
    pub transport_preference: Option<String>,
}

impl InputSchema for CreateCustomTourRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("firstName", FieldKind::Text),
        FieldSpec::required("lastName", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::optional("phone", FieldKind::Text),
        FieldSpec::required("duration", FieldKind::Integer),
        FieldSpec::required("groupSize", FieldKind::Integer),
        FieldSpec::optional("budget", FieldKind::Integer),
        FieldSpec::optional("interests", FieldKind::TextList),
        FieldSpec::optional("preferredDates", FieldKind::Text),
        FieldSpec::optional("specialRequirements", FieldKind::Text),
        FieldSpec::optional("destinations", FieldKind::TextList),
        FieldSpec::optional("accommodationType", FieldKind::Text),
        FieldSpec::optional("transportPreference", FieldKind::Text),
    ];

    fn semantic_errors(&self) -> Vec<FieldError> {
        preference_errors(
            self.accommodation_type.as_deref(),
            self.transport_preference.as_deref(),
        )
    }
}

/// Admin edit of a request: triage fields plus corrections to the form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomTourRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1 day"))]
    pub duration: Option<i32>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub group_size: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub budget: Option<i32>,
    pub interests: Option<Vec<String>>,
    pub preferred_dates: Option<String>,
    pub special_requirements: Option<String>,
    pub destinations: Option<Vec<String>>,
    pub accommodation_type: Option<String>,
    pub transport_preference: Option<String>,
    pub status: Option<String>,
    pub admin_notes: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub estimated_price: Option<i32>,
    pub assigned_itinerary_id: Option<DbId>,
}

impl InputSchema for UpdateCustomTourRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("firstName", FieldKind::Text),
        FieldSpec::required("lastName", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::optional("phone", FieldKind::Text),
        FieldSpec::required("duration", FieldKind::Integer),
        FieldSpec::required("groupSize", FieldKind::Integer),
        FieldSpec::optional("budget", FieldKind::Integer),
        FieldSpec::optional("interests", FieldKind::TextList),
        FieldSpec::optional("preferredDates", FieldKind::Text),
        FieldSpec::optional("specialRequirements", FieldKind::Text),
        FieldSpec::optional("destinations", FieldKind::TextList),
        FieldSpec::optional("accommodationType", FieldKind::Text),
        FieldSpec::optional("transportPreference", FieldKind::Text),
        FieldSpec::required("status", FieldKind::Text),
        FieldSpec::optional("adminNotes", FieldKind::Text),
        FieldSpec::optional("estimatedPrice", FieldKind::Integer),
        FieldSpec::optional("assignedItineraryId", FieldKind::Id),
    ];
    const IMMUTABLE: &'static [&'static str] = &["id", "createdAt"];

    fn semantic_errors(&self) -> Vec<FieldError> {
        let mut errors = preference_errors(
            self.accommodation_type.as_deref(),
            self.transport_preference.as_deref(),
        );
        if let Some(Err(CoreError::Validation(status_errors))) =
            self.status.as_deref().map(custom_tour::validate_status)
        {
            errors.extend(status_errors);
        }
        errors
    }
}

fn preference_errors(accommodation: Option<&str>, transport: Option<&str>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(value) = accommodation.filter(|v| !ACCOMMODATION_TYPES.contains(v)) {
        errors.push(FieldError::new(
            "accommodationType",
            format!("Invalid accommodation type '{value}'. Must be one of: {ACCOMMODATION_TYPES:?}"),
        ));
    }
    if let Some(value) = transport.filter(|v| !TRANSPORT_PREFERENCES.contains(v)) {
        errors.push(FieldError::new(
            "transportPreference",
            format!("Invalid transport preference '{value}'. Must be one of: {TRANSPORT_PREFERENCES:?}"),
        ));
    }
    errors
}

impl Record for CustomTourRequest {
    type Create = CreateCustomTourRequest;
    type Patch = UpdateCustomTourRequest;
    type Filter = ();

    const ENTITY: &'static str = "custom tour request";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateCustomTourRequest, now: Timestamp) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            duration: input.duration,
            group_size: input.group_size,
            budget: input.budget,
            interests: input.interests,
            preferred_dates: input.preferred_dates,
            special_requirements: input.special_requirements,
            destinations: input.destinations,
            accommodation_type: input.accommodation_type,
            transport_preference: input.transport_preference,
            status: STATUS_PENDING.to_string(),
            admin_notes: None,
            estimated_price: None,
            assigned_itinerary_id: None,
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdateCustomTourRequest) {
        merge_patch!(self, patch;
            first_name, last_name, email, duration, group_size, interests, destinations, status;
            phone, budget, preferred_dates, special_requirements, accommodation_type,
            transport_preference, admin_notes, estimated_price, assigned_itinerary_id);
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
