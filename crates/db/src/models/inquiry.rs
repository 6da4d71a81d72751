//! General contact-form inquiries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::lifecycle::inquiry::STATUS_NEW;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::status::StatusUpdate;
use crate::store::Record;

/// A row from the `inquiries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tour_interest: Option<String>,
    pub preferred_dates: Option<String>,
    /// Free text ("2 adults, 1 child").
    pub group_size: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub tour_interest: Option<String>,
    pub preferred_dates: Option<String>,
    pub group_size: Option<String>,
    pub message: Option<String>,
}

impl InputSchema for CreateInquiry {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("firstName", FieldKind::Text),
        FieldSpec::required("lastName", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::optional("phone", FieldKind::Text),
        FieldSpec::optional("tourInterest", FieldKind::Text),
        FieldSpec::optional("preferredDates", FieldKind::Text),
        FieldSpec::optional("groupSize", FieldKind::Text),
        FieldSpec::optional("message", FieldKind::Text),
    ];
}

impl Record for Inquiry {
    type Create = CreateInquiry;
    type Patch = StatusUpdate;
    type Filter = ();

    const ENTITY: &'static str = "inquiry";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateInquiry, now: Timestamp) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            tour_interest: input.tour_interest,
            preferred_dates: input.preferred_dates,
            group_size: input.group_size,
            message: input.message,
            status: STATUS_NEW.to_string(),
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: StatusUpdate) {
        self.status = patch.status;
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
