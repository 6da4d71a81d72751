//! Tour bookings submitted by customers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::lifecycle::booking::STATUS_PENDING;
use tourdesk_core::types::{Date, DbId, Timestamp};
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::status::StatusUpdate;
use crate::store::Record;

/// A row from the `bookings` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub tour_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub travel_date: Date,
    pub group_size: i32,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for a booking request. Status and creation time are assigned by
/// the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub tour_id: DbId,
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub travel_date: Date,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub group_size: i32,
    pub special_requests: Option<String>,
}

impl InputSchema for CreateBooking {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("tourId", FieldKind::Id),
        FieldSpec::required("firstName", FieldKind::Text),
        FieldSpec::required("lastName", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::optional("phone", FieldKind::Text),
        FieldSpec::required("travelDate", FieldKind::Date),
        FieldSpec::required("groupSize", FieldKind::Integer),
        FieldSpec::optional("specialRequests", FieldKind::Text),
    ];
}

impl Record for Booking {
    type Create = CreateBooking;
    /// Bookings only ever change status.
    type Patch = StatusUpdate;
    type Filter = ();

    const ENTITY: &'static str = "booking";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateBooking, now: Timestamp) -> Self {
        Self {
            id,
            tour_id: input.tour_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            travel_date: input.travel_date,
            group_size: input.group_size,
            special_requests: input.special_requests,
            status: STATUS_PENDING.to_string(),
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
