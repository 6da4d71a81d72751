//! Scheduled departures of a tour, with optional guide and driver.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::error::CoreError;
use tourdesk_core::lifecycle::itinerary::{self, DEFAULT_MAX_PARTICIPANTS, STATUS_ACTIVE};
use tourdesk_core::types::{Date, DbId, Timestamp};
use tourdesk_core::validation::{FieldError, FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::merge_patch;
use crate::store::Record;

/// A row from the `itineraries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: DbId,
    pub tour_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub guide_id: Option<DbId>,
    pub driver_id: Option<DbId>,
    pub max_participants: i32,
    pub current_participants: i32,
    pub status: String,
    pub created_at: Timestamp,
}

impl Itinerary {
    /// Date and capacity invariants of this record as it stands.
    pub fn invariant_errors(&self) -> Vec<FieldError> {
        itinerary::invariant_errors(
            self.start_date,
            self.end_date,
            self.max_participants,
            self.current_participants,
        )
    }

    /// The guide ids this itinerary references, tagged with their field.
    pub fn staff(&self) -> impl Iterator<Item = (&'static str, DbId)> {
        [("guideId", self.guide_id), ("driverId", self.driver_id)]
            .into_iter()
            .filter_map(|(field, id)| id.map(|id| (field, id)))
    }
}

/// DTO for scheduling an itinerary. Starts `active` with no participants.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItinerary {
    pub tour_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub guide_id: Option<DbId>,
    pub driver_id: Option<DbId>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_participants: Option<i32>,
}

impl InputSchema for CreateItinerary {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("tourId", FieldKind::Id),
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::required("startDate", FieldKind::Date),
        FieldSpec::required("endDate", FieldKind::Date),
        FieldSpec::optional("guideId", FieldKind::Id),
        FieldSpec::optional("driverId", FieldKind::Id),
        FieldSpec::optional("maxParticipants", FieldKind::Integer),
    ];

    fn semantic_errors(&self) -> Vec<FieldError> {
        itinerary::invariant_errors(
            self.start_date,
            self.end_date,
            self.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS),
            0,
        )
    }
}

/// DTO for editing an itinerary. Cross-field invariants are checked on the
/// merged record, since either side of a pair may be absent here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItinerary {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub guide_id: Option<DbId>,
    pub driver_id: Option<DbId>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_participants: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_participants: Option<i32>,
    pub status: Option<String>,
}

impl InputSchema for UpdateItinerary {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::required("startDate", FieldKind::Date),
        FieldSpec::required("endDate", FieldKind::Date),
        FieldSpec::optional("guideId", FieldKind::Id),
        FieldSpec::optional("driverId", FieldKind::Id),
        FieldSpec::required("maxParticipants", FieldKind::Integer),
        FieldSpec::required("currentParticipants", FieldKind::Integer),
        FieldSpec::required("status", FieldKind::Text),
    ];
    const IMMUTABLE: &'static [&'static str] = &["id", "tourId", "createdAt"];

    fn semantic_errors(&self) -> Vec<FieldError> {
        match self.status.as_deref().map(itinerary::validate_status) {
            Some(Err(CoreError::Validation(errors))) => errors,
            _ => Vec::new(),
        }
    }
}

impl Record for Itinerary {
    type Create = CreateItinerary;
    type Patch = UpdateItinerary;
    type Filter = ();

    const ENTITY: &'static str = "itinerary";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateItinerary, now: Timestamp) -> Self {
        Self {
            id,
            tour_id: input.tour_id,
            name: input.name,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            guide_id: input.guide_id,
            driver_id: input.driver_id,
            max_participants: input.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS),
            current_participants: 0,
            status: STATUS_ACTIVE.to_string(),
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdateItinerary) {
        merge_patch!(self, patch;
            name, start_date, end_date, max_participants, current_participants, status;
            description, guide_id, driver_id);
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use tourdesk_core::validation::{parse_create, parse_patch};

    use super::*;

    fn body() -> serde_json::Value {
        json!({
            "tourId": 2, "name": "Spring departure",
            "startDate": "2025-04-01", "endDate": "2025-04-14", "guideId": 5
        })
    }

    #[test]
    fn create_defaults_capacity_and_status() {
        let input: CreateItinerary = parse_create(body()).unwrap();
        let itinerary = Itinerary::from_create(1, input, Utc::now());
        assert_eq!(itinerary.max_participants, 12);
        assert_eq!(itinerary.current_participants, 0);
        assert_eq!(itinerary.status, "active");
        assert_eq!(itinerary.staff().collect::<Vec<_>>(), vec![("guideId", 5)]);
    }

    #[test]
    fn reversed_dates_fail_on_create() {
        let mut raw = body();
        raw["endDate"] = json!("2025-03-01");
        let errors = parse_create::<CreateItinerary>(raw).unwrap_err();
        assert_eq!(errors[0].field, "endDate");
    }

    #[test]
    fn patch_rejects_tour_change_and_unknown_status() {
        let errors =
            parse_patch::<UpdateItinerary>(json!({ "tourId": 3, "status": "paused" })).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("tourId", "cannot be changed")]);

        let errors = parse_patch::<UpdateItinerary>(json!({ "status": "paused" })).unwrap_err();
        assert_eq!(errors[0].field, "status");
    }

    #[test]
    fn merged_record_exposes_invariant_violations() {
        let input: CreateItinerary = parse_create(body()).unwrap();
        let mut itinerary = Itinerary::from_create(1, input, Utc::now());
        let patch: UpdateItinerary =
            parse_patch(json!({ "maxParticipants": 4, "currentParticipants": 6 })).unwrap();
        itinerary.apply_patch(patch);
        let errors = itinerary.invariant_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "currentParticipants");
    }
}
