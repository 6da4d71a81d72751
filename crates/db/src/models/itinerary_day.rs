//! Day-by-day plan of an itinerary.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::merge_patch;
use crate::store::Record;

/// A row from the `itinerary_days` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub id: DbId,
    pub itinerary_id: DbId,
    /// 1-based, unique within the itinerary.
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
    pub accommodation: Option<String>,
    pub meals: Vec<String>,
    pub transportation: Option<String>,
    pub notes: Option<String>,
}

/// DTO for adding a day. `itineraryId` comes from the request path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItineraryDay {
    pub itinerary_id: DbId,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub day_number: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub activities: Vec<String>,
    pub accommodation: Option<String>,
    #[serde(default)]
    pub meals: Vec<String>,
    pub transportation: Option<String>,
    pub notes: Option<String>,
}

impl InputSchema for CreateItineraryDay {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("itineraryId", FieldKind::Id),
        FieldSpec::required("dayNumber", FieldKind::Integer),
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("description", FieldKind::Text),
        FieldSpec::optional("activities", FieldKind::TextList),
        FieldSpec::optional("accommodation", FieldKind::Text),
        FieldSpec::optional("meals", FieldKind::TextList),
        FieldSpec::optional("transportation", FieldKind::Text),
        FieldSpec::optional("notes", FieldKind::Text),
    ];
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItineraryDay {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub day_number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub activities: Option<Vec<String>>,
    pub accommodation: Option<String>,
    pub meals: Option<Vec<String>>,
    pub transportation: Option<String>,
    pub notes: Option<String>,
}

impl InputSchema for UpdateItineraryDay {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("dayNumber", FieldKind::Integer),
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("description", FieldKind::Text),
        FieldSpec::optional("activities", FieldKind::TextList),
        FieldSpec::optional("accommodation", FieldKind::Text),
        FieldSpec::optional("meals", FieldKind::TextList),
        FieldSpec::optional("transportation", FieldKind::Text),
        FieldSpec::optional("notes", FieldKind::Text),
    ];
    const IMMUTABLE: &'static [&'static str] = &["id", "itineraryId"];
}

#[derive(Debug, Clone, Default)]
pub struct ItineraryDayFilter {
    pub itinerary_id: Option<DbId>,
}

impl ItineraryDayFilter {
    pub fn for_itinerary(itinerary_id: DbId) -> Self {
        Self {
            itinerary_id: Some(itinerary_id),
        }
    }
}

impl Record for ItineraryDay {
    type Create = CreateItineraryDay;
    type Patch = UpdateItineraryDay;
    type Filter = ItineraryDayFilter;

    const ENTITY: &'static str = "itinerary day";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateItineraryDay, _now: Timestamp) -> Self {
        Self {
            id,
            itinerary_id: input.itinerary_id,
            day_number: input.day_number,
            title: input.title,
            description: input.description,
            activities: input.activities,
            accommodation: input.accommodation,
            meals: input.meals,
            transportation: input.transportation,
            notes: input.notes,
        }
    }

    fn apply_patch(&mut self, patch: UpdateItineraryDay) {
        merge_patch!(self, patch;
            day_number, title, description, activities, meals;
            accommodation, transportation, notes);
    }

    fn matches(&self, filter: &ItineraryDayFilter) -> bool {
        filter.itinerary_id.is_none_or(|id| id == self.itinerary_id)
    }

    fn sort(rows: &mut [Self]) {
        rows.sort_by_key(|day| day.day_number);
    }
}
