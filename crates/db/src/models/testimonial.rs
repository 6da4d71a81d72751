//! Customer testimonials shown on the site.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::merge_patch;
use crate::store::Record;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub image_url: String,
    pub text: String,
    /// Whole stars, 1 to 5.
    pub rating: i32,
    pub trip_name: String,
    /// Display text such as "10 days".
    pub duration: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    pub name: String,
    pub country: String,
    pub image_url: String,
    pub text: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,
    pub trip_name: String,
    pub duration: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
    pub text: Option<String>,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub trip_name: Option<String>,
    pub duration: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialFilter {
    pub include_inactive: bool,
}

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("country", FieldKind::Text),
    FieldSpec::required("imageUrl", FieldKind::Text),
    FieldSpec::required("text", FieldKind::Text),
    FieldSpec::required("rating", FieldKind::Integer),
    FieldSpec::required("tripName", FieldKind::Text),
    FieldSpec::required("duration", FieldKind::Text),
    FieldSpec::optional("isActive", FieldKind::Boolean),
];

impl InputSchema for CreateTestimonial {
    const FIELDS: &'static [FieldSpec] = TESTIMONIAL_FIELDS;
}

impl InputSchema for UpdateTestimonial {
    const FIELDS: &'static [FieldSpec] = TESTIMONIAL_FIELDS;
    const IMMUTABLE: &'static [&'static str] = &["id"];
}

impl Record for Testimonial {
    type Create = CreateTestimonial;
    type Patch = UpdateTestimonial;
    type Filter = TestimonialFilter;

    const ENTITY: &'static str = "testimonial";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateTestimonial, _now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            country: input.country,
            image_url: input.image_url,
            text: input.text,
            rating: input.rating,
            trip_name: input.trip_name,
            duration: input.duration,
            is_active: input.is_active.unwrap_or(true),
        }
    }

    fn apply_patch(&mut self, patch: UpdateTestimonial) {
        merge_patch!(self, patch;
            name, country, image_url, text, rating, trip_name, duration, is_active);
    }

    fn matches(&self, filter: &TestimonialFilter) -> bool {
        filter.include_inactive || self.is_active
    }
}
