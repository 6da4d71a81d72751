//! Tour catalog entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourdesk_core::types::{DbId, Timestamp};
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use super::merge_patch;
use crate::store::Record;

pub const DEFAULT_RATING: &str = "5.0";
pub const DEFAULT_MAX_GROUP_SIZE: i32 = 12;
pub const DEFAULT_DIFFICULTY: &str = "Moderate";
pub const DEFAULT_BEST_SEASON: &str = "Spring";

/// Highest rating a tour can carry.
const MAX_RATING: f64 = 5.0;

/// A row from the `tours` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Length in days.
    pub duration: i32,
    /// Price in whole USD.
    pub price: i32,
    pub category: String,
    pub image_url: String,
    /// One-decimal string, `"0.0"` to `"5.0"`.
    pub rating: String,
    pub review_count: i32,
    pub highlights: Vec<String>,
    pub is_active: bool,
    pub max_group_size: i32,
    pub difficulty: String,
    pub best_season: String,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

/// DTO for adding a tour to the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTour {
    pub name: String,
    pub description: String,
    #[validate(range(min = 1, message = "must be at least 1 day"))]
    pub duration: i32,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub price: i32,
    pub category: String,
    pub image_url: String,
    /// Defaults to `"5.0"`.
    pub rating: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub review_count: Option<i32>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub is_active: Option<bool>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_group_size: Option<i32>,
    pub difficulty: Option<String>,
    pub best_season: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// DTO for editing a tour. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTour {
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1 day"))]
    pub duration: Option<i32>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub price: Option<i32>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub review_count: Option<i32>,
    pub highlights: Option<Vec<String>>,
    pub is_active: Option<bool>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_group_size: Option<i32>,
    pub difficulty: Option<String>,
    pub best_season: Option<String>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
}

/// Catalog listing filter.
#[derive(Debug, Clone, Default)]
pub struct TourFilter {
    pub category: Option<String>,
    /// Also return tours with `isActive = false`.
    pub include_inactive: bool,
}

const TOUR_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::Text),
    FieldSpec::required("description", FieldKind::Text),
    FieldSpec::required("duration", FieldKind::Integer),
    FieldSpec::required("price", FieldKind::Integer),
    FieldSpec::required("category", FieldKind::Text),
    FieldSpec::required("imageUrl", FieldKind::Text),
    FieldSpec::optional("rating", FieldKind::Decimal).within(0.0, MAX_RATING),
    FieldSpec::optional("reviewCount", FieldKind::Integer),
    FieldSpec::optional("highlights", FieldKind::TextList),
    FieldSpec::optional("isActive", FieldKind::Boolean),
    FieldSpec::optional("maxGroupSize", FieldKind::Integer),
    FieldSpec::optional("difficulty", FieldKind::Text),
    FieldSpec::optional("bestSeason", FieldKind::Text),
    FieldSpec::optional("includes", FieldKind::TextList),
    FieldSpec::optional("excludes", FieldKind::TextList),
];

impl InputSchema for CreateTour {
    const FIELDS: &'static [FieldSpec] = TOUR_FIELDS;
}

impl InputSchema for UpdateTour {
    const FIELDS: &'static [FieldSpec] = TOUR_FIELDS;
    const IMMUTABLE: &'static [&'static str] = &["id"];
}

impl Record for Tour {
    type Create = CreateTour;
    type Patch = UpdateTour;
    type Filter = TourFilter;

    const ENTITY: &'static str = "tour";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateTour, _now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            duration: input.duration,
            price: input.price,
            category: input.category,
            image_url: input.image_url,
            rating: input.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
            review_count: input.review_count.unwrap_or(0),
            highlights: input.highlights,
            is_active: input.is_active.unwrap_or(true),
            max_group_size: input.max_group_size.unwrap_or(DEFAULT_MAX_GROUP_SIZE),
            difficulty: input.difficulty.unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            best_season: input.best_season.unwrap_or_else(|| DEFAULT_BEST_SEASON.to_string()),
            includes: input.includes,
            excludes: input.excludes,
        }
    }

    fn apply_patch(&mut self, patch: UpdateTour) {
        merge_patch!(self, patch;
            name, description, duration, price, category, image_url, rating, review_count,
            highlights, is_active, max_group_size, difficulty, best_season, includes, excludes);
    }

    fn matches(&self, filter: &TourFilter) -> bool {
        (filter.include_inactive || self.is_active)
            && filter.category.as_deref().is_none_or(|c| c == self.category)
    }
}
