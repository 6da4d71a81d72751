//! Query-string parameter types.

use serde::{Deserialize, Deserializer};

/// `GET /tours?category=&includeInactive=`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourListParams {
    #[serde(default, deserialize_with = "non_empty")]
    pub category: Option<String>,
    /// Admin only: also list deactivated tours.
    #[serde(default)]
    pub include_inactive: bool,
}

/// `GET /guides?type=guide|driver`.
#[derive(Debug, Default, Deserialize)]
pub struct GuideListParams {
    #[serde(rename = "type", default, deserialize_with = "non_empty")]
    pub registration_type: Option<String>,
}

/// `?includeInactive=` on testimonial listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// `?includeUnpublished=` on blog listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListParams {
    #[serde(default)]
    pub include_unpublished: bool,
}

/// A blank filter value (`?category=`) means "no filter".
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
