//! Response payloads that are not a bare entity or entity list.

use serde::Serialize;
use tourdesk_db::models::guide::Guide;
use tourdesk_db::models::itinerary::Itinerary;
use tourdesk_db::models::itinerary_day::ItineraryDay;

/// `{ "message": ... }`, returned by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful guide registration.
#[derive(Debug, Serialize)]
pub struct GuideRegistrationResponse {
    pub message: &'static str,
    pub guide: Guide,
}

/// An itinerary with its days inlined, ordered by day number.
#[derive(Debug, Serialize)]
pub struct ItineraryDetail {
    #[serde(flatten)]
    pub itinerary: Itinerary,
    pub days: Vec<ItineraryDay>,
}

/// Body of a successful admin login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}
