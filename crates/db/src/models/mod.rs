//! Entity rows, their input DTOs and list filters.
//!
//! Each entity module defines the stored row (`FromRow + Serialize`), a
//! `Create*` DTO and a patch DTO (`Deserialize + Validate`, parsed through
//! [`tourdesk_core::validation`]), and implements [`crate::store::Record`].

pub mod blog_post;
pub mod booking;
pub mod custom_tour_request;
pub mod guide;
pub mod inquiry;
pub mod itinerary;
pub mod itinerary_day;
pub mod status;
pub mod testimonial;
pub mod tour;

/// Copy every `Some` field of a patch onto the record.
///
/// Fields before the `;` are required on the record; fields after it are
/// nullable there and are wrapped back in `Some`.
macro_rules! merge_patch {
    ($record:expr, $patch:expr; $($field:ident),* $(; $($nullable:ident),*)?) => {
        $(
            if let Some(value) = $patch.$field {
                $record.$field = value;
            }
        )*
        $($(
            if let Some(value) = $patch.$nullable {
                $record.$nullable = Some(value);
            }
        )*)?
    };
}

pub(crate) use merge_patch;
