//! Validation and extraction for SEO provider API responses.
//!
//! Raw provider envelopes are untrusted JSON. This crate checks their
//! shape, turns provider failures into error messages, and extracts a
//! normalized payload per query kind without ever failing on malformed
//! input. [`validate_overview`] runs all five kinds for one keyword.

pub mod extract;
pub mod guard;
pub mod issue;
pub mod json;
pub mod overview;
pub mod validator;

pub use extract::{
    Extraction, competition_value, extract_demographics_data, extract_difficulty_data,
    extract_related_keywords_data, extract_search_volume_data, extract_trends_data,
};
pub use guard::{
    is_demographics_response, is_difficulty_response, is_envelope, is_related_keywords_response,
    is_search_volume_response, is_trends_response, shape_guard,
};
pub use issue::Issue;
pub use overview::{OverviewBundle, validate_overview};
pub use validator::{ResponseCheck, SUCCESS_STATUS_CODE, check, validate};
