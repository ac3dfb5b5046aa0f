//! Shallow structural checks run before detailed validation.
//!
//! A guard only looks at the envelope: `version` must be a string and
//! `tasks` an array (possibly empty). It never inspects `result`.

use seo_model::QueryKind;
use serde_json::Value;
use tracing::trace;

/// True when `raw` looks like a provider envelope.
pub fn is_envelope(raw: &Value) -> bool {
    raw.as_object().is_some_and(|envelope| {
        envelope.get("version").is_some_and(Value::is_string)
            && envelope.get("tasks").is_some_and(Value::is_array)
    })
}

/// Envelope check for a specific query kind.
///
/// Every kind shares the same envelope shape today.
pub fn shape_guard(raw: Option<&Value>, kind: QueryKind) -> bool {
    let ok = raw.is_some_and(is_envelope);
    trace!(kind = %kind, ok, "shape guard");
    ok
}

pub fn is_search_volume_response(raw: &Value) -> bool {
    shape_guard(Some(raw), QueryKind::SearchVolume)
}

pub fn is_difficulty_response(raw: &Value) -> bool {
    shape_guard(Some(raw), QueryKind::Difficulty)
}

pub fn is_trends_response(raw: &Value) -> bool {
    shape_guard(Some(raw), QueryKind::Trends)
}

pub fn is_demographics_response(raw: &Value) -> bool {
    shape_guard(Some(raw), QueryKind::Demographics)
}

pub fn is_related_keywords_response(raw: &Value) -> bool {
    shape_guard(Some(raw), QueryKind::RelatedKeywords)
}
