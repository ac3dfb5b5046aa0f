//! Composite validation for overview requests.
//!
//! An overview bundles one raw response per query kind for a single
//! keyword. Each kind is validated on its own; the report merges their
//! messages in kind order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use seo_model::{OverviewReport, QueryKind, Result, SeoError, ValidationResult};
use serde_json::Value;
use tracing::{debug, debug_span};

use crate::issue::Issue;
use crate::validator::validate;

/// Raw provider responses gathered for one keyword.
///
/// Related keywords travel under `related`; [`OverviewBundle::from_value`]
/// also accepts the `relatedKeywords` spelling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewBundle {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub search_volume: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub trends: Option<Value>,
    #[serde(default)]
    pub demographics: Option<Value>,
    #[serde(default)]
    pub related: Option<Value>,
}

impl OverviewBundle {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Set the raw response for `kind`.
    #[must_use]
    pub fn with(mut self, kind: QueryKind, raw: Value) -> Self {
        *self.slot_mut(kind) = Some(raw);
        self
    }

    /// Raw response for `kind`, if one was supplied and is not null.
    pub fn get(&self, kind: QueryKind) -> Option<&Value> {
        let slot = match kind {
            QueryKind::SearchVolume => &self.search_volume,
            QueryKind::Difficulty => &self.difficulty,
            QueryKind::Trends => &self.trends,
            QueryKind::Demographics => &self.demographics,
            QueryKind::RelatedKeywords => &self.related,
        };
        slot.as_ref().filter(|value| !value.is_null())
    }

    fn slot_mut(&mut self, kind: QueryKind) -> &mut Option<Value> {
        match kind {
            QueryKind::SearchVolume => &mut self.search_volume,
            QueryKind::Difficulty => &mut self.difficulty,
            QueryKind::Trends => &mut self.trends,
            QueryKind::Demographics => &mut self.demographics,
            QueryKind::RelatedKeywords => &mut self.related,
        }
    }

    /// Parse a bundle from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Build a bundle from a parsed JSON object.
    ///
    /// When both `related` and `relatedKeywords` are present, the non-null
    /// one wins; two non-null values are rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(SeoError::Message(
                "overview bundle must be a JSON object".to_string(),
            ));
        };
        if let Some(long) = fields.remove("relatedKeywords") {
            if fields.get("related").is_none_or(Value::is_null) {
                fields.insert("related".to_string(), long);
            } else if !long.is_null() {
                return Err(SeoError::Message(
                    "overview bundle sets both related and relatedKeywords".to_string(),
                ));
            }
        }
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// Read and parse a bundle file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Validate every kind of an overview bundle and merge the results.
pub fn validate_overview(bundle: &OverviewBundle) -> OverviewReport {
    let span = debug_span!("overview", keyword = %bundle.keyword);
    let _guard = span.enter();

    let mut api_status = BTreeMap::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for kind in QueryKind::ALL {
        let result = match bundle.get(kind) {
            Some(raw) => validate(Some(raw), kind),
            None => missing_response(kind),
        };
        errors.extend(result.errors.iter().cloned());
        warnings.extend(result.warnings.iter().cloned());
        api_status.insert(kind, result);
    }

    let is_valid = api_status.values().all(|result| result.is_valid);
    debug!(
        is_valid,
        errors = errors.len(),
        warnings = warnings.len(),
        "validated overview"
    );
    OverviewReport {
        keyword: bundle.keyword.clone(),
        is_valid,
        errors,
        warnings,
        api_status,
    }
}

fn missing_response(kind: QueryKind) -> ValidationResult {
    ValidationResult::failed(Issue::ResponseMissing { kind }.message())
}
