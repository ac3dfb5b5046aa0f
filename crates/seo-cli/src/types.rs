use std::path::PathBuf;

use serde::Serialize;
use seo_model::{KeywordOverview, OverviewReport, QueryKind, ValidationResult};

/// Outcome of `check`: one envelope validated for one kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub source: PathBuf,
    pub kind: QueryKind,
    /// Whether the envelope passed the shallow shape guard.
    pub well_formed: bool,
    pub validation: ValidationResult,
}

impl CheckOutcome {
    pub fn has_errors(&self) -> bool {
        !self.validation.is_valid
    }
}

/// Outcome of `overview`: the composite report plus the document a
/// caller would persist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewOutcome {
    pub source: PathBuf,
    pub validation: OverviewReport,
    pub overview: KeywordOverview,
}

impl OverviewOutcome {
    pub fn has_errors(&self) -> bool {
        !self.validation.is_valid
    }
}
