//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Severity decides
//! whether the issue lands in `errors` or `warnings` of a
//! [`ValidationResult`](seo_model::ValidationResult).

use seo_model::{IssueSeverity, QueryKind};

/// Number of monthly buckets in a complete trend series.
pub const TREND_MONTHS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    // Envelope problems
    /// No response was supplied at all.
    ResponseMissing { kind: QueryKind },
    /// The envelope carries no task to read from.
    NoTasks { kind: QueryKind },
    /// The provider reported a non-success status for the task.
    TaskFailed {
        kind: QueryKind,
        status_code: String,
        status_message: Option<String>,
    },

    // Extraction gaps
    /// The kind's primary field is absent from an otherwise good response.
    DataNotFound { kind: QueryKind },
    /// Monthly buckets whose `date_from` could not be read.
    UndatedTrendBuckets { count: usize },
    /// The monthly buckets did not cover a full year.
    IncompleteTrends { found: usize },
}

impl Issue {
    pub fn severity(&self) -> IssueSeverity {
        match self {
            Issue::ResponseMissing { .. } | Issue::NoTasks { .. } | Issue::TaskFailed { .. } => {
                IssueSeverity::Error
            }
            Issue::DataNotFound { .. }
            | Issue::UndatedTrendBuckets { .. }
            | Issue::IncompleteTrends { .. } => IssueSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::ResponseMissing { kind } => format!("{} response is missing", kind.label()),
            Issue::NoTasks { kind } => format!("{} API error: no tasks in response", kind.label()),
            Issue::TaskFailed {
                kind,
                status_code,
                status_message,
            } => match status_message.as_deref().map(str::trim) {
                Some(message) if !message.is_empty() => {
                    format!("{} API error: {}", kind.label(), message)
                }
                _ => format!("{} API error: status code {}", kind.label(), status_code),
            },
            Issue::DataNotFound { kind } => match kind {
                QueryKind::SearchVolume => "Search volume data not found".to_string(),
                QueryKind::Difficulty => "Keyword difficulty data not found".to_string(),
                QueryKind::Trends => "Trends data not found".to_string(),
                QueryKind::Demographics => "Demographics data not found".to_string(),
                QueryKind::RelatedKeywords => "Related keywords data not found".to_string(),
            },
            Issue::UndatedTrendBuckets { count } => {
                format!("Trends data skipped months without a usable date: {count}")
            }
            Issue::IncompleteTrends { found } => format!(
                "Trends data incomplete: expected {TREND_MONTHS} months, found {found}"
            ),
        }
    }
}
