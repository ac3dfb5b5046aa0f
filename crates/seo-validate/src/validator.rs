//! Per-response validation.

use seo_model::{ExtractedPayload, IssueSeverity, QueryKind, ValidationResult};
use serde_json::Value;
use tracing::debug;

use crate::extract::extract;
use crate::issue::Issue;
use crate::json::{array_at, at, str_at};

/// Task status code the provider uses for success.
pub const SUCCESS_STATUS_CODE: u64 = 20000;

/// Issues and payload gathered for one response, before they are split
/// into errors and warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCheck {
    pub kind: QueryKind,
    pub issues: Vec<Issue>,
    pub data: Option<ExtractedPayload>,
}

impl ResponseCheck {
    fn failed(kind: QueryKind, issue: Issue) -> Self {
        Self {
            kind,
            issues: vec![issue],
            data: None,
        }
    }

    pub fn into_result(self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for issue in &self.issues {
            match issue.severity() {
                IssueSeverity::Error => errors.push(issue.message()),
                IssueSeverity::Warning => warnings.push(issue.message()),
            }
        }
        ValidationResult::from_parts(errors, warnings, self.data)
    }
}

/// Validate one raw provider response for `kind`.
///
/// JSON null is treated the same as an absent response.
pub fn validate(raw: Option<&Value>, kind: QueryKind) -> ValidationResult {
    let result = check(raw, kind).into_result();
    debug!(
        kind = %kind,
        is_valid = result.is_valid,
        errors = result.error_count(),
        warnings = result.warning_count(),
        "validated response"
    );
    result
}

/// Like [`validate`] but keeps the typed issues.
pub fn check(raw: Option<&Value>, kind: QueryKind) -> ResponseCheck {
    let Some(raw) = raw.filter(|value| !value.is_null()) else {
        return ResponseCheck::failed(kind, Issue::ResponseMissing { kind });
    };
    let Some(task) = array_at(Some(raw), "/tasks").and_then(<[Value]>::first) else {
        return ResponseCheck::failed(kind, Issue::NoTasks { kind });
    };
    if let Some(issue) = task_failure(kind, task) {
        return ResponseCheck::failed(kind, issue);
    }

    let results = array_at(Some(task), "/result").unwrap_or_default();
    if results.len() > 1 {
        debug!(kind = %kind, count = results.len(), "ignoring results after the first");
    }
    let extraction = extract(kind, results.first().filter(|value| !value.is_null()));
    ResponseCheck {
        kind,
        issues: extraction.issues,
        data: Some(extraction.payload),
    }
}

/// A present task status code other than success.
fn task_failure(kind: QueryKind, task: &Value) -> Option<Issue> {
    let code = at(Some(task), "/status_code")?;
    if code.is_number() && code.as_f64() == Some(SUCCESS_STATUS_CODE as f64) {
        return None;
    }
    let status_code = match code {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    Some(Issue::TaskFailed {
        kind,
        status_code,
        status_message: str_at(Some(task), "/status_message").map(str::to_string),
    })
}
