use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kind::QueryKind;
use crate::payload::ExtractedPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// The response cannot be used.
    Error,
    /// The call succeeded but had nothing to report.
    Warning,
}

impl IssueSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "Error",
            IssueSeverity::Warning => "Warning",
        }
    }
}

/// Outcome of validating one provider response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Absent when extraction was never attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractedPayload>,
}

impl ValidationResult {
    /// Build a result whose validity is derived from the error list.
    pub fn from_parts(
        errors: Vec<String>,
        warnings: Vec<String>,
        data: Option<ExtractedPayload>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            data,
        }
    }

    /// A result carrying a single error and no payload.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::from_parts(vec![error.into()], Vec::new(), None)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors then warnings, tagged with their severity.
    pub fn issues(&self) -> impl Iterator<Item = (IssueSeverity, &str)> {
        self.errors
            .iter()
            .map(|message| (IssueSeverity::Error, message.as_str()))
            .chain(
                self.warnings
                    .iter()
                    .map(|message| (IssueSeverity::Warning, message.as_str())),
            )
    }
}

/// Composite report for an overview request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewReport {
    pub keyword: String,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Always holds every kind, in kind order.
    pub api_status: BTreeMap<QueryKind, ValidationResult>,
}

impl OverviewReport {
    pub fn status(&self, kind: QueryKind) -> Option<&ValidationResult> {
        self.api_status.get(&kind)
    }

    /// Kinds whose response validated.
    pub fn valid_kinds(&self) -> Vec<QueryKind> {
        self.api_status
            .iter()
            .filter(|(_, result)| result.is_valid)
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
