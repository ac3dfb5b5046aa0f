use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use seo_model::QueryKind;
use seo_validate::{OverviewBundle, shape_guard, validate, validate_overview};
use serde_json::Value;
use tracing::{info, info_span, warn};

use crate::types::{CheckOutcome, OverviewOutcome};

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) into a string.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Validate one provider envelope as `kind`.
pub fn run_check(path: &Path, kind: QueryKind) -> Result<CheckOutcome> {
    let span = info_span!("check", kind = %kind, source = %path.display());
    let _guard = span.enter();

    let text = read_input(path)?;
    let raw: Value = serde_json::from_str(&text)
        .with_context(|| format!("parse {} as JSON", path.display()))?;
    let well_formed = shape_guard(Some(&raw), kind);
    let validation = validate(Some(&raw), kind);
    if validation.is_valid {
        info!(
            warnings = validation.warning_count(),
            "response is valid"
        );
    } else {
        warn!(errors = validation.error_count(), "response is invalid");
    }
    Ok(CheckOutcome {
        source: path.to_path_buf(),
        kind,
        well_formed,
        validation,
    })
}

/// Validate an overview bundle file.
///
/// `keyword` replaces the keyword stored in the bundle when given.
pub fn run_overview(path: &Path, keyword: Option<&str>) -> Result<OverviewOutcome> {
    let loaded = if path.as_os_str() == STDIN_PATH {
        OverviewBundle::from_json_str(&read_input(path)?)
    } else {
        OverviewBundle::load(path)
    };
    let mut bundle =
        loaded.with_context(|| format!("load overview bundle {}", path.display()))?;
    if let Some(keyword) = keyword {
        bundle.keyword = keyword.to_string();
    }

    let span = info_span!("overview", keyword = %bundle.keyword, source = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let validation = validate_overview(&bundle);
    let overview = validation.overview();
    info!(
        is_valid = validation.is_valid,
        valid_kinds = validation.valid_kinds().len(),
        errors = validation.error_count(),
        warnings = validation.warning_count(),
        duration_us = start.elapsed().as_micros(),
        "overview validated"
    );
    if validation.has_errors() {
        warn!(errors = validation.error_count(), "overview has invalid sections");
    }
    Ok(OverviewOutcome {
        source: path.to_path_buf(),
        validation,
        overview,
    })
}
