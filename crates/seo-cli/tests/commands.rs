//! Integration tests for the command layer.

use std::fs;
use std::path::{Path, PathBuf};

use seo_cli::commands::{run_check, run_overview};
use seo_model::QueryKind;
use serde_json::{Value, json};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "seo-validator-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

fn difficulty_envelope(difficulty: Value) -> Value {
    json!({
        "version": "0.1.20240801",
        "status_code": 20000,
        "status_message": "Ok.",
        "tasks": [{
            "status_code": 20000,
            "status_message": "Ok.",
            "result": [{"keyword": "seo tools", "keyword_difficulty": difficulty}]
        }]
    })
}

#[test]
fn test_check_valid_response() {
    let dir = unique_temp_dir("check");
    let path = dir.join("difficulty.json");
    write_json(&path, &difficulty_envelope(json!(45)));

    let outcome = run_check(&path, QueryKind::Difficulty).unwrap();
    assert!(outcome.well_formed);
    assert!(outcome.validation.is_valid);
    assert!(!outcome.has_errors());

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["kind"], "difficulty");
    assert_eq!(json["wellFormed"], true);
    assert_eq!(json["validation"]["data"]["difficulty"], 45.0);
}

#[test]
fn test_check_reports_missing_data_as_warning() {
    let dir = unique_temp_dir("check-warning");
    let path = dir.join("difficulty.json");
    write_json(&path, &difficulty_envelope(Value::Null));

    let outcome = run_check(&path, QueryKind::Difficulty).unwrap();
    assert!(!outcome.has_errors());
    assert_eq!(
        outcome.validation.warnings,
        vec!["Keyword difficulty data not found"]
    );
}

#[test]
fn test_check_rejects_unparseable_file() {
    let dir = unique_temp_dir("check-invalid");
    let path = dir.join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let error = run_check(&path, QueryKind::Trends).unwrap_err();
    assert!(format!("{error:#}").contains("as JSON"));
    assert!(run_check(&dir.join("absent.json"), QueryKind::Trends).is_err());
}

#[test]
fn test_overview_with_keyword_override() {
    let dir = unique_temp_dir("overview");
    let path = dir.join("bundle.json");
    write_json(
        &path,
        &json!({
            "keyword": "old keyword",
            "difficulty": difficulty_envelope(json!(30)),
            "trends": {"version": "0.1", "tasks": []}
        }),
    );

    let outcome = run_overview(&path, Some("seo tools")).unwrap();
    assert!(outcome.has_errors());
    assert_eq!(outcome.validation.keyword, "seo tools");
    assert_eq!(outcome.overview.keyword, "seo tools");
    assert_eq!(outcome.overview.difficulty, Some(30.0));
    insta::assert_json_snapshot!(outcome.validation.errors, @r#"
    [
      "Search Volume response is missing",
      "Trends API error: no tasks in response",
      "Demographics response is missing",
      "Related Keywords response is missing"
    ]
    "#);
}

#[test]
fn test_overview_rejects_non_object_bundle() {
    let dir = unique_temp_dir("overview-invalid");
    let path = dir.join("bundle.json");
    write_json(&path, &json!([1, 2, 3]));
    let error = run_overview(&path, None).unwrap_err();
    assert!(format!("{error:#}").contains("JSON object"));
}

#[test]
fn test_overview_reports_unreadable_bundle() {
    let dir = unique_temp_dir("overview-absent");
    let error = run_overview(&dir.join("absent.json"), None).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("load overview bundle"));
    assert!(message.contains("io error"));
}
