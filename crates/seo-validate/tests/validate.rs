//! Per-response validation tests.

mod common;

use seo_model::{ExtractedPayload, QueryKind, SearchVolumePayload};
use seo_validate::{shape_guard, validate};
use serde_json::{Value, json};

use common::{
    empty_result_response, empty_tasks, error_envelope, response_for, search_volume_response,
    trends_response,
};

#[test]
fn test_missing_response_for_every_kind() {
    for kind in QueryKind::ALL {
        for raw in [None, Some(&Value::Null)] {
            let result = validate(raw, kind);
            assert!(!result.is_valid, "{kind}");
            assert_eq!(
                result.errors,
                vec![format!("{} response is missing", kind.label())]
            );
            assert!(result.warnings.is_empty());
            assert!(result.data.is_none());
        }
    }
}

#[test]
fn test_empty_task_list_is_an_error() {
    let raw = empty_tasks();
    for kind in QueryKind::ALL {
        assert!(shape_guard(Some(&raw), kind));
        let result = validate(Some(&raw), kind);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("no tasks"));
        assert!(result.data.is_none());
    }
}

#[test]
fn test_missing_task_list_is_an_error() {
    let raw = json!({"version": "0.1", "status_code": 20000});
    for kind in QueryKind::ALL {
        assert!(!shape_guard(Some(&raw), kind));
        let result = validate(Some(&raw), kind);
        assert_eq!(
            result.errors,
            vec![format!("{} API error: no tasks in response", kind.label())]
        );
    }
}

#[test]
fn test_task_error_skips_extraction() {
    let raw = error_envelope(40501, "Invalid Field: 'keywords'.");
    let result = validate(Some(&raw), QueryKind::SearchVolume);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["Search Volume API error: Invalid Field: 'keywords'."]
    );
    assert!(result.warnings.is_empty());
    assert!(result.data.is_none());
}

#[test]
fn test_empty_result_yields_warnings_and_defaults() {
    let raw = empty_result_response();
    for kind in QueryKind::ALL {
        let result = validate(Some(&raw), kind);
        assert!(result.is_valid, "{kind}");
        assert!(result.errors.is_empty());
        assert!(!result.warnings.is_empty(), "{kind}");
        let data = result.data.expect("data is extracted");
        assert!(data.is_empty(), "{kind}");
    }
    let result = validate(Some(&raw), QueryKind::SearchVolume);
    assert_eq!(result.warnings, vec!["Search volume data not found"]);
    assert_eq!(
        result.data,
        Some(ExtractedPayload::SearchVolume(SearchVolumePayload {
            search_volume: None,
            cpc: None,
            trend: None,
        }))
    );
}

#[test]
fn test_empty_task_object_is_ok_but_empty() {
    let raw = json!({"version": "0.1", "tasks": [{}]});
    for kind in QueryKind::ALL {
        let result = validate(Some(&raw), kind);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.data.is_some());
    }
}

#[test]
fn test_well_formed_responses_are_clean() {
    for kind in QueryKind::ALL {
        let raw = response_for(kind);
        assert!(shape_guard(Some(&raw), kind));
        let result = validate(Some(&raw), kind);
        assert!(result.is_valid, "{kind}");
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty(), "{kind}: {:?}", result.warnings);
    }
}

#[test]
fn test_validate_is_idempotent() {
    let raw = search_volume_response();
    let first = serde_json::to_string(&validate(Some(&raw), QueryKind::SearchVolume)).unwrap();
    let second = serde_json::to_string(&validate(Some(&raw), QueryKind::SearchVolume)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_partial_search_volume_has_no_warning() {
    let raw = common::envelope(json!({"keyword_info": {"search_volume": 12000, "cpc": null}}));
    let result = validate(Some(&raw), QueryKind::SearchVolume);
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.data,
        Some(ExtractedPayload::SearchVolume(SearchVolumePayload {
            search_volume: Some(12000.0),
            cpc: None,
            trend: None,
        }))
    );
}

#[test]
fn test_messages_snapshot() {
    let raw = error_envelope(50000, "Internal Error.");
    let results: Vec<_> = QueryKind::ALL
        .iter()
        .map(|kind| validate(Some(&raw), *kind).errors)
        .collect();
    insta::assert_json_snapshot!(results, @r#"
    [
      [
        "Search Volume API error: Internal Error."
      ],
      [
        "Keyword Difficulty API error: Internal Error."
      ],
      [
        "Trends API error: Internal Error."
      ],
      [
        "Demographics API error: Internal Error."
      ],
      [
        "Related Keywords API error: Internal Error."
      ]
    ]
    "#);
}

#[test]
fn test_unreadable_trend_date_is_reported() {
    let mut raw = trends_response();
    raw["tasks"][0]["result"][0]["items"][0]["items"][2]["date_from"] = json!("03/2023");
    let result = validate(Some(&raw), QueryKind::Trends);
    assert!(result.is_valid);
    assert_eq!(result.data, Some(ExtractedPayload::Trends(Vec::new())));
    insta::assert_json_snapshot!(result.warnings, @r#"
    [
      "Trends data skipped months without a usable date: 1",
      "Trends data incomplete: expected 12 months, found 11"
    ]
    "#);
}
