//! Provider response fixtures shared by the integration tests.

#![allow(dead_code)]

use seo_model::QueryKind;
use seo_validate::OverviewBundle;
use serde_json::{Value, json};

pub const TREND_VALUES: [u32; 12] = [85, 80, 78, 82, 90, 95, 100, 97, 88, 84, 83, 86];

/// Successful envelope wrapping a single task result.
pub fn envelope(result: Value) -> Value {
    json!({
        "version": "0.1.20240801",
        "status_code": 20000,
        "status_message": "Ok.",
        "time": "0.1 sec.",
        "cost": 0.0103,
        "tasks_count": 1,
        "tasks_error": 0,
        "tasks": [{
            "id": "08011200-1535-0367-0000-a0c4ac4f8a77",
            "status_code": 20000,
            "status_message": "Ok.",
            "result_count": 1,
            "result": [result]
        }]
    })
}

/// Envelope whose task failed on the provider side.
pub fn error_envelope(status_code: u32, status_message: &str) -> Value {
    json!({
        "version": "0.1.20240801",
        "status_code": 20000,
        "status_message": "Ok.",
        "tasks": [{
            "status_code": status_code,
            "status_message": status_message,
            "result": null
        }]
    })
}

pub fn empty_tasks() -> Value {
    json!({"version": "0.1.20240801", "status_code": 20000, "tasks": []})
}

pub fn search_volume_response() -> Value {
    envelope(json!({
        "keyword": "seo tools",
        "location_code": 2276,
        "language_code": "de",
        "keyword_info": {
            "search_volume": 12000,
            "cpc": 1.50,
            "competition": 0.43,
            "competition_level": "MEDIUM",
            "search_volume_trend": {"monthly": 0, "quarterly": 5, "yearly": 15.5}
        }
    }))
}

pub fn difficulty_response() -> Value {
    envelope(json!({
        "keyword": "seo tools",
        "keyword_difficulty": 45
    }))
}

pub fn trends_response() -> Value {
    let buckets: Vec<Value> = TREND_VALUES
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let month = index + 1;
            json!({
                "date_from": format!("2023-{month:02}-01"),
                "date_to": format!("2023-{month:02}-28"),
                "timestamp": 1_672_531_200 + index * 2_592_000,
                "values": [value]
            })
        })
        .collect();
    envelope(json!({
        "keywords": ["seo tools"],
        "type": "google_trends",
        "items": [{
            "type": "google_trends_graph",
            "title": "Interest over time",
            "keywords": ["seo tools"],
            "items": buckets
        }]
    }))
}

pub fn demographics_response() -> Value {
    envelope(json!({
        "keywords": ["seo tools"],
        "items": [{
            "type": "demography",
            "demography": {
                "age": [{
                    "keyword": "seo tools",
                    "values": [
                        {"type": "18-24", "value": 11},
                        {"type": "25-34", "value": 20},
                        {"type": "35-44", "value": 50},
                        {"type": "45-54", "value": 10},
                        {"type": "55-64", "value": 6},
                        {"type": "65+", "value": 3}
                    ]
                }],
                "gender": [{
                    "keyword": "seo tools",
                    "values": [
                        {"type": "female", "value": 40},
                        {"type": "male", "value": 60}
                    ]
                }]
            }
        }]
    }))
}

fn related_item(keyword: &str, volume: u32, cpc: f64, level: &str, yearly: f64, related: &[&str]) -> Value {
    json!({
        "se_type": "google",
        "keyword_data": {
            "keyword": keyword,
            "keyword_info": {
                "search_volume": volume,
                "cpc": cpc,
                "competition_level": level,
                "search_volume_trend": {"monthly": 0, "quarterly": 0, "yearly": yearly}
            }
        },
        "depth": 1,
        "related_keywords": related
    })
}

pub fn related_keywords_response() -> Value {
    envelope(json!({
        "seed_keyword": "seo tools",
        "total_count": 3,
        "items_count": 3,
        "items": [
            related_item("seo software", 5400, 2.1, "MEDIUM", 10.0, &["best seo software", "seo software free"]),
            related_item("seo checker", 8100, 0.9, "LOW", -5.0, &["free seo checker"]),
            related_item("seo audit", 2900, 3.4, "HIGH", 22.0, &[])
        ]
    }))
}

/// Response for `kind` whose result body is `{}`.
pub fn empty_result_response() -> Value {
    envelope(json!({}))
}

pub fn complete_bundle() -> OverviewBundle {
    OverviewBundle::new("seo tools")
        .with(QueryKind::SearchVolume, search_volume_response())
        .with(QueryKind::Difficulty, difficulty_response())
        .with(QueryKind::Trends, trends_response())
        .with(QueryKind::Demographics, demographics_response())
        .with(QueryKind::RelatedKeywords, related_keywords_response())
}

pub fn response_for(kind: QueryKind) -> Value {
    match kind {
        QueryKind::SearchVolume => search_volume_response(),
        QueryKind::Difficulty => difficulty_response(),
        QueryKind::Trends => trends_response(),
        QueryKind::Demographics => demographics_response(),
        QueryKind::RelatedKeywords => related_keywords_response(),
    }
}
