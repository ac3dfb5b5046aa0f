//! Kind-specific payload extraction.
//!
//! Extractors receive `tasks[0].result[0]` (possibly absent) and always
//! return a payload. A missing primary field yields the kind's empty
//! payload plus a warning issue; nothing here can fail.

use chrono::{Datelike, NaiveDate};
use seo_model::{
    AgeBracket, DifficultyPayload, ExtractedPayload, QueryKind, RelatedKeyword,
    SearchVolumePayload, TrendPoint,
};
use serde_json::Value;

use crate::issue::{Issue, TREND_MONTHS};
use crate::json::{array_at, at, number_at, str_at};

/// Month abbreviations shown on the trend chart, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Representative competition value for each provider band.
pub const COMPETITION_LOW: f64 = 0.2;
pub const COMPETITION_MEDIUM: f64 = 0.5;
pub const COMPETITION_HIGH: f64 = 0.8;

/// An extracted payload together with the gaps found while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub payload: T,
    pub issues: Vec<Issue>,
}

impl<T> Extraction<T> {
    fn complete(payload: T) -> Self {
        Self {
            payload,
            issues: Vec::new(),
        }
    }

    fn with_issue(payload: T, issue: Issue) -> Self {
        Self {
            payload,
            issues: vec![issue],
        }
    }

    fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        Extraction {
            payload: f(self.payload),
            issues: self.issues,
        }
    }
}

/// `tasks[0].result[0]` of an envelope.
pub fn first_result(raw: &Value) -> Option<&Value> {
    at(Some(raw), "/tasks/0/result/0")
}

/// Dispatch to the extractor for `kind`.
pub fn extract(kind: QueryKind, result: Option<&Value>) -> Extraction<ExtractedPayload> {
    match kind {
        QueryKind::SearchVolume => search_volume(result).map(ExtractedPayload::SearchVolume),
        QueryKind::Difficulty => difficulty(result).map(ExtractedPayload::Difficulty),
        QueryKind::Trends => trends(result).map(ExtractedPayload::Trends),
        QueryKind::Demographics => demographics(result).map(ExtractedPayload::Demographics),
        QueryKind::RelatedKeywords => {
            related_keywords(result).map(ExtractedPayload::RelatedKeywords)
        }
    }
}

pub fn search_volume(result: Option<&Value>) -> Extraction<SearchVolumePayload> {
    let Some(info) = at(result, "/keyword_info").filter(|node| node.is_object()) else {
        return Extraction::with_issue(
            SearchVolumePayload::default(),
            Issue::DataNotFound {
                kind: QueryKind::SearchVolume,
            },
        );
    };
    let info = Some(info);
    Extraction::complete(SearchVolumePayload {
        search_volume: number_at(info, "/search_volume"),
        cpc: number_at(info, "/cpc"),
        trend: number_at(info, "/search_volume_trend/yearly"),
    })
}

pub fn difficulty(result: Option<&Value>) -> Extraction<DifficultyPayload> {
    match number_at(result, "/keyword_difficulty") {
        Some(value) => Extraction::complete(DifficultyPayload {
            difficulty: Some(value),
        }),
        None => Extraction::with_issue(
            DifficultyPayload::default(),
            Issue::DataNotFound {
                kind: QueryKind::Difficulty,
            },
        ),
    }
}

/// Monthly series from `items[0].items`.
///
/// Buckets are ordered by date. Buckets without a readable `date_from`
/// are skipped and counted. Anything other than a full year of dated
/// buckets is dropped so callers only ever see 0 or 12 points.
pub fn trends(result: Option<&Value>) -> Extraction<Vec<TrendPoint>> {
    let buckets = array_at(result, "/items/0/items").unwrap_or_default();
    if buckets.is_empty() {
        return Extraction::with_issue(
            Vec::new(),
            Issue::DataNotFound {
                kind: QueryKind::Trends,
            },
        );
    }

    let mut dated: Vec<(NaiveDate, TrendPoint)> =
        buckets.iter().filter_map(trend_point).collect();
    let mut issues = Vec::new();
    let undated = buckets.len() - dated.len();
    if undated > 0 {
        issues.push(Issue::UndatedTrendBuckets { count: undated });
    }
    if dated.len() != TREND_MONTHS {
        issues.push(Issue::IncompleteTrends { found: dated.len() });
        return Extraction {
            payload: Vec::new(),
            issues,
        };
    }
    dated.sort_by_key(|(date, _)| *date);
    Extraction {
        payload: dated.into_iter().map(|(_, point)| point).collect(),
        issues,
    }
}

fn trend_point(bucket: &Value) -> Option<(NaiveDate, TrendPoint)> {
    let date = parse_month_start(str_at(Some(bucket), "/date_from")?)?;
    let value = number_at(Some(bucket), "/values/0").unwrap_or(0.0);
    let point = TrendPoint {
        month: month_name(date.month()).to_string(),
        volume: value,
        trend: value,
    };
    Some((date, point))
}

/// Parse the date part of `date_from` (`YYYY-MM-DD`, optionally followed
/// by a time).
fn parse_month_start(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Abbreviation for a 1-based calendar month.
pub fn month_name(month: u32) -> &'static str {
    let index = month.clamp(1, 12) as usize - 1;
    MONTH_NAMES[index]
}

/// Age brackets from `items[0].demography.age[0].values`.
pub fn demographics(result: Option<&Value>) -> Extraction<Vec<AgeBracket>> {
    let values = array_at(result, "/items/0/demography/age/0/values").unwrap_or_default();
    let brackets: Vec<AgeBracket> = values
        .iter()
        .map(|entry| AgeBracket {
            age_group: str_at(Some(entry), "/type").unwrap_or_default().to_string(),
            percentage: number_at(Some(entry), "/value").unwrap_or(0.0),
        })
        .collect();
    if brackets.is_empty() {
        return Extraction::with_issue(
            brackets,
            Issue::DataNotFound {
                kind: QueryKind::Demographics,
            },
        );
    }
    Extraction::complete(brackets)
}

pub fn related_keywords(result: Option<&Value>) -> Extraction<Vec<RelatedKeyword>> {
    let items = array_at(result, "/items").unwrap_or_default();
    let keywords: Vec<RelatedKeyword> = items.iter().map(related_keyword).collect();
    if keywords.is_empty() {
        return Extraction::with_issue(
            keywords,
            Issue::DataNotFound {
                kind: QueryKind::RelatedKeywords,
            },
        );
    }
    Extraction::complete(keywords)
}

fn related_keyword(item: &Value) -> RelatedKeyword {
    let item = Some(item);
    let info = at(item, "/keyword_data/keyword_info");
    RelatedKeyword {
        keyword: str_at(item, "/keyword_data/keyword")
            .unwrap_or_default()
            .to_string(),
        search_volume: number_at(info, "/search_volume").unwrap_or(0.0),
        competition: str_at(info, "/competition_level")
            .map(competition_value)
            .unwrap_or(0.0),
        cpc: number_at(info, "/cpc").unwrap_or(0.0),
        trend: number_at(info, "/search_volume_trend/yearly").unwrap_or(0.0),
        related_keywords: array_at(item, "/related_keywords")
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    }
}

/// Numeric competition for a provider band; unknown bands map to 0.0.
pub fn competition_value(level: &str) -> f64 {
    match level.trim().to_uppercase().as_str() {
        "LOW" => COMPETITION_LOW,
        "MEDIUM" => COMPETITION_MEDIUM,
        "HIGH" => COMPETITION_HIGH,
        _ => 0.0,
    }
}

pub fn extract_search_volume_data(raw: &Value) -> SearchVolumePayload {
    search_volume(first_result(raw)).payload
}

pub fn extract_difficulty_data(raw: &Value) -> DifficultyPayload {
    difficulty(first_result(raw)).payload
}

pub fn extract_trends_data(raw: &Value) -> Vec<TrendPoint> {
    trends(first_result(raw)).payload
}

pub fn extract_demographics_data(raw: &Value) -> Vec<AgeBracket> {
    demographics(first_result(raw)).payload
}

pub fn extract_related_keywords_data(raw: &Value) -> Vec<RelatedKeyword> {
    related_keywords(first_result(raw)).payload
}
