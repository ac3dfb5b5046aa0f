//! Normalized payloads extracted from provider responses.
//!
//! Field names follow what the dashboard consumes: the scalar payloads are
//! camelCase, the list rows keep the provider's snake_case names.

use serde::{Deserialize, Serialize};

/// Search volume metrics for a single keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVolumePayload {
    pub search_volume: Option<f64>,
    pub cpc: Option<f64>,
    /// Year-over-year change in percent.
    pub trend: Option<f64>,
}

/// Keyword difficulty score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPayload {
    pub difficulty: Option<f64>,
}

/// One month of trend data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Three-letter month abbreviation.
    pub month: String,
    pub volume: f64,
    pub trend: f64,
}

/// Share of the audience in one age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub age_group: String,
    pub percentage: f64,
}

/// A keyword idea returned by the related-keywords endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub search_volume: f64,
    /// Competition in the range 0.0-1.0.
    pub competition: f64,
    pub cpc: f64,
    pub trend: f64,
    pub related_keywords: Vec<String>,
}

/// Payload produced for one query kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedPayload {
    SearchVolume(SearchVolumePayload),
    Difficulty(DifficultyPayload),
    Trends(Vec<TrendPoint>),
    Demographics(Vec<AgeBracket>),
    RelatedKeywords(Vec<RelatedKeyword>),
}

impl ExtractedPayload {
    pub fn as_search_volume(&self) -> Option<&SearchVolumePayload> {
        match self {
            ExtractedPayload::SearchVolume(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn as_difficulty(&self) -> Option<&DifficultyPayload> {
        match self {
            ExtractedPayload::Difficulty(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn as_trends(&self) -> Option<&[TrendPoint]> {
        match self {
            ExtractedPayload::Trends(points) => Some(points),
            _ => None,
        }
    }

    pub fn as_demographics(&self) -> Option<&[AgeBracket]> {
        match self {
            ExtractedPayload::Demographics(brackets) => Some(brackets),
            _ => None,
        }
    }

    pub fn as_related_keywords(&self) -> Option<&[RelatedKeyword]> {
        match self {
            ExtractedPayload::RelatedKeywords(keywords) => Some(keywords),
            _ => None,
        }
    }

    /// True when nothing usable was extracted.
    pub fn is_empty(&self) -> bool {
        match self {
            ExtractedPayload::SearchVolume(payload) => {
                payload.search_volume.is_none() && payload.cpc.is_none() && payload.trend.is_none()
            }
            ExtractedPayload::Difficulty(payload) => payload.difficulty.is_none(),
            ExtractedPayload::Trends(points) => points.is_empty(),
            ExtractedPayload::Demographics(brackets) => brackets.is_empty(),
            ExtractedPayload::RelatedKeywords(keywords) => keywords.is_empty(),
        }
    }
}
