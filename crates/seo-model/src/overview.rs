//! The keyword overview document persisted after an overview request.
//!
//! Sections whose response failed validation are left empty so the
//! dashboard can render its "no data" state for them.

use serde::{Deserialize, Serialize};

use crate::kind::QueryKind;
use crate::payload::{AgeBracket, ExtractedPayload, RelatedKeyword, TrendPoint};
use crate::validation::OverviewReport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOverview {
    pub keyword: String,
    pub search_volume: Option<f64>,
    pub cpc: Option<f64>,
    pub trend: Option<f64>,
    pub difficulty: Option<f64>,
    pub trends: Vec<TrendPoint>,
    pub demographics: Vec<AgeBracket>,
    pub related_keywords: Vec<RelatedKeyword>,
}

impl OverviewReport {
    /// Payload of a kind whose response validated.
    pub fn payload(&self, kind: QueryKind) -> Option<&ExtractedPayload> {
        self.status(kind)
            .filter(|result| result.is_valid)
            .and_then(|result| result.data.as_ref())
    }

    /// Collect the validated payloads into one overview document.
    pub fn overview(&self) -> KeywordOverview {
        let volume = self
            .payload(QueryKind::SearchVolume)
            .and_then(ExtractedPayload::as_search_volume)
            .copied()
            .unwrap_or_default();
        let difficulty = self
            .payload(QueryKind::Difficulty)
            .and_then(ExtractedPayload::as_difficulty)
            .and_then(|payload| payload.difficulty);
        KeywordOverview {
            keyword: self.keyword.clone(),
            search_volume: volume.search_volume,
            cpc: volume.cpc,
            trend: volume.trend,
            difficulty,
            trends: self
                .payload(QueryKind::Trends)
                .and_then(ExtractedPayload::as_trends)
                .map(<[TrendPoint]>::to_vec)
                .unwrap_or_default(),
            demographics: self
                .payload(QueryKind::Demographics)
                .and_then(ExtractedPayload::as_demographics)
                .map(<[AgeBracket]>::to_vec)
                .unwrap_or_default(),
            related_keywords: self
                .payload(QueryKind::RelatedKeywords)
                .and_then(ExtractedPayload::as_related_keywords)
                .map(<[RelatedKeyword]>::to_vec)
                .unwrap_or_default(),
        }
    }
}
