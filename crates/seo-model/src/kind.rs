//! Query kinds served by the provider.
//!
//! Every overview request fans out to one provider call per kind. The kind
//! name doubles as the key in `apiStatus` maps, so the serialized form must
//! stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five provider query categories.
///
/// Declaration order is the canonical kind order used when merging results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryKind {
    /// Monthly search volume, CPC and yearly trend for one keyword.
    SearchVolume,
    /// Keyword difficulty score (0-100).
    Difficulty,
    /// Twelve months of relative interest.
    Trends,
    /// Audience split by age bracket.
    Demographics,
    /// Keyword ideas with their own metrics.
    RelatedKeywords,
}

impl QueryKind {
    /// All kinds in canonical order.
    pub const ALL: [QueryKind; 5] = [
        QueryKind::SearchVolume,
        QueryKind::Difficulty,
        QueryKind::Trends,
        QueryKind::Demographics,
        QueryKind::RelatedKeywords,
    ];

    /// Map key used in `apiStatus`.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::SearchVolume => "searchVolume",
            QueryKind::Difficulty => "difficulty",
            QueryKind::Trends => "trends",
            QueryKind::Demographics => "demographics",
            QueryKind::RelatedKeywords => "relatedKeywords",
        }
    }

    /// Human label used as the prefix of error messages.
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::SearchVolume => "Search Volume",
            QueryKind::Difficulty => "Keyword Difficulty",
            QueryKind::Trends => "Trends",
            QueryKind::Demographics => "Demographics",
            QueryKind::RelatedKeywords => "Related Keywords",
        }
    }

    /// Key under which the raw response travels in an overview bundle.
    ///
    /// Differs from [`QueryKind::as_str`] only for related keywords.
    pub fn bundle_key(&self) -> &'static str {
        match self {
            QueryKind::RelatedKeywords => "related",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = String;

    /// Accepts the map key, the bundle key, and kebab/snake spellings
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "searchvolume" | "volume" => Ok(QueryKind::SearchVolume),
            "difficulty" | "keyworddifficulty" => Ok(QueryKind::Difficulty),
            "trends" | "trend" => Ok(QueryKind::Trends),
            "demographics" | "demography" => Ok(QueryKind::Demographics),
            "relatedkeywords" | "related" => Ok(QueryKind::RelatedKeywords),
            _ => Err(format!("unknown query kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_spelling() {
        assert_eq!("searchVolume".parse::<QueryKind>(), Ok(QueryKind::SearchVolume));
        assert_eq!("search-volume".parse::<QueryKind>(), Ok(QueryKind::SearchVolume));
        assert_eq!("related".parse::<QueryKind>(), Ok(QueryKind::RelatedKeywords));
        assert_eq!("related_keywords".parse::<QueryKind>(), Ok(QueryKind::RelatedKeywords));
        assert_eq!(" Trends ".parse::<QueryKind>(), Ok(QueryKind::Trends));
        assert!("backlinks".parse::<QueryKind>().is_err());
    }

    #[test]
    fn serializes_as_map_key() {
        for kind in QueryKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut kinds = QueryKind::ALL.to_vec();
        kinds.reverse();
        kinds.sort();
        assert_eq!(kinds, QueryKind::ALL.to_vec());
    }
}
