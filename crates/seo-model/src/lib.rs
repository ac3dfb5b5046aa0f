pub mod error;
pub mod kind;
pub mod overview;
pub mod payload;
pub mod validation;

pub use error::{Result, SeoError};
pub use kind::QueryKind;
pub use overview::KeywordOverview;
pub use payload::{
    AgeBracket, DifficultyPayload, ExtractedPayload, RelatedKeyword, SearchVolumePayload,
    TrendPoint,
};
pub use validation::{IssueSeverity, OverviewReport, ValidationResult};
