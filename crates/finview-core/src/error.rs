use thiserror::Error;

/// Validation and contract errors exposed by `finview-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("point label cannot be empty")]
    EmptyLabel,
    #[error("point field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("invalid timeframe '{value}', expected one of 1W, 1M, 3M, YTD")]
    InvalidTimeframe { value: String },

    #[error("axis domain requires at least one visible point")]
    EmptyVisibleSet,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
}
