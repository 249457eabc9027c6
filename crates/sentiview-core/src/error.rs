use thiserror::Error;

/// Validation and contract errors exposed by `sentiview-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("invalid trend '{value}', expected one of up, down")]
    InvalidTrend { value: String },
    #[error("date must be ISO-8601 YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("unsupported locale '{value}', expected one of en-US, en-GB, en-IN, de-DE, de-CH, fr-FR")]
    UnsupportedLocale { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be greater than zero")]
    NonPositiveValue { field: &'static str },
    #[error("field '{field}' must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("sentiment distribution must sum to 100, got {total}")]
    DistributionSum { total: u32 },
    #[error("timeline entry {index} is not after the previous entry")]
    TimelineNotChronological { index: usize },
    #[error("company id '{id}' is registered more than once")]
    DuplicateCompany { id: String },

    #[error("route table must contain at least one route")]
    EmptyRouteTable,
    #[error("route path must start with '/': '{path}'")]
    InvalidRoutePath { path: String },
    #[error("route {kind} '{value}' is declared more than once")]
    DuplicateRoute { kind: &'static str, value: String },

    #[error("request_id cannot be blank")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
