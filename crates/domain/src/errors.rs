use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Aggregation request failed: {0}")]
    FetchFailed(String),

    #[error("Malformed aggregation response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
