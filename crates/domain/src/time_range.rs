use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Explicit time window for custom-period queries.
///
/// Invariant: `from < to` and `to` is not in the future. A `TimeRange` can
/// only be constructed through validation, so a stored range is always
/// resolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, DomainError> {
        Self::validated_at(from, to, Utc::now())
    }

    /// Validation against an explicit clock, so callers and tests agree on "now".
    pub fn validated_at(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if from >= to {
            return Err(DomainError::InvalidTimeRange(format!(
                "start {} is not before end {}",
                from, to
            )));
        }
        if to > now {
            return Err(DomainError::InvalidTimeRange(format!(
                "end {} is in the future",
                to
            )));
        }
        Ok(Self { from, to })
    }
}
