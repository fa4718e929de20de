use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse time window for statistics queries.
///
/// The three presets map to the aggregation API's `period` parameter
/// ("24h", "7d", "30d"); a custom period is expressed as explicit
/// `from`/`to` bounds instead and has no wire value of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Last24h,
    Last7d,
    Last30d,
    Custom,
}

impl Period {
    /// Wire value for the `period` query parameter, `None` for `Custom`.
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            Period::Last24h => Some("24h"),
            Period::Last7d => Some("7d"),
            Period::Last30d => Some("30d"),
            Period::Custom => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Period::Custom)
    }

    /// Window length in hours for the presets.
    pub fn hours(&self) -> Option<u32> {
        match self {
            Period::Last24h => Some(24),
            Period::Last7d => Some(168),
            Period::Last30d => Some(720),
            Period::Custom => None,
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Last24h
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Custom => write!(f, "custom"),
            other => write!(f, "{}", other.as_query_value().unwrap_or("custom")),
        }
    }
}
