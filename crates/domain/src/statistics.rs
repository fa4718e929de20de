use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDomain {
    pub domain: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopClient {
    pub client_ip: String,
    #[serde(default)]
    pub client_hostname: Option<String>,
    pub count: u64,
}

/// One hourly time-series bucket (24h period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    pub hour: String,
    pub queries: u64,
    pub blocked: u64,
}

/// One daily time-series bucket (7d/30d/custom periods).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: String,
    pub queries: u64,
    pub blocked: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerBreakdown {
    pub server: String,
    pub queries: u64,
    pub blocked: u64,
    pub cached: u64,
}

/// Aggregated statistics for a fully resolved filter scope.
///
/// Opaque to the coordinator: it caches and displays this payload as a
/// whole, replacing it all-or-nothing. No client identity is retained here
/// beyond the top-N summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub queries_today: u64,
    pub queries_week: u64,
    pub queries_month: u64,
    pub queries_total: u64,
    pub blocked_today: u64,
    pub blocked_percentage: f64,

    #[serde(default)]
    pub queries_hourly: Vec<HourlyBucket>,
    #[serde(default)]
    pub queries_daily: Vec<DailyBucket>,

    #[serde(default)]
    pub top_domains: Vec<TopDomain>,
    #[serde(default)]
    pub top_blocked_domains: Vec<TopDomain>,
    #[serde(default)]
    pub top_clients: Vec<TopClient>,

    #[serde(default)]
    pub queries_by_server: Vec<ServerBreakdown>,

    pub unique_clients: u64,
    #[serde(default)]
    pub most_active_client: Option<TopClient>,
    pub new_clients_24h: u64,
}

impl Statistics {
    /// A valid response with zero observations, rendered as "no data"
    /// rather than as an error.
    pub fn is_empty(&self) -> bool {
        self.queries_hourly.is_empty()
            && self.queries_daily.is_empty()
            && self.top_domains.is_empty()
    }
}
