use async_trait::async_trait;
use dnsmon_domain::{ClientCandidate, DomainError, Period, Statistics, TimeRange};

/// Window parameters for the candidate-client query.
///
/// Carries everything except the client scope: candidates are always the
/// full universe for the resolved period/server dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientWindowQuery {
    pub period: Period,
    pub range: Option<TimeRange>,
    /// `None` means "all servers".
    pub servers: Option<Vec<String>>,
}

/// Fully shaped parameters for the aggregated-statistics query.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub period: Period,
    pub range: Option<TimeRange>,
    /// `None` means "all servers".
    pub servers: Option<Vec<String>>,
    /// `None` means "no client filter"; when present the list is
    /// deduplicated and deterministically ordered.
    pub clients: Option<Vec<String>>,
}

/// Read-side port to the aggregation service. Both calls are idempotent and
/// safe to repeat; timeouts are the implementation's concern.
#[async_trait]
pub trait AggregationGateway: Send + Sync {
    async fn fetch_clients(
        &self,
        query: &ClientWindowQuery,
    ) -> Result<Vec<ClientCandidate>, DomainError>;

    async fn fetch_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Statistics, DomainError>;
}
