//! REST gateway to the dnsmon aggregation API.
//!
//! Speaks the two read endpoints the statistics view depends on:
//!
//! ```text
//! GET /api/statistics/clients?period=24h&servers=a,b
//! GET /api/statistics?period=24h&servers=a,b&clients=10.0.0.1,10.0.0.2
//! ```
//!
//! Custom periods carry explicit RFC 3339 `from`/`to` bounds instead of a
//! `period` value. Omitted dimensions are omitted parameters, never empty
//! strings.

use async_trait::async_trait;
use dnsmon_application::ports::{AggregationGateway, ClientWindowQuery, StatisticsQuery};
use dnsmon_domain::config::AggregatorConfig;
use dnsmon_domain::{ClientCandidate, DomainError, Period, Statistics, TimeRange};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

pub struct RestAggregationGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestAggregationGateway {
    pub fn new(config: &AggregatorConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, params = pairs.len(), "aggregation request");

        let mut request = self.client.get(&url).query(pairs);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::FetchFailed(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::FetchFailed(format!(
                "{} returned HTTP {}: {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::InvalidResponse(format!("decoding {} response: {}", url, e)))
    }
}

#[async_trait]
impl AggregationGateway for RestAggregationGateway {
    #[instrument(skip_all, name = "fetch_clients", fields(period = %query.period))]
    async fn fetch_clients(
        &self,
        query: &ClientWindowQuery,
    ) -> Result<Vec<ClientCandidate>, DomainError> {
        let pairs = window_pairs(query.period, query.range, query.servers.as_deref());
        let candidates: Vec<ClientCandidate> =
            self.get_json("/api/statistics/clients", &pairs).await?;
        debug!(candidates = candidates.len(), "client window resolved");
        Ok(candidates)
    }

    #[instrument(skip_all, name = "fetch_statistics", fields(period = %query.period))]
    async fn fetch_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Statistics, DomainError> {
        let pairs = statistics_pairs(query);
        self.get_json("/api/statistics", &pairs).await
    }
}

fn window_pairs(
    period: Period,
    range: Option<TimeRange>,
    servers: Option<&[String]>,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(value) = period.as_query_value() {
        pairs.push(("period", value.to_string()));
    }
    if let Some(range) = range {
        pairs.push(("from", range.from.to_rfc3339()));
        pairs.push(("to", range.to.to_rfc3339()));
    }
    if let Some(servers) = servers {
        pairs.push(("servers", servers.join(",")));
    }
    pairs
}

fn statistics_pairs(query: &StatisticsQuery) -> Vec<(&'static str, String)> {
    let mut pairs = window_pairs(query.period, query.range, query.servers.as_deref());
    if let Some(clients) = &query.clients {
        pairs.push(("clients", clients.join(",")));
    }
    pairs
}
