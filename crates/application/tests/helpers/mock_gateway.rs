#![allow(dead_code)]

use async_trait::async_trait;
use dnsmon_application::ports::{AggregationGateway, ClientWindowQuery, StatisticsQuery};
use dnsmon_domain::statistics::{DailyBucket, TopDomain};
use dnsmon_domain::{ClientCandidate, DomainError, Statistics};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Pauses one gateway call until released. `entered` fires when the call is
/// in flight; `release` lets it resolve. Both notifications store a permit,
/// so signal/await order does not race.
pub struct Gate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Gate {
    fn pair() -> (Gate, Gate) {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        (
            Gate {
                entered: entered.clone(),
                release: release.clone(),
            },
            Gate { entered, release },
        )
    }
}

#[derive(Clone, Default)]
pub struct MockAggregationGateway {
    clients_by_period: Arc<Mutex<HashMap<String, Vec<ClientCandidate>>>>,
    client_queue: Arc<Mutex<VecDeque<Result<Vec<ClientCandidate>, DomainError>>>>,
    statistics_queue: Arc<Mutex<VecDeque<Result<Statistics, DomainError>>>>,
    client_gates: Arc<Mutex<VecDeque<Gate>>>,
    statistics_gates: Arc<Mutex<VecDeque<Gate>>>,
    client_calls: Arc<Mutex<Vec<ClientWindowQuery>>>,
    statistics_calls: Arc<Mutex<Vec<StatisticsQuery>>>,
}

impl MockAggregationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the candidate list returned for a period key ("24h", "7d",
    /// "30d", "custom"), regardless of call order.
    pub fn set_clients_for(&self, period_key: &str, ips: &[&str]) {
        let candidates = ips
            .iter()
            .map(|ip| ClientCandidate {
                client_ip: ip.to_string(),
                client_hostname: None,
                count: 1,
            })
            .collect();
        self.clients_by_period
            .lock()
            .unwrap()
            .insert(period_key.to_string(), candidates);
    }

    pub fn set_candidates_for(&self, period_key: &str, candidates: Vec<ClientCandidate>) {
        self.clients_by_period
            .lock()
            .unwrap()
            .insert(period_key.to_string(), candidates);
    }

    /// Queue a one-shot response consumed by the next unkeyed client fetch.
    pub fn push_client_error(&self, message: &str) {
        self.client_queue
            .lock()
            .unwrap()
            .push_back(Err(DomainError::FetchFailed(message.to_string())));
    }

    pub fn push_statistics(&self, statistics: Statistics) {
        self.statistics_queue
            .lock()
            .unwrap()
            .push_back(Ok(statistics));
    }

    pub fn push_statistics_error(&self, message: &str) {
        self.statistics_queue
            .lock()
            .unwrap()
            .push_back(Err(DomainError::FetchFailed(message.to_string())));
    }

    pub fn gate_next_clients(&self) -> Gate {
        let (test_half, mock_half) = Gate::pair();
        self.client_gates.lock().unwrap().push_back(mock_half);
        test_half
    }

    pub fn gate_next_statistics(&self) -> Gate {
        let (test_half, mock_half) = Gate::pair();
        self.statistics_gates.lock().unwrap().push_back(mock_half);
        test_half
    }

    pub fn client_calls(&self) -> Vec<ClientWindowQuery> {
        self.client_calls.lock().unwrap().clone()
    }

    pub fn statistics_calls(&self) -> Vec<StatisticsQuery> {
        self.statistics_calls.lock().unwrap().clone()
    }

    pub fn client_call_count(&self) -> usize {
        self.client_calls.lock().unwrap().len()
    }

    pub fn statistics_call_count(&self) -> usize {
        self.statistics_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AggregationGateway for MockAggregationGateway {
    async fn fetch_clients(
        &self,
        query: &ClientWindowQuery,
    ) -> Result<Vec<ClientCandidate>, DomainError> {
        self.client_calls.lock().unwrap().push(query.clone());

        // Bind the response at issue time so gated calls cannot steal a
        // later call's scripted value.
        let period_key = query
            .period
            .as_query_value()
            .unwrap_or("custom")
            .to_string();
        let response = match self.clients_by_period.lock().unwrap().get(&period_key) {
            Some(candidates) => Ok(candidates.clone()),
            None => self
                .client_queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new())),
        };

        let gate = self.client_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        response
    }

    async fn fetch_statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Statistics, DomainError> {
        self.statistics_calls.lock().unwrap().push(query.clone());

        let response = self
            .statistics_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Statistics::default()));

        let gate = self.statistics_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        response
    }
}

/// A recognizably non-empty statistics payload tagged by `total`.
pub fn sample_statistics(total: u64) -> Statistics {
    Statistics {
        queries_total: total,
        queries_today: total,
        top_domains: vec![TopDomain {
            domain: "example.com".to_string(),
            count: total,
        }],
        queries_daily: vec![DailyBucket {
            date: "2026-03-01".to_string(),
            queries: total,
            blocked: total / 10,
        }],
        ..Statistics::default()
    }
}
