use super::filter_state::FilterState;
use crate::ports::AggregationGateway;
use chrono::{DateTime, Utc};
use dnsmon_domain::{ClientCandidate, DomainError, FilterScope, Period, Statistics};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Coordinates the statistics view's three filter dimensions and the two
/// aggregation fetches behind them.
///
/// The refresh chain is single-writer, single-trigger: a period/server
/// change reloads the client candidates, the candidate reload is the only
/// writer of the client scope on that path, and a client-scope write is the
/// only trigger for a statistics fetch. One fetch per change, causally
/// ordered, with no second listener on period/server that could double-fetch.
///
/// Every scope-changing operation takes a fresh generation token while
/// holding the state lock; a response is committed only if its token is
/// still current at resolution time. Last write wins by issue order, not
/// arrival order. Locks are never held across an await.
pub struct StatsCoordinator {
    gateway: Arc<dyn AggregationGateway>,
    state: RwLock<FilterState>,
    generation: AtomicU64,
}

/// Cloned, display-ready snapshot of the coordinator state.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub scope: FilterScope,
    pub candidates: Vec<ClientCandidate>,
    pub statistics: Option<Statistics>,
    pub error: Option<DomainError>,
    pub loading: bool,
    /// Committed selection size; unaffected by an open editor.
    pub selected_clients: usize,
    pub editor_open: bool,
    pub no_data: bool,
}

impl StatsCoordinator {
    pub fn new(gateway: Arc<dyn AggregationGateway>, roster: Vec<String>) -> Self {
        Self {
            gateway,
            state: RwLock::new(FilterState::new(roster)),
            generation: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> StatsView {
        let state = self.read();
        StatsView {
            scope: state.scope.clone(),
            candidates: state.candidates.clone(),
            statistics: state.statistics.clone(),
            error: state.error.clone(),
            loading: state.loading_clients || state.loading_statistics,
            selected_clients: state.selected_client_count(),
            editor_open: state.editor.is_open(),
            no_data: state.has_no_data(),
        }
    }

    /// Resolve the default scope (last 24h, all servers, all clients) and
    /// load the first statistics payload.
    pub async fn initialize(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.resolve_dependencies(generation).await;
    }

    pub async fn select_preset(&self, period: Period) {
        let issued = self.mutate_scope(|state| state.select_preset(period));
        if let Some(generation) = issued {
            debug!(period = %period, "period preset applied");
            self.resolve_dependencies(generation).await;
        }
    }

    pub fn open_custom_editor(&self) {
        self.write().open_custom_editor();
    }

    /// Apply an explicit custom range. Validation failures are returned
    /// before any fetch and leave the applied scope untouched.
    pub async fn apply_custom_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let issued = {
            let mut state = self.write();
            if state.apply_custom_range(from, to)? {
                Some(self.next_generation())
            } else {
                None
            }
        };
        if let Some(generation) = issued {
            debug!(%from, %to, "custom range applied");
            self.resolve_dependencies(generation).await;
        }
        Ok(())
    }

    pub async fn toggle_server(&self, name: &str) {
        let issued = self.mutate_scope(|state| state.toggle_server(name));
        if let Some(generation) = issued {
            debug!(server = %name, "server scope toggled");
            self.resolve_dependencies(generation).await;
        }
    }

    pub async fn select_all_servers(&self) {
        let issued = self.mutate_scope(|state| state.select_all_servers());
        if let Some(generation) = issued {
            self.resolve_dependencies(generation).await;
        }
    }

    pub fn open_client_editor(&self) {
        self.write().open_client_editor();
    }

    pub fn toggle_client(&self, client_ip: &str) {
        self.write().toggle_client(client_ip);
    }

    pub fn set_client_text_filter(&self, needle: &str) {
        self.write().set_client_text_filter(needle);
    }

    /// Commit the pending selection into the client scope and refresh
    /// statistics if the scope changed. Candidates are not reloaded:
    /// the client dimension depends on nothing else.
    pub async fn apply_client_selection(&self) {
        let issued = {
            let mut state = self.write();
            match state.take_editor_commit() {
                Some(committed) if committed != state.scope.clients => {
                    state.scope.clients = committed;
                    Some(self.next_generation())
                }
                _ => None,
            }
        };
        if let Some(generation) = issued {
            self.refresh_statistics(generation).await;
        }
    }

    /// An interaction outside the open editor commits it, same path as an
    /// explicit apply.
    pub async fn handle_outside_interaction(&self) {
        self.apply_client_selection().await;
    }

    /// Re-run the statistics fetch for the currently resolved scope.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.refresh_statistics(generation).await;
    }

    /// Dependency resolution for a period/range/server change: reload the
    /// candidate universe, reset the client scope to all of it, and let that
    /// reset trigger the statistics fetch.
    async fn resolve_dependencies(&self, generation: u64) {
        let query = {
            let mut state = self.write();
            if state.scope.awaiting_custom_range() {
                return;
            }
            state.loading_clients = true;
            state.client_window_query()
        };

        debug!(period = %query.period, servers = ?query.servers, "loading client candidates");
        match self.gateway.fetch_clients(&query).await {
            Ok(candidates) => {
                let committed = {
                    let mut state = self.write();
                    state.loading_clients = false;
                    if self.is_current(generation) {
                        state.apply_candidates(candidates);
                        true
                    } else {
                        false
                    }
                };
                if committed {
                    self.refresh_statistics(generation).await;
                }
            }
            Err(error) => {
                warn!(error = %error, "client candidate fetch failed");
                let mut state = self.write();
                state.loading_clients = false;
                if self.is_current(generation) {
                    state.error = Some(error);
                }
            }
        }
    }

    /// The statistics leg. Entered only from a client-scope write (candidate
    /// reset or editor commit) or a manual refresh.
    async fn refresh_statistics(&self, generation: u64) {
        let query = {
            let mut state = self.write();
            if state.scope.awaiting_custom_range() || !self.is_current(generation) {
                return;
            }
            state.loading_statistics = true;
            state.statistics_query()
        };

        debug!(
            period = %query.period,
            clients = query.clients.as_ref().map(Vec::len),
            "loading statistics"
        );
        match self.gateway.fetch_statistics(&query).await {
            Ok(statistics) => {
                let mut state = self.write();
                state.loading_statistics = false;
                if self.is_current(generation) {
                    state.statistics = Some(statistics);
                    state.error = None;
                }
            }
            Err(error) => {
                warn!(error = %error, "statistics fetch failed");
                let mut state = self.write();
                state.loading_statistics = false;
                if self.is_current(generation) {
                    state.error = Some(error);
                }
            }
        }
    }

    /// Run a synchronous scope mutation; when it reports a change, issue a
    /// new generation while still holding the lock so the bump and the
    /// mutation are observed atomically.
    fn mutate_scope<F>(&self, mutate: F) -> Option<u64>
    where
        F: FnOnce(&mut FilterState) -> bool,
    {
        let mut state = self.write();
        if mutate(&mut state) {
            Some(self.next_generation())
        } else {
            None
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn read(&self) -> RwLockReadGuard<'_, FilterState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, FilterState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
