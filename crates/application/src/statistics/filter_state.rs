use super::pending::{ClientEditor, PendingSelection};
use crate::ports::{ClientWindowQuery, StatisticsQuery};
use chrono::{DateTime, Utc};
use dnsmon_domain::{
    ClientCandidate, DomainError, FilterScope, Period, ServerScope, Statistics, TimeRange,
};
use std::collections::BTreeSet;

/// Mutable state behind the statistics view: the applied filter scope, the
/// derived candidate universe, the selection editors, and the displayed
/// payload. Every mutation here is synchronous; async sequencing lives in
/// the coordinator.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub scope: FilterScope,
    pub candidates: Vec<ClientCandidate>,
    pub editor: ClientEditor,
    pub custom_editor_open: bool,
    pub statistics: Option<Statistics>,
    pub error: Option<DomainError>,
    pub loading_clients: bool,
    pub loading_statistics: bool,
    roster: Vec<String>,
}

impl FilterState {
    pub fn new(roster: Vec<String>) -> Self {
        Self {
            scope: FilterScope::default(),
            candidates: Vec::new(),
            editor: ClientEditor::Closed,
            custom_editor_open: false,
            statistics: None,
            error: None,
            loading_clients: false,
            loading_statistics: false,
            roster,
        }
    }

    /// Switch to a preset period. Returns whether the dimension actually
    /// changed (only a change warrants a dependency reload). `Custom` is not
    /// a preset: it only becomes active through `apply_custom_range`.
    pub fn select_preset(&mut self, period: Period) -> bool {
        if period.is_custom() {
            return false;
        }
        self.custom_editor_open = false;
        if self.scope.period == period {
            return false;
        }
        self.scope.period = period;
        self.scope.custom_range = None;
        true
    }

    pub fn open_custom_editor(&mut self) {
        self.custom_editor_open = true;
    }

    /// Validate and apply an explicit range. On failure nothing changes; on
    /// success returns whether the resolved window differs from the applied
    /// one.
    pub fn apply_custom_range(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let range = TimeRange::new(from, to)?;
        self.custom_editor_open = false;
        if self.scope.period.is_custom() && self.scope.custom_range == Some(range) {
            return Ok(false);
        }
        self.scope.period = Period::Custom;
        self.scope.custom_range = Some(range);
        Ok(true)
    }

    /// Toggle one server in the scope. Returns whether the scope changed
    /// (normalization can make a toggle a net no-op only when the roster is
    /// a single server).
    pub fn toggle_server(&mut self, name: &str) -> bool {
        let toggled = self.scope.servers.toggle(name, &self.roster);
        if toggled == self.scope.servers {
            return false;
        }
        self.scope.servers = toggled;
        true
    }

    pub fn select_all_servers(&mut self) -> bool {
        if self.scope.servers.is_all() {
            return false;
        }
        self.scope.servers = ServerScope::AllServers;
        true
    }

    pub fn open_client_editor(&mut self) {
        if !self.editor.is_open() {
            self.editor = ClientEditor::Open(PendingSelection::from_committed(&self.scope.clients));
        }
    }

    pub fn toggle_client(&mut self, client_ip: &str) {
        if let ClientEditor::Open(pending) = &mut self.editor {
            pending.toggle(client_ip);
        }
    }

    pub fn set_client_text_filter(&mut self, needle: &str) {
        if let ClientEditor::Open(pending) = &mut self.editor {
            pending.set_text_filter(needle);
        }
    }

    /// Close the editor and resolve its commit value, or `None` when no
    /// editor is open.
    pub fn take_editor_commit(&mut self) -> Option<BTreeSet<String>> {
        match std::mem::replace(&mut self.editor, ClientEditor::Closed) {
            ClientEditor::Open(pending) => Some(pending.commit(&self.candidates)),
            ClientEditor::Closed => None,
        }
    }

    /// Committed selection size. Reads the applied scope, never the pending
    /// buffer, so an open editor does not change what the label shows.
    pub fn selected_client_count(&self) -> usize {
        self.scope.clients.len()
    }

    /// Wholesale replacement of the candidate universe. Resets the client
    /// scope to the full new set: changing period or server scope without
    /// re-including every client would silently drop clients absent from
    /// the previous window. Any draft staged against the old universe is
    /// discarded with it.
    pub fn apply_candidates(&mut self, candidates: Vec<ClientCandidate>) {
        self.scope.clients = candidates
            .iter()
            .map(|candidate| candidate.client_ip.clone())
            .collect();
        self.candidates = candidates;
        self.editor = ClientEditor::Closed;
        self.error = None;
    }

    pub fn client_window_query(&self) -> ClientWindowQuery {
        ClientWindowQuery {
            period: self.scope.period,
            range: self.scope.custom_range,
            servers: self.scope.servers.selected(),
        }
    }

    pub fn statistics_query(&self) -> StatisticsQuery {
        StatisticsQuery {
            period: self.scope.period,
            range: self.scope.custom_range,
            servers: self.scope.servers.selected(),
            clients: self.scope.client_filter(self.candidates.len()),
        }
    }

    /// A successful fetch with nothing in it, rendered as "no data" rather
    /// than as an error.
    pub fn has_no_data(&self) -> bool {
        self.error.is_none()
            && self
                .statistics
                .as_ref()
                .map(Statistics::is_empty)
                .unwrap_or(false)
    }
}
