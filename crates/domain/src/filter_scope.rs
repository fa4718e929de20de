use crate::period::Period;
use crate::time_range::TimeRange;
use std::collections::BTreeSet;

/// Which upstream servers a query covers.
///
/// "All servers" is a distinguished variant, not an empty collection: a
/// `Subset` is never empty and never equal to the full configured roster.
/// Both degenerate forms normalize back to `AllServers`, which keeps the
/// omitted wire parameter unambiguous ("no filter", never "filter to
/// nothing").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerScope {
    AllServers,
    Subset(BTreeSet<String>),
}

impl ServerScope {
    pub fn is_all(&self) -> bool {
        matches!(self, ServerScope::AllServers)
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            ServerScope::AllServers => true,
            ServerScope::Subset(names) => names.contains(name),
        }
    }

    /// Toggle one server's membership, normalizing against the configured
    /// roster. Toggling from `AllServers` deselects the named server out of
    /// the full roster.
    pub fn toggle(&self, name: &str, roster: &[String]) -> ServerScope {
        let mut names: BTreeSet<String> = match self {
            ServerScope::AllServers => roster.iter().cloned().collect(),
            ServerScope::Subset(names) => names.clone(),
        };
        if !names.remove(name) {
            names.insert(name.to_string());
        }
        Self::normalized(names, roster)
    }

    /// The empty subset and the full roster both mean "all servers".
    pub fn normalized(names: BTreeSet<String>, roster: &[String]) -> ServerScope {
        if names.is_empty() || roster.iter().all(|server| names.contains(server)) {
            ServerScope::AllServers
        } else {
            ServerScope::Subset(names)
        }
    }

    /// Server names to send on the wire, `None` for "all servers".
    pub fn selected(&self) -> Option<Vec<String>> {
        match self {
            ServerScope::AllServers => None,
            ServerScope::Subset(names) => Some(names.iter().cloned().collect()),
        }
    }
}

impl Default for ServerScope {
    fn default() -> Self {
        ServerScope::AllServers
    }
}

/// The resolved, query-ready filter state for the statistics view.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterScope {
    pub period: Period,
    /// Present only when `period == Custom` and a range has been applied.
    pub custom_range: Option<TimeRange>,
    pub servers: ServerScope,
    pub clients: BTreeSet<String>,
}

impl FilterScope {
    /// True while a custom period is selected but no range has been applied
    /// yet. Nothing is resolvable in this state, so no fetch runs.
    pub fn awaiting_custom_range(&self) -> bool {
        self.period.is_custom() && self.custom_range.is_none()
    }

    /// Client ips to send, or `None` when the selection is semantically
    /// "no filter": an empty selection (which only arises alongside an empty
    /// or fully deselected universe) or a selection covering the whole
    /// candidate universe.
    pub fn client_filter(&self, universe_size: usize) -> Option<Vec<String>> {
        if self.clients.is_empty() || self.clients.len() >= universe_size {
            return None;
        }
        Some(self.clients.iter().cloned().collect())
    }
}

impl Default for FilterScope {
    fn default() -> Self {
        Self {
            period: Period::Last24h,
            custom_range: None,
            servers: ServerScope::AllServers,
            clients: BTreeSet::new(),
        }
    }
}
