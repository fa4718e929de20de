use serde::{Deserialize, Serialize};

/// A client observed in the currently resolved period/server window.
///
/// The candidate list is derived state: it is replaced wholesale whenever
/// period, custom range, or server scope changes, and its ips seed the
/// client scope. `count` is used for display ordering only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCandidate {
    pub client_ip: String,
    #[serde(default)]
    pub client_hostname: Option<String>,
    pub count: u64,
}

impl ClientCandidate {
    /// Case-insensitive match against the editor's free-text filter, over
    /// both the ip and the hostname.
    pub fn matches_filter(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        if self.client_ip.to_lowercase().contains(&needle) {
            return true;
        }
        self.client_hostname
            .as_deref()
            .map(|name| name.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }
}
