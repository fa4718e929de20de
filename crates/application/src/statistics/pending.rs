use dnsmon_domain::ClientCandidate;
use std::collections::BTreeSet;

/// Staging buffer for the client multi-select editor.
///
/// Created as a copy of the committed client scope when the dropdown opens.
/// Checkbox toggles mutate only this draft; the committed scope stays
/// untouched until a close commits the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSelection {
    draft: BTreeSet<String>,
    text_filter: String,
}

impl PendingSelection {
    pub fn from_committed(committed: &BTreeSet<String>) -> Self {
        Self {
            draft: committed.clone(),
            text_filter: String::new(),
        }
    }

    pub fn toggle(&mut self, client_ip: &str) {
        if !self.draft.remove(client_ip) {
            self.draft.insert(client_ip.to_string());
        }
    }

    pub fn is_selected(&self, client_ip: &str) -> bool {
        self.draft.contains(client_ip)
    }

    pub fn set_text_filter(&mut self, needle: &str) {
        self.text_filter = needle.trim().to_string();
    }

    pub fn text_filter(&self) -> &str {
        &self.text_filter
    }

    /// Resolve the value a close commits. An active text filter overrides
    /// the checkbox draft: the commit selects every candidate matching it.
    pub fn commit(self, candidates: &[ClientCandidate]) -> BTreeSet<String> {
        if self.text_filter.is_empty() {
            return self.draft;
        }
        candidates
            .iter()
            .filter(|candidate| candidate.matches_filter(&self.text_filter))
            .map(|candidate| candidate.client_ip.clone())
            .collect()
    }
}

/// Client-scope editor state machine. Every close path commits the pending
/// buffer; there is no cancel affordance.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEditor {
    Closed,
    Open(PendingSelection),
}

impl ClientEditor {
    pub fn is_open(&self) -> bool {
        matches!(self, ClientEditor::Open(_))
    }
}
