//! Caller-owned dismissal tracking
//!
//! The engine recomputes alerts every cycle; which alerts the user has
//! dismissed is state the caller persists between cycles, keyed on the
//! stable alert id. The engine only ever consumes it as read-only filter
//! input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Set of dismissed alert ids.
///
/// Serializes as a plain id array so callers can persist it wherever they
/// keep session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DismissalSet {
    ids: HashSet<String>,
}

impl DismissalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an alert id as dismissed.
    pub fn dismiss(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    /// Un-dismiss an alert id. Returns true if it was present.
    pub fn restore(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Whether the id has been dismissed.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot as a plain id set, for use as `AlertFilter::dismissed_ids`.
    pub fn to_id_set(&self) -> HashSet<String> {
        self.ids.clone()
    }
}

impl FromIterator<String> for DismissalSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
