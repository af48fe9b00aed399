//! Reveal Registry
//!
//! Explicit registry of animatable handles. Components register on mount and
//! unregister on unmount; the scheduler reads candidates from here instead
//! of scanning a document tree.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Handle for a registered reveal element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RevealId(u64);

impl RevealId {
    /// Raw numeric value, stable for the lifetime of the registry
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reveal-{}", self.0)
    }
}

/// Animation state of a reveal element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Mounted, waiting to scroll into view
    Pending,
    /// Transition triggered; terminal for this mount
    Active,
}

#[derive(Debug, Clone)]
struct RevealEntry {
    key: String,
    state: RevealState,
    explicit_delay: Option<Duration>,
    delay: Duration,
}

/// Registry of mounted reveal elements, in mount order
#[derive(Debug, Default)]
pub struct RevealRegistry {
    entries: BTreeMap<RevealId, RevealEntry>,
    next_id: u64,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly mounted element. `key` is a label for diagnostics.
    pub fn register(&mut self, key: impl Into<String>) -> RevealId {
        self.insert(key.into(), None)
    }

    /// Register an element whose transition delay is fixed by the page
    /// rather than derived from its position.
    pub fn register_with_delay(&mut self, key: impl Into<String>, delay: Duration) -> RevealId {
        self.insert(key.into(), Some(delay))
    }

    fn insert(&mut self, key: String, explicit_delay: Option<Duration>) -> RevealId {
        let id = RevealId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            RevealEntry {
                key,
                state: RevealState::Pending,
                explicit_delay,
                delay: explicit_delay.unwrap_or_default(),
            },
        );
        id
    }

    /// Remove an element on unmount. Returns false if it was not registered.
    pub fn unregister(&mut self, id: RevealId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Remove everything (whole page unmounted)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Elements still waiting for activation, in mount order
    pub fn pending(&self) -> Vec<RevealId> {
        self.entries
            .iter()
            .filter(|(_, e)| e.state == RevealState::Pending)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Assign stagger delays to the pending candidates.
    ///
    /// The n-th candidate gets `n * step` unless it was registered with an
    /// explicit delay. Active elements are skipped and keep their delay.
    pub fn assign_stagger(&mut self, step: Duration) -> Vec<(RevealId, Duration)> {
        let mut assigned = Vec::new();
        let candidates = self
            .entries
            .iter_mut()
            .filter(|(_, e)| e.state == RevealState::Pending);

        for (index, (id, entry)) in candidates.enumerate() {
            entry.delay = entry.explicit_delay.unwrap_or(step * index as u32);
            assigned.push((*id, entry.delay));
        }

        assigned
    }

    /// Mark an element active.
    ///
    /// Returns true only on the pending → active transition. Unknown or
    /// already-active elements are left untouched.
    pub fn activate(&mut self, id: RevealId) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == RevealState::Pending => {
                entry.state = RevealState::Active;
                tracing::trace!(id = %id, key = %entry.key, "reveal activated");
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.entries.get(&id).map(|e| e.state)
    }

    pub fn is_active(&self, id: RevealId) -> bool {
        self.state(id) == Some(RevealState::Active)
    }

    /// Transition delay currently assigned to an element
    pub fn delay(&self, id: RevealId) -> Option<Duration> {
        self.entries.get(&id).map(|e| e.delay)
    }

    pub fn key(&self, id: RevealId) -> Option<&str> {
        self.entries.get(&id).map(|e| e.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_is_one_shot() {
        let mut registry = RevealRegistry::new();
        let id = registry.register("hero");

        assert_eq!(registry.state(id), Some(RevealState::Pending));
        assert!(registry.activate(id));
        assert!(registry.is_active(id));

        // Further events change nothing
        assert!(!registry.activate(id));
        assert!(!registry.activate(id));
        assert_eq!(registry.state(id), Some(RevealState::Active));
    }

    #[test]
    fn test_stagger_follows_candidate_index() {
        let mut registry = RevealRegistry::new();
        let a = registry.register("a");
        let b = registry.register("b");
        let c = registry.register("c");
        registry.activate(a);

        let step = Duration::from_millis(80);
        let assigned = registry.assign_stagger(step);

        assert_eq!(assigned, vec![(b, Duration::ZERO), (c, step)]);
        assert_eq!(registry.delay(c), Some(step));
        assert_eq!(registry.delay(a), Some(Duration::ZERO));
    }

    #[test]
    fn test_explicit_delay_wins_over_stagger() {
        let mut registry = RevealRegistry::new();
        registry.register("feature");
        let sidebar = registry.register_with_delay("sidebar", Duration::from_millis(150));

        registry.assign_stagger(Duration::from_millis(80));
        assert_eq!(registry.delay(sidebar), Some(Duration::from_millis(150)));
    }

    #[test]
    fn test_unregister_drops_candidate() {
        let mut registry = RevealRegistry::new();
        let a = registry.register("a");
        let b = registry.register("b");

        assert!(registry.unregister(a));
        assert!(!registry.unregister(a));
        assert_eq!(registry.pending(), vec![b]);
        assert!(!registry.activate(a));
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut registry = RevealRegistry::new();
        let first = registry.register("a");
        registry.clear();
        let second = registry.register("a");
        assert_ne!(first, second);
        assert_eq!(registry.len(), 1);
    }
}
