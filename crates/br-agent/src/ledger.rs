//! Per-agent cooldown ledger.

use rustc_hash::FxHashMap;

use br_core::DecisionId;

/// Mapping from decision identity to the last time (in simulated seconds)
/// that decision fired for the owning agent.
///
/// Entries are created lazily the first time a cooldown-style decision is
/// evaluated for the agent and are never removed; the ledger lives exactly as
/// long as its `AgentContext`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownLedger {
    stamps: FxHashMap<DecisionId, f64>,
}

impl CooldownLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last trigger time for `decision`, or `None` if it never fired.
    #[inline]
    pub fn last_fired(&self, decision: DecisionId) -> Option<f64> {
        self.stamps.get(&decision).copied()
    }

    /// Record that `decision` fired at `now`, creating the entry if needed.
    #[inline]
    pub fn stamp(&mut self, decision: DecisionId, now: f64) {
        self.stamps.insert(decision, now);
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Iterate `(decision, last_fired)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (DecisionId, f64)> + '_ {
        self.stamps.iter().map(|(&id, &t)| (id, t))
    }
}
