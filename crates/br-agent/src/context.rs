//! The per-agent record consulted and mutated during a decision tick.

use br_core::{AgentId, FactionId, NodeId, Position};

use crate::{CooldownLedger, Stats};

/// Per-agent runtime context.
///
/// `current_behavior` is a handle into a shared `BehaviorGraph`; the graph,
/// not the agent, owns the node.  `state_timer` counts seconds spent in the
/// current behavior and is reset on every switch.
///
/// The read-only handles (`stats`, `target`, `position`, `faction`) are
/// written by the host game between ticks and only read by decisions.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentContext {
    pub id:      AgentId,
    pub faction: FactionId,

    /// Behavior node the agent currently occupies.
    pub current_behavior: NodeId,

    /// Elapsed seconds since the last state switch.
    pub state_timer: f32,

    /// Last-trigger timestamps for cooldown-gated decisions.
    pub cooldowns: CooldownLedger,

    /// Vitals.  `None` means "no stats source".
    pub stats: Option<Stats>,

    /// Position of the current target.  `None` means "no target".
    pub target: Option<Position>,

    pub position: Position,
}

impl AgentContext {
    /// A fresh context placed in `initial_behavior` with no stats or target.
    pub fn new(id: AgentId, faction: FactionId, position: Position, initial_behavior: NodeId) -> Self {
        Self {
            id,
            faction,
            current_behavior: initial_behavior,
            state_timer:      0.0,
            cooldowns:        CooldownLedger::new(),
            stats:            None,
            target:           None,
            position,
        }
    }

    /// Squared distance to the current target, or `None` without a target.
    #[inline]
    pub fn target_distance_sq(&self) -> Option<f32> {
        self.target.map(|t| self.position.distance_sq(t))
    }

    /// Health ratio from the stats handle, or `None` without usable stats.
    #[inline]
    pub fn health_ratio(&self) -> Option<f32> {
        self.stats.as_ref().and_then(Stats::health_ratio)
    }

    /// Switch to `next` and restart the state timer.
    #[inline]
    pub fn enter(&mut self, next: NodeId) {
        self.current_behavior = next;
        self.state_timer = 0.0;
    }
}
