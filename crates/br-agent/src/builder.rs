//! Fluent builder for spawning an `AgentContext`.
//!
//! # Usage
//!
//! ```rust
//! use br_agent::{AgentBuilder, Stats};
//! use br_core::{AgentId, FactionId, NodeId, Position};
//!
//! let agent = AgentBuilder::new(AgentId(0), NodeId(0))
//!     .faction(FactionId(1))
//!     .position(Position::new(4.0, 2.0))
//!     .stats(Stats::full(100.0))
//!     .build();
//!
//! assert_eq!(agent.current_behavior, NodeId(0));
//! assert_eq!(agent.state_timer, 0.0);
//! assert!(agent.target.is_none());
//! ```

use br_core::{AgentId, FactionId, NodeId, Position};

use crate::{AgentContext, Stats};

/// Fluent builder for [`AgentContext`].
///
/// Only the id and initial behavior are required; everything else defaults
/// to "absent" (no stats, no target, origin, faction 0).
pub struct AgentBuilder {
    id:       AgentId,
    initial:  NodeId,
    faction:  FactionId,
    position: Position,
    stats:    Option<Stats>,
    target:   Option<Position>,
}

impl AgentBuilder {
    pub fn new(id: AgentId, initial_behavior: NodeId) -> Self {
        Self {
            id,
            initial:  initial_behavior,
            faction:  FactionId(0),
            position: Position::ORIGIN,
            stats:    None,
            target:   None,
        }
    }

    pub fn faction(mut self, faction: FactionId) -> Self {
        self.faction = faction;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }

    pub fn build(self) -> AgentContext {
        let mut ctx = AgentContext::new(self.id, self.faction, self.position, self.initial);
        ctx.stats = self.stats;
        ctx.target = self.target;
        ctx
    }
}
