//! Time-in-state decision.

use br_agent::AgentContext;
use br_core::DecisionId;

use crate::{Decision, TickContext};

/// Fires once the agent has spent at least `duration` seconds in its current
/// behavior.  No side effects.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StateTimer {
    pub duration: f32,
}

impl StateTimer {
    pub fn new(duration: f32) -> Self {
        Self { duration }
    }
}

impl Decision for StateTimer {
    #[inline]
    fn evaluate(&self, _id: DecisionId, agent: &mut AgentContext, _ctx: &TickContext<'_>) -> bool {
        agent.state_timer >= self.duration
    }

    fn kind(&self) -> &'static str {
        "state_timer"
    }
}
