//! Target-in-range decision.

use br_agent::AgentContext;
use br_core::DecisionId;

use crate::{Decision, TickContext};

/// Fires when the agent's target is closer than `range`.
///
/// The comparison is done in squared space (`distance² < range²`) and is
/// strict: a target at exactly `range` is out of range.  With `invert` set the
/// result is flipped, turning "in range" into "out of range".
///
/// Without a target the decision is `false` regardless of `invert`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Proximity {
    pub range:  f32,
    pub invert: bool,
}

impl Proximity {
    pub fn within(range: f32) -> Self {
        Self { range, invert: false }
    }

    pub fn beyond(range: f32) -> Self {
        Self { range, invert: true }
    }
}

impl Decision for Proximity {
    fn evaluate(&self, _id: DecisionId, agent: &mut AgentContext, _ctx: &TickContext<'_>) -> bool {
        let Some(dist_sq) = agent.target_distance_sq() else {
            return false;
        };
        (dist_sq < self.range * self.range) ^ self.invert
    }

    fn kind(&self) -> &'static str {
        "proximity"
    }
}
