//! Nearby-ally-count decision.

use br_agent::AgentContext;
use br_core::DecisionId;

use crate::{Decision, ThresholdMode, TickContext};

/// Counts same-faction agents within `radius`, excluding the agent itself.
///
/// The spatial query always includes the querying agent, so exactly one is
/// subtracted from its raw count.
///
/// | Mode    | Fires when            |
/// |---------|-----------------------|
/// | `Below` | `allies <  threshold` |
/// | `Above` | `allies >= threshold` |
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AllyCount {
    pub radius:    f32,
    pub threshold: u32,
    pub mode:      ThresholdMode,
}

impl AllyCount {
    pub fn below(radius: f32, threshold: u32) -> Self {
        Self { radius, threshold, mode: ThresholdMode::Below }
    }

    pub fn at_least(radius: f32, threshold: u32) -> Self {
        Self { radius, threshold, mode: ThresholdMode::Above }
    }

    /// Allies around `agent`, not counting the agent itself.
    pub fn allies(&self, agent: &AgentContext, ctx: &TickContext<'_>) -> usize {
        ctx.spatial
            .count_in_radius(agent.position, self.radius, Some(agent.faction))
            .saturating_sub(1)
    }
}

impl Decision for AllyCount {
    fn evaluate(&self, _id: DecisionId, agent: &mut AgentContext, ctx: &TickContext<'_>) -> bool {
        let allies = self.allies(agent, ctx);
        let threshold = self.threshold as usize;
        match self.mode {
            ThresholdMode::Below => allies < threshold,
            ThresholdMode::Above => allies >= threshold,
        }
    }

    fn kind(&self) -> &'static str {
        "ally_count"
    }
}
