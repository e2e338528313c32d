//! Health-fraction decision.

use br_agent::AgentContext;
use br_core::DecisionId;

use crate::{Decision, ThresholdMode, TickContext};

/// Compares `current_health / max_health` against `threshold_pct / 100`.
///
/// | Mode    | Fires when           |
/// |---------|----------------------|
/// | `Below` | `ratio <= threshold` |
/// | `Above` | `ratio >= threshold` |
///
/// Both modes include the threshold itself.  An agent without stats (or with
/// a non-positive `max_health`) never fires.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HealthRatio {
    /// Threshold in percent, 0–100.
    pub threshold_pct: f32,
    pub mode:          ThresholdMode,
}

impl HealthRatio {
    pub fn below(threshold_pct: f32) -> Self {
        Self { threshold_pct, mode: ThresholdMode::Below }
    }

    pub fn above(threshold_pct: f32) -> Self {
        Self { threshold_pct, mode: ThresholdMode::Above }
    }
}

impl Decision for HealthRatio {
    fn evaluate(&self, _id: DecisionId, agent: &mut AgentContext, _ctx: &TickContext<'_>) -> bool {
        let Some(ratio) = agent.health_ratio() else {
            return false;
        };
        let threshold = self.threshold_pct / 100.0;
        match self.mode {
            ThresholdMode::Below => ratio <= threshold,
            ThresholdMode::Above => ratio >= threshold,
        }
    }

    fn kind(&self) -> &'static str {
        "health_ratio"
    }
}
