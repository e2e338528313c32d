//! Per-agent rate-limit decision.

use br_agent::AgentContext;
use br_core::DecisionId;

use crate::{Decision, TickContext};

/// Fires at most once per `cooldown` seconds for each agent.
///
/// Evaluation **writes** to `agent.cooldowns`:
///
/// - no entry for `id` yet → stamp `ctx.now`, return `true` (first use fires);
/// - `now - stamp >= cooldown` → re-stamp `ctx.now`, return `true`;
/// - otherwise → return `false`, stamp untouched.
///
/// The elapsed span is narrowed to `f32` before the comparison, the precision
/// `cooldown` and `tick_secs` are configured in.  A 0.3 s cooldown on 0.1 s
/// ticks therefore opens after exactly three ticks.
///
/// Every `true` result moves the stamp, so the gate cannot fire twice inside
/// one window.  Because the stamp is keyed by `id`, two registered cooldowns
/// with identical configuration still gate independently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cooldown {
    pub cooldown: f32,
}

impl Cooldown {
    pub fn new(cooldown: f32) -> Self {
        Self { cooldown }
    }

    /// Whether the gate would fire at `now`, without stamping.
    pub fn is_ready(&self, id: DecisionId, agent: &AgentContext, now: f64) -> bool {
        match agent.cooldowns.last_fired(id) {
            None => true,
            Some(stamp) => (now - stamp) as f32 >= self.cooldown,
        }
    }
}

impl Decision for Cooldown {
    fn evaluate(&self, id: DecisionId, agent: &mut AgentContext, ctx: &TickContext<'_>) -> bool {
        if !self.is_ready(id, agent, ctx.now) {
            return false;
        }
        agent.cooldowns.stamp(id, ctx.now);
        true
    }

    fn kind(&self) -> &'static str {
        "cooldown"
    }
}
