//! The `Decision` trait: the guard on every behavior transition.

use br_agent::AgentContext;
use br_core::DecisionId;

use crate::TickContext;

/// A configurable predicate over an agent's runtime context.
///
/// `id` is the identity the owning graph assigned to this instance.  Stateless
/// decisions ignore it; stateful ones (see [`Cooldown`][crate::Cooldown]) use
/// it as their key in `agent.cooldowns`, which is how one shared instance
/// keeps independent state per agent.
///
/// # Contract
///
/// - Never panics on missing optional data: no target or no stats means the
///   decision is `false`.
/// - May mutate `agent` as a side effect of evaluation.  The driver
///   short-circuits on the first `true` guard, so later decisions in a
///   transition list are not evaluated (and have no side effects) that tick.
///
/// # Thread safety
///
/// With the `parallel` driver feature the same decision is evaluated for
/// many agents concurrently, hence `Send + Sync`.  Each call gets exclusive
/// access to one agent only.
///
/// # Example
///
/// ```rust
/// use br_agent::AgentContext;
/// use br_core::DecisionId;
/// use br_decision::{Decision, TickContext};
///
/// /// Fires while the agent has no target.
/// struct NoTarget;
///
/// impl Decision for NoTarget {
///     fn evaluate(&self, _id: DecisionId, agent: &mut AgentContext, _ctx: &TickContext<'_>) -> bool {
///         agent.target.is_none()
///     }
/// }
/// ```
pub trait Decision: Send + Sync + 'static {
    /// Evaluate the guard for `agent` at the tick described by `ctx`.
    fn evaluate(&self, id: DecisionId, agent: &mut AgentContext, ctx: &TickContext<'_>) -> bool;

    /// Short variant label for diagnostics.
    fn kind(&self) -> &'static str {
        "custom"
    }
}

impl<D: Decision + ?Sized> Decision for Box<D> {
    #[inline]
    fn evaluate(&self, id: DecisionId, agent: &mut AgentContext, ctx: &TickContext<'_>) -> bool {
        (**self).evaluate(id, agent, ctx)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}
