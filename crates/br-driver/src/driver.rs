//! Single-agent behavior state machine.

use br_agent::AgentContext;
use br_behavior::BehaviorGraph;
use br_core::NodeId;
use br_decision::TickContext;

/// What one tick did to an agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No guard matched; the agent stays and its timer advanced.
    Stayed,
    /// A guard matched.  `from == to` for a self-transition.
    Switched { from: NodeId, to: NodeId },
}

impl TickOutcome {
    #[inline]
    pub fn switched(&self) -> bool {
        matches!(self, TickOutcome::Switched { .. })
    }
}

/// Drives agents through a shared [`BehaviorGraph`].
///
/// The driver is a thin, copyable view of the graph: all run state lives in
/// the `AgentContext` being ticked, so one driver serves any number of
/// agents.
#[derive(Copy, Clone)]
pub struct BehaviorDriver<'g> {
    graph: &'g BehaviorGraph,
}

impl<'g> BehaviorDriver<'g> {
    pub fn new(graph: &'g BehaviorGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g BehaviorGraph {
        self.graph
    }

    /// Advance `agent` by `elapsed` seconds.
    ///
    /// The timer is advanced before guards run, so a state timer of `d`
    /// seconds fires on the tick that brings the time in state to `d`.  Any
    /// selected node, including the current one, restarts the timer at 0.
    ///
    /// Never fails: malformed transitions are skipped and decisions missing
    /// their inputs evaluate to `false`.
    pub fn tick(&self, agent: &mut AgentContext, ctx: &TickContext<'_>, elapsed: f32) -> TickOutcome {
        agent.state_timer += elapsed;
        let from = agent.current_behavior;
        match self.graph.select_next(from, agent, ctx) {
            Some(to) => {
                agent.enter(to);
                TickOutcome::Switched { from, to }
            }
            None => TickOutcome::Stayed,
        }
    }
}
