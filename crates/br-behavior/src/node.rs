//! Behavior node: one state of the agent state graph.

use br_agent::AgentContext;
use br_core::NodeId;
use br_decision::TickContext;

use crate::{BehaviorGraph, Transition};

/// A named state holding an ordered transition list.
///
/// A node with no transitions is a sink: an agent that enters it stays there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BehaviorNode {
    pub name:        String,
    pub transitions: Vec<Transition>,
}

impl BehaviorNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), transitions: Vec::new() }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Return the target of the first transition whose decision is `true`.
    ///
    /// Transitions are tried in list order and evaluation stops at the first
    /// match, so later decisions are neither evaluated nor get to apply side
    /// effects.  Malformed transitions (missing or out-of-graph decision or
    /// target) are skipped.  `None` means "stay in the current node".
    pub fn select_next(
        &self,
        graph: &BehaviorGraph,
        agent: &mut AgentContext,
        ctx:   &TickContext<'_>,
    ) -> Option<NodeId> {
        for (index, transition) in self.transitions.iter().enumerate() {
            let Some((decision_id, decision, target)) = graph.resolve(transition) else {
                tracing::trace!(node = %self.name, index, "skipping malformed transition");
                continue;
            };
            if decision.evaluate(decision_id, agent, ctx) {
                return Some(target);
            }
        }
        None
    }
}
