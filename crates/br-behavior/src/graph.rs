//! The shared, immutable behavior graph.

use rustc_hash::FxHashMap;

use br_agent::AgentContext;
use br_core::{BrError, BrResult, DecisionId, NodeId};
use br_decision::{Decision, TickContext};

use crate::{BehaviorNode, GraphWarning, Transition};

/// A decision registered in a graph, with the name it was authored under.
pub struct RegisteredDecision {
    pub name:     String,
    pub decision: Box<dyn Decision>,
}

impl std::fmt::Debug for RegisteredDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredDecision")
            .field("name", &self.name)
            .field("kind", &self.decision.kind())
            .finish()
    }
}

/// Arena of behavior nodes and decisions.
///
/// `NodeId(n)` is `nodes[n]`; `DecisionId(d)` is `decisions[d]`.  The index of
/// a decision is its identity for cooldown bookkeeping, so it must stay
/// stable for the graph's lifetime; there is no mutation after
/// [`GraphBuilder::build`][crate::GraphBuilder::build].
///
/// `BehaviorGraph` is `Send + Sync` and is meant to be shared (by reference
/// or `Arc`) by every agent that runs it.
#[derive(Debug)]
pub struct BehaviorGraph {
    pub(crate) nodes:      Vec<BehaviorNode>,
    pub(crate) decisions:  Vec<RegisteredDecision>,
    pub(crate) node_names: FxHashMap<String, NodeId>,
}

impl BehaviorGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn decision_count(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&BehaviorNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.node_names.get(name).copied()
    }

    /// Name of `id`, or `"<invalid>"` for ids outside the graph.
    pub fn node_name(&self, id: NodeId) -> &str {
        self.node(id).map_or("<invalid>", |n| n.name.as_str())
    }

    #[inline]
    pub fn decision(&self, id: DecisionId) -> Option<&dyn Decision> {
        self.decisions.get(id.index()).map(|d| d.decision.as_ref())
    }

    pub fn decision_name(&self, id: DecisionId) -> BrResult<&str> {
        self.decisions
            .get(id.index())
            .map(|d| d.name.as_str())
            .ok_or(BrError::DecisionNotFound(id))
    }

    /// Iterator over `(NodeId, &BehaviorNode)` in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &BehaviorNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Resolve both ends of `transition` against this graph.
    ///
    /// Returns `None` for malformed transitions: a missing end, or an id that
    /// does not exist in this graph.
    #[inline]
    pub fn resolve(&self, transition: &Transition) -> Option<(DecisionId, &dyn Decision, NodeId)> {
        let decision_id = transition.decision?;
        let target = transition.target?;
        if !self.contains_node(target) {
            return None;
        }
        let decision = self.decision(decision_id)?;
        Some((decision_id, decision, target))
    }

    /// Evaluate the transition list of `current` for `agent`.
    ///
    /// See [`BehaviorNode::select_next`].  An id outside the graph has no
    /// transitions and yields `None`.
    pub fn select_next(
        &self,
        current: NodeId,
        agent:   &mut AgentContext,
        ctx:     &TickContext<'_>,
    ) -> Option<NodeId> {
        self.node(current)?.select_next(self, agent, ctx)
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// List every malformed transition in the graph, logging each at `warn`.
    pub fn validate(&self) -> Vec<GraphWarning> {
        let warnings = crate::validate::collect_warnings(self);
        for w in &warnings {
            tracing::warn!(node = %self.node_name(w.node()), "{w}");
        }
        warnings
    }
}
