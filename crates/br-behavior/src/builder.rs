//! Incremental construction of a [`BehaviorGraph`].

use rustc_hash::FxHashMap;

use br_core::{BrError, DecisionId, NodeId};
use br_decision::Decision;

use crate::{BehaviorError, BehaviorGraph, BehaviorNode, BehaviorResult, RegisteredDecision, Transition};

/// Construct a [`BehaviorGraph`] incrementally, then call [`build`](Self::build).
///
/// Nodes and decisions get sequential ids from 0 in insertion order.
/// Transitions are appended to their source node in call order, which is
/// also their evaluation order.
///
/// # Example
///
/// ```
/// use br_behavior::GraphBuilder;
/// use br_decision::StateTimer;
///
/// let mut b = GraphBuilder::new();
/// let idle = b.add_node("idle");
/// let wander = b.add_node("wander");
/// let bored = b.add_decision("bored", StateTimer::new(5.0));
/// b.connect(idle, bored, wander).unwrap();
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.node(wander).unwrap().is_terminal());
/// ```
pub struct GraphBuilder {
    nodes:     Vec<BehaviorNode>,
    decisions: Vec<RegisteredDecision>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), decisions: Vec::new() }
    }

    /// Add a behavior node and return its `NodeId`.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(BehaviorNode::new(name));
        id
    }

    /// Register a decision and return the identity it will be evaluated
    /// (and cooldown-tracked) under.
    pub fn add_decision(&mut self, name: impl Into<String>, decision: impl Decision) -> DecisionId {
        self.add_boxed_decision(name, Box::new(decision))
    }

    pub fn add_boxed_decision(&mut self, name: impl Into<String>, decision: Box<dyn Decision>) -> DecisionId {
        let id = DecisionId(self.decisions.len() as u32);
        self.decisions.push(RegisteredDecision { name: name.into(), decision });
        id
    }

    /// Append a possibly malformed transition to `from`.
    ///
    /// `decision` and `target` are stored as given, even if absent or unknown;
    /// only `from` itself must exist.
    pub fn add_transition(
        &mut self,
        from:     NodeId,
        decision: Option<DecisionId>,
        target:   Option<NodeId>,
    ) -> BehaviorResult<()> {
        let node = self
            .nodes
            .get_mut(from.index())
            .ok_or(BrError::NodeNotFound(from))?;
        node.transitions.push(Transition { decision, target });
        Ok(())
    }

    /// Append a fully wired transition `from --decision--> to`.
    pub fn connect(&mut self, from: NodeId, decision: DecisionId, to: NodeId) -> BehaviorResult<()> {
        self.add_transition(from, Some(decision), Some(to))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn decision_count(&self) -> usize {
        self.decisions.len()
    }

    /// Consume the builder and produce a [`BehaviorGraph`].
    ///
    /// Fails only on duplicate node names, since names are how loaders and
    /// tools address nodes.  Malformed transitions are kept; see
    /// [`BehaviorGraph::validate`].
    pub fn build(self) -> BehaviorResult<BehaviorGraph> {
        let mut node_names = FxHashMap::default();
        for (i, node) in self.nodes.iter().enumerate() {
            if node_names.insert(node.name.clone(), NodeId(i as u32)).is_some() {
                return Err(BehaviorError::Config(format!(
                    "duplicate behavior node name {:?}",
                    node.name
                )));
            }
        }
        Ok(BehaviorGraph {
            nodes: self.nodes,
            decisions: self.decisions,
            node_names,
        })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
