//! Name-based description of a behavior graph.
//!
//! This is the form graphs take in files and tools: nodes and decisions are
//! addressed by name, and decisions are [`DecisionDef`] records.
//!
//! ```json
//! {
//!   "decisions": [
//!     { "name": "bored", "kind": "state_timer", "duration": 5.0 }
//!   ],
//!   "nodes": [
//!     { "name": "idle", "transitions": [ { "decision": "bored", "target": "wander" } ] },
//!     { "name": "wander" }
//!   ]
//! }
//! ```

use rustc_hash::FxHashMap;

use br_core::{DecisionId, NodeId};
use br_decision::DecisionDef;

use crate::{BehaviorError, BehaviorGraph, BehaviorResult, GraphBuilder};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphDef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub decisions: Vec<NamedDecisionDef>,
    pub nodes:     Vec<NodeDef>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedDecisionDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub def:  DecisionDef,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeDef {
    pub name:        String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transitions: Vec<TransitionDef>,
}

/// Either name may be omitted; the resulting transition is malformed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionDef {
    pub decision: Option<String>,
    pub target:   Option<String>,
}

impl GraphDef {
    /// Resolve names and build the graph.
    ///
    /// Duplicate node or decision names are errors.  A transition naming an
    /// unknown decision or node is kept as malformed (that end is left
    /// empty) and logged at `warn`.
    pub fn build(self) -> BehaviorResult<BehaviorGraph> {
        let mut b = GraphBuilder::new();

        let mut decision_ids: FxHashMap<String, DecisionId> = FxHashMap::default();
        for NamedDecisionDef { name, def } in self.decisions {
            if decision_ids.contains_key(&name) {
                return Err(BehaviorError::Config(format!("duplicate decision name {name:?}")));
            }
            let id = b.add_boxed_decision(name.clone(), def.into_decision());
            decision_ids.insert(name, id);
        }

        // Allocate every node first so transitions can point forward.
        let mut node_ids: FxHashMap<String, NodeId> = FxHashMap::default();
        for node in &self.nodes {
            let id = b.add_node(node.name.clone());
            node_ids.insert(node.name.clone(), id);
        }

        for (i, node) in self.nodes.into_iter().enumerate() {
            let from = NodeId(i as u32);
            for t in node.transitions {
                let decision = t.decision.as_deref().and_then(|name| {
                    let id = decision_ids.get(name).copied();
                    if id.is_none() {
                        tracing::warn!(node = %node.name, decision = name, "unknown decision name");
                    }
                    id
                });
                let target = t.target.as_deref().and_then(|name| {
                    let id = node_ids.get(name).copied();
                    if id.is_none() {
                        tracing::warn!(node = %node.name, target = name, "unknown target node name");
                    }
                    id
                });
                b.add_transition(from, decision, target)?;
            }
        }

        // Duplicate node names surface here.
        b.build()
    }
}
