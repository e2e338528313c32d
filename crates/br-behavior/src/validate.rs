//! Authoring-time graph diagnostics.
//!
//! Validation never changes runtime behavior: malformed transitions are
//! skipped by `select_next` whether or not anyone looked at these warnings.

use std::fmt;

use br_core::{DecisionId, NodeId};

use crate::BehaviorGraph;

/// A problem with one transition, located by `(node, index)` where `index`
/// is the position in that node's transition list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphWarning {
    MissingDecision { node: NodeId, index: usize },
    MissingTarget { node: NodeId, index: usize },
    UnknownDecision { node: NodeId, index: usize, decision: DecisionId },
    UnknownTarget { node: NodeId, index: usize, target: NodeId },
}

impl GraphWarning {
    /// The node whose transition list holds the bad entry.
    pub fn node(&self) -> NodeId {
        match *self {
            GraphWarning::MissingDecision { node, .. }
            | GraphWarning::MissingTarget { node, .. }
            | GraphWarning::UnknownDecision { node, .. }
            | GraphWarning::UnknownTarget { node, .. } => node,
        }
    }
}

impl fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphWarning::MissingDecision { node, index } => {
                write!(f, "transition {index} of {node} has no decision")
            }
            GraphWarning::MissingTarget { node, index } => {
                write!(f, "transition {index} of {node} has no target")
            }
            GraphWarning::UnknownDecision { node, index, decision } => {
                write!(f, "transition {index} of {node} references unknown {decision}")
            }
            GraphWarning::UnknownTarget { node, index, target } => {
                write!(f, "transition {index} of {node} targets unknown {target}")
            }
        }
    }
}

pub(crate) fn collect_warnings(graph: &BehaviorGraph) -> Vec<GraphWarning> {
    let mut out = Vec::new();
    for (node, behavior) in graph.nodes() {
        for (index, t) in behavior.transitions.iter().enumerate() {
            match t.decision {
                None => out.push(GraphWarning::MissingDecision { node, index }),
                Some(decision) if graph.decision(decision).is_none() => {
                    out.push(GraphWarning::UnknownDecision { node, index, decision })
                }
                Some(_) => {}
            }
            match t.target {
                None => out.push(GraphWarning::MissingTarget { node, index }),
                Some(target) if !graph.contains_node(target) => {
                    out.push(GraphWarning::UnknownTarget { node, index, target })
                }
                Some(_) => {}
            }
        }
    }
    out
}
