//! A single guarded edge of the behavior graph.

use br_core::{DecisionId, NodeId};

/// An ordered `(decision, target)` pair.
///
/// Either side may be absent (a half-wired link left by an authoring tool).
/// Such a transition is malformed and is skipped during evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub decision: Option<DecisionId>,
    pub target:   Option<NodeId>,
}

impl Transition {
    #[inline]
    pub fn new(decision: DecisionId, target: NodeId) -> Self {
        Self { decision: Some(decision), target: Some(target) }
    }
}
