//! Framework error type.
//!
//! Sub-crates define their own error enums and may wrap `BrError` as one
//! variant.  None of these are produced on the per-tick path: decision
//! evaluation and transition selection are infallible by construction.

use thiserror::Error;

use crate::{AgentId, DecisionId, NodeId};

/// The top-level error type for `br-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BrError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("behavior node {0} not found")]
    NodeNotFound(NodeId),

    #[error("decision {0} not found")]
    DecisionNotFound(DecisionId),
}

/// Shorthand result type for all `br-*` crates.
pub type BrResult<T> = Result<T, BrError>;
