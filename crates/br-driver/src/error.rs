use br_core::{AgentId, BrError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent at position {index} carries id {id}; ids must match their position")]
    AgentIdMismatch {
        index: usize,
        id:    AgentId,
    },

    #[error(transparent)]
    Core(#[from] BrError),
}

pub type SimResult<T> = Result<T, SimError>;
