//! `br-behavior`: behavior nodes and their guarded transition tables.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`transition`] | `Transition`: `(decision, target)` pair                    |
//! | [`node`]       | `BehaviorNode`: named state + ordered transitions          |
//! | [`graph`]      | `BehaviorGraph`: arena of nodes and decisions              |
//! | [`builder`]    | `GraphBuilder`                                             |
//! | [`validate`]   | `GraphWarning`: authoring-time diagnostics                 |
//! | [`def`]        | `GraphDef`: name-based graph description                   |
//! | [`loader`]     | JSON graph loading (feature = `"serde"` only)              |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Design notes
//!
//! Nodes and decisions live in arenas owned by the graph and are referenced
//! by index (`NodeId`, `DecisionId`).  Cycles and self-loops are ordinary
//! edges, and agents hold a plain `NodeId` rather than a pointer into the
//! graph.  The graph is immutable once built and can be shared by any number
//! of agents (and threads).
//!
//! A transition whose decision or target is missing, or points outside the
//! arenas, is malformed.  Malformed transitions never match at runtime; they
//! are reported by [`BehaviorGraph::validate`] instead.

pub mod builder;
pub mod def;
pub mod error;
pub mod graph;
pub mod node;
pub mod transition;
pub mod validate;

#[cfg(feature = "serde")]
pub mod loader;


pub use builder::GraphBuilder;
pub use def::{GraphDef, NamedDecisionDef, NodeDef, TransitionDef};
pub use error::{BehaviorError, BehaviorResult};
pub use graph::{BehaviorGraph, RegisteredDecision};
pub use node::BehaviorNode;
pub use transition::Transition;
pub use validate::GraphWarning;

#[cfg(feature = "serde")]
pub use loader::{load_graph_json, load_graph_reader};
