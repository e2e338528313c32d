//! `br-agent`: per-agent runtime state for the `rust_brain` engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`context`]   | `AgentContext`: current behavior, state timer, handles     |
//! | [`ledger`]    | `CooldownLedger`: decision id → last-trigger timestamp     |
//! | [`stats`]     | `Stats`: health read by health-ratio decisions             |
//! | [`builder`]   | `AgentBuilder` (fluent spawn-time construction)            |
//! | [`table`]     | `AgentTable`: id-indexed slots for every live agent        |
//!
//! # Ownership
//!
//! An `AgentContext` is exclusively owned by its agent and only mutated by
//! that agent's tick.  Behavior nodes and decisions are shared across all
//! agents; per-agent decision state lives in the context's ledger, keyed by
//! `DecisionId`.

pub mod builder;
pub mod context;
pub mod ledger;
pub mod stats;
pub mod table;


pub use builder::AgentBuilder;
pub use context::AgentContext;
pub use ledger::CooldownLedger;
pub use stats::Stats;
pub use table::AgentTable;
