//! `br-core`: foundational types for the `rust_brain` behavior-selection engine.
//!
//! This crate is a dependency of every other `br-*` crate.  It has no `br-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `NodeId`, `DecisionId`, `FactionId`            |
//! | [`geo`]   | `Position` (2-D world coordinates, squared distance)      |
//! | [`time`]  | `Tick`, `SimClock`, `DriverConfig`                        |
//! | [`error`] | `BrError`, `BrResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BrError, BrResult};
pub use geo::Position;
pub use ids::{AgentId, DecisionId, FactionId, NodeId};
pub use time::{DriverConfig, SimClock, Tick};
