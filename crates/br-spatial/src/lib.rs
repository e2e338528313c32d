//! `br-spatial`: spatial queries over agent positions.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                       |
//! |-----------|----------------------------------------------------------------|
//! | [`query`] | `SpatialQuery` capability trait, `NoSpatial`                   |
//! | [`index`] | `AgentIndex` (R-tree snapshot of agent positions)              |
//!
//! Decisions only see the [`SpatialQuery`] trait, so a host game can plug in
//! its own broad-phase instead of [`AgentIndex`].

pub mod index;
pub mod query;


pub use index::AgentIndex;
pub use query::{NoSpatial, SpatialQuery};
