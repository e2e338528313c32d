//! `br-decision`: reusable guard predicates for behavior transitions.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`context`]   | `TickContext<'a>`: clock + spatial query for one tick       |
//! | [`decision`]  | `Decision` trait                                            |
//! | [`mode`]      | `ThresholdMode` (`Below` / `Above`)                         |
//! | [`proximity`] | `Proximity`: target within range                            |
//! | [`health`]    | `HealthRatio`: health fraction vs. a percentage             |
//! | [`allies`]    | `AllyCount`: same-faction agents nearby                     |
//! | [`timer`]     | `StateTimer`: time spent in the current behavior            |
//! | [`cooldown`]  | `Cooldown`: fires at most once per window, per agent        |
//! | [`def`]       | `DecisionDef`: data form of every built-in variant          |
//!
//! # Design notes
//!
//! A decision instance is shared by every agent running the graph that owns
//! it, so decisions hold configuration only.  Anything that must persist
//! between evaluations (the cooldown stamp) is written to the agent's
//! `CooldownLedger` under the decision's `DecisionId`.
//!
//! Evaluation never fails.  Missing runtime data (no target, no stats)
//! produces `false`.

pub mod allies;
pub mod context;
pub mod cooldown;
pub mod decision;
pub mod def;
pub mod health;
pub mod mode;
pub mod proximity;
pub mod timer;


pub use allies::AllyCount;
pub use context::TickContext;
pub use cooldown::Cooldown;
pub use decision::Decision;
pub use def::DecisionDef;
pub use health::HealthRatio;
pub use mode::ThresholdMode;
pub use proximity::Proximity;
pub use timer::StateTimer;
