//! `br-driver`: the behavior state machine and its tick loop.
//!
//! # Per-agent tick
//!
//! ```text
//! tick(agent, elapsed):
//!   ① agent.state_timer += elapsed
//!   ② next = graph.select_next(agent.current_behavior, agent, ctx)
//!   ③ Some(next) → agent.current_behavior = next; agent.state_timer = 0
//!      None       → stay (timer keeps the increment from ①)
//! ```
//!
//! A transition back to the node the agent is already in counts as a switch:
//! the timer restarts.  Cooldown-gated self-loops rely on this.
//!
//! # Multi-agent loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Index       snapshot agent positions into the R-tree.
//!   ② Decide      BehaviorDriver::tick for every live agent, ascending id
//!                 (on Rayon with the `parallel` feature).
//!   ③ Report      DriverObserver::on_transition per switch, ascending id.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use br_driver::{NoopObserver, SimBuilder};
//!
//! let graph = Arc::new(builder.build()?);
//! let mut sim = SimBuilder::new(config, graph).agents(agents).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use driver::{BehaviorDriver, TickOutcome};
pub use error::{SimError, SimResult};
pub use observer::{DriverObserver, NoopObserver};
pub use sim::Sim;
