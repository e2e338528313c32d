//! Observer trait for progress reporting and data collection.

use br_agent::AgentTable;
use br_core::{AgentId, NodeId, Tick};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DriverObserver for Printer {
///     fn on_transition(&mut self, tick: Tick, agent: AgentId, from: NodeId, to: NodeId) {
///         println!("{tick}: {agent} {from} -> {to}");
///     }
/// }
/// ```
pub trait DriverObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent whose guard matched this tick, in ascending
    /// agent id order.  `from == to` for self-transitions.
    fn on_transition(&mut self, _tick: Tick, _agent: AgentId, _from: NodeId, _to: NodeId) {}

    /// Called at the end of each tick with the number of switches.
    fn on_tick_end(&mut self, _tick: Tick, _switched: usize) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to every live agent.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentTable) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`DriverObserver`] that does nothing.
pub struct NoopObserver;

impl DriverObserver for NoopObserver {}
