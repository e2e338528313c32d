//! Read-only tick state passed to every decision.

use br_core::Tick;
use br_spatial::SpatialQuery;

/// A read-only snapshot of the world for one tick.
///
/// Built once per tick by the driver and shared by every agent's evaluation.
/// Everything agent-specific lives in the `AgentContext` passed alongside it.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Simulated seconds at `tick`.  Cooldown stamps are in this unit.
    pub now: f64,

    /// Radius queries over this tick's agent positions.
    pub spatial: &'a dyn SpatialQuery,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, now: f64, spatial: &'a dyn SpatialQuery) -> Self {
        Self { tick, now, spatial }
    }
}
