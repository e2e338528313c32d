//! The `Sim` struct and its tick loop.

use std::sync::Arc;

use br_agent::{AgentContext, AgentTable};
use br_behavior::BehaviorGraph;
use br_core::{AgentId, BrError, DriverConfig, NodeId, SimClock, Tick};
use br_decision::TickContext;
use br_spatial::AgentIndex;
use tracing::{debug, info};

use crate::{BehaviorDriver, DriverObserver, SimResult, TickOutcome};

/// The main simulation runner.
///
/// `Sim` owns every agent and shares one immutable [`BehaviorGraph`].  Each
/// tick runs three phases:
///
/// 1. **Index**: rebuild the [`AgentIndex`] from current positions so ally
///    queries see a consistent snapshot.
/// 2. **Decide** (optionally parallel with the `parallel` feature): tick
///    every live agent through [`BehaviorDriver::tick`].
/// 3. **Report** (sequential, ascending `AgentId`): forward each switch to
///    the observer.
///
/// Between ticks the host may move agents, change targets or apply damage
/// through [`agents_mut`](Self::agents_mut).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, tick duration, …).
    pub config: DriverConfig,

    /// Simulation clock: tracks the current tick and elapsed seconds.
    pub clock: SimClock,

    graph:  Arc<BehaviorGraph>,
    agents: AgentTable,
    index:  AgentIndex,
}

impl Sim {
    pub(crate) fn new(config: DriverConfig, graph: Arc<BehaviorGraph>, agents: AgentTable) -> Self {
        let index = AgentIndex::build(agents.iter());
        Self {
            clock: config.make_clock(),
            config,
            graph,
            agents,
            index,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &BehaviorGraph {
        &self.graph
    }

    pub fn agents(&self) -> &AgentTable {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut AgentTable {
        &mut self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentContext> {
        self.agents.get(id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut AgentContext> {
        self.agents.get_mut(id)
    }

    /// The spatial index as of the last processed tick (or construction).
    pub fn index(&self) -> &AgentIndex {
        &self.index
    }

    /// Rebuild the spatial index from current positions.
    ///
    /// The tick loop does this automatically; call it after moving agents if
    /// host code wants to query the index before the next tick.
    pub fn refresh_index(&mut self) {
        self.index = AgentIndex::build(self.agents.iter());
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Add an agent.  `make` receives the id the agent will carry.
    ///
    /// Fails if the agent's initial behavior is not a node of the graph.
    pub fn spawn(&mut self, make: impl FnOnce(AgentId) -> AgentContext) -> SimResult<AgentId> {
        let ctx = make(self.agents.next_id());
        if !self.graph.contains_node(ctx.current_behavior) {
            return Err(BrError::NodeNotFound(ctx.current_behavior).into());
        }
        let node = ctx.current_behavior;
        let id = self.agents.spawn(|_| ctx);
        debug!(%id, node = self.graph.node_name(node), "agent spawned");
        Ok(id)
    }

    /// Remove an agent, returning its final context.  Its cooldown ledger
    /// goes with it.
    pub fn despawn(&mut self, id: AgentId) -> SimResult<AgentContext> {
        let ctx = self.agents.despawn(id).ok_or(BrError::AgentNotFound(id))?;
        debug!(%id, "agent despawned");
        Ok(ctx)
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: DriverObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(
            agents = self.agents.len(),
            nodes = self.graph.node_count(),
            from = %self.clock.current_tick,
            to = %end,
            "run started"
        );
        while self.clock.current_tick < end {
            self.step(observer);
        }
        self.finish(observer);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for hosts that interleave their own updates.
    /// Does not call `on_run_end`; see [`finish`](Self::finish).
    pub fn run_ticks<O: DriverObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Process one tick and advance the clock.  Returns the number of agents
    /// that switched node.
    pub fn step<O: DriverObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let switches = self.process_tick(now);
        for &(agent, from, to) in &switches {
            observer.on_transition(now, agent, from, to);
        }
        observer.on_tick_end(now, switches.len());

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }

        self.clock.advance();
        switches.len()
    }

    /// Signal the end of the run to `observer`.
    pub fn finish<O: DriverObserver>(&mut self, observer: &mut O) {
        let last = self.clock.current_tick;
        info!(tick = %last, agents = self.agents.len(), "run finished");
        observer.on_run_end(last);
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> Vec<(AgentId, NodeId, NodeId)> {
        self.index = AgentIndex::build(self.agents.iter());

        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx     = TickContext::new(now, self.clock.now_secs(), &self.index);
        let driver  = BehaviorDriver::new(&self.graph);
        let elapsed = self.config.tick_secs;
        let slots   = self.agents.slots_mut();

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<(AgentId, TickOutcome)> = slots
            .iter_mut()
            .flatten()
            .map(|agent| (agent.id, driver.tick(agent, &ctx, elapsed)))
            .collect();

        #[cfg(feature = "parallel")]
        let outcomes: Vec<(AgentId, TickOutcome)> = {
            use rayon::prelude::*;

            // `collect` keeps slot order, so the report phase below still
            // sees ascending ids.
            slots
                .par_iter_mut()
                .filter_map(|slot| slot.as_mut())
                .map(|agent| (agent.id, driver.tick(agent, &ctx, elapsed)))
                .collect()
        };

        outcomes
            .into_iter()
            .filter_map(|(agent, outcome)| match outcome {
                TickOutcome::Switched { from, to } => {
                    debug!(
                        tick = %now,
                        %agent,
                        from = self.graph.node_name(from),
                        to = self.graph.node_name(to),
                        "behavior switched"
                    );
                    Some((agent, from, to))
                }
                TickOutcome::Stayed => None,
            })
            .collect()
    }
}
