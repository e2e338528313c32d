//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use br_agent::{AgentContext, AgentTable};
use br_behavior::BehaviorGraph;
use br_core::{AgentId, BrError, DriverConfig};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`DriverConfig`]: tick duration, total ticks, snapshot interval
/// - `Arc<BehaviorGraph>`: the shared state machine
///
/// # Optional inputs
///
/// | Method         | Default          |
/// |----------------|------------------|
/// | `.agents(v)`   | No agents        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, Arc::new(graph))
///     .agents(agents)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: DriverConfig,
    graph:  Arc<BehaviorGraph>,
    agents: Vec<AgentContext>,
}

impl SimBuilder {
    pub fn new(config: DriverConfig, graph: Arc<BehaviorGraph>) -> Self {
        Self { config, graph, agents: Vec::new() }
    }

    /// Supply the initial population.
    ///
    /// Agent `i` must carry `AgentId(i)`; [`AgentBuilder`][br_agent::AgentBuilder]
    /// with sequential ids satisfies this.
    pub fn agents(mut self, agents: Vec<AgentContext>) -> Self {
        self.agents = agents;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if !(self.config.tick_secs > 0.0) || !self.config.tick_secs.is_finite() {
            return Err(SimError::Config(format!(
                "tick_secs must be positive and finite, got {}",
                self.config.tick_secs
            )));
        }

        let mut table = AgentTable::new();
        for (index, agent) in self.agents.into_iter().enumerate() {
            if agent.id != AgentId(index as u32) {
                return Err(SimError::AgentIdMismatch { index, id: agent.id });
            }
            if !self.graph.contains_node(agent.current_behavior) {
                return Err(BrError::NodeNotFound(agent.current_behavior).into());
            }
            table.spawn(|_| agent);
        }

        Ok(Sim::new(self.config, self.graph, table))
    }
}
