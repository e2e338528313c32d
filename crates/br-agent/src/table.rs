//! Storage for every live `AgentContext` in a simulation.
//!
//! Agents are kept in slots indexed by `AgentId`.  Despawning empties the
//! slot (dropping the context, and with it the agent's cooldown ledger);
//! ids are never reused, so a stale id simply finds an empty slot.

use br_core::AgentId;

use crate::AgentContext;

#[derive(Clone, Debug, Default)]
pub struct AgentTable {
    slots: Vec<Option<AgentContext>>,
    live:  usize,
}

impl AgentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next [`spawn`](Self::spawn) will assign.
    #[inline]
    pub fn next_id(&self) -> AgentId {
        AgentId(self.slots.len() as u32)
    }

    /// Create an agent.  `make` receives the assigned id; the context it
    /// returns is stored with that id regardless of what `make` put in
    /// `ctx.id`.
    pub fn spawn(&mut self, make: impl FnOnce(AgentId) -> AgentContext) -> AgentId {
        let id = self.next_id();
        let mut ctx = make(id);
        ctx.id = id;
        self.slots.push(Some(ctx));
        self.live += 1;
        id
    }

    /// Remove an agent, returning its final context.
    pub fn despawn(&mut self, id: AgentId) -> Option<AgentContext> {
        let ctx = self.slots.get_mut(id.index())?.take()?;
        self.live -= 1;
        Some(ctx)
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&AgentContext> {
        self.slots.get(id.index())?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut AgentContext> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    /// Live agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentContext> + '_ {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AgentContext> + '_ {
        self.slots.iter_mut().flatten()
    }

    /// Raw slots, for callers that split work across threads.
    pub fn slots_mut(&mut self) -> &mut [Option<AgentContext>] {
        &mut self.slots
    }

    /// Number of live agents.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
