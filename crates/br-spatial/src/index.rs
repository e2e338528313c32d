//! R-tree snapshot of agent positions.
//!
//! The index is rebuilt once per tick, before any decision runs, from the
//! positions the host game wrote between ticks.  Decisions then query it
//! read-only, which keeps the decision phase free of shared mutation.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use br_agent::AgentContext;
use br_core::{AgentId, FactionId, Position};

use crate::SpatialQuery;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: an `[x, y]` point tagged with its agent and
/// faction.
#[derive(Clone, Debug)]
struct AgentEntry {
    point:   [f32; 2],
    agent:   AgentId,
    faction: FactionId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── AgentIndex ────────────────────────────────────────────────────────────────

/// Spatial index over a snapshot of agent positions.
pub struct AgentIndex {
    tree: RTree<AgentEntry>,
}

impl AgentIndex {
    /// An index with no agents.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from agent contexts.
    ///
    /// Time complexity: O(N log N).
    pub fn build<'a, I>(agents: I) -> Self
    where
        I: IntoIterator<Item = &'a AgentContext>,
    {
        Self::from_points(agents.into_iter().map(|a| (a.id, a.faction, a.position)))
    }

    /// Bulk-load an index from raw `(agent, faction, position)` triples.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (AgentId, FactionId, Position)>,
    {
        let entries: Vec<AgentEntry> = points
            .into_iter()
            .map(|(agent, faction, pos)| AgentEntry { point: pos.to_array(), agent, faction })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Agents within `radius` of `origin`, optionally restricted to `faction`.
    ///
    /// Order is unspecified.
    pub fn agents_in_radius(
        &self,
        origin:  Position,
        radius:  f32,
        faction: Option<FactionId>,
    ) -> impl Iterator<Item = AgentId> + '_ {
        let r2 = radius * radius;
        self.tree
            .locate_within_distance(origin.to_array(), r2)
            .filter(move |e| faction.is_none_or(|f| e.faction == f))
            .map(|e| e.agent)
    }

    /// Nearest agent to `origin` belonging to any faction other than
    /// `own_faction`.  Used by hosts to pick targets.
    pub fn nearest_hostile(&self, origin: Position, own_faction: FactionId) -> Option<(AgentId, Position)> {
        self.tree
            .nearest_neighbor_iter(&origin.to_array())
            .find(|e| e.faction != own_faction)
            .map(|e| (e.agent, Position::from(e.point)))
    }
}

impl Default for AgentIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpatialQuery for AgentIndex {
    fn count_in_radius(&self, origin: Position, radius: f32, faction: Option<FactionId>) -> usize {
        if radius < 0.0 {
            return 0;
        }
        self.agents_in_radius(origin, radius, faction).count()
    }
}
