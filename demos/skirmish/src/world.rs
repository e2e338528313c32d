//! Host-side world update applied between ticks.
//!
//! The behavior driver only decides *which* node each agent is in.  Moving,
//! fighting and healing happen here, keyed on the node.

use rand::Rng;
use rand::rngs::SmallRng;

use br_core::{AgentId, FactionId, Position};
use br_driver::Sim;

use crate::graph::Nodes;

pub const PATROL_SPEED: f32 = 1.5;
pub const CHASE_SPEED:  f32 = 3.0;
pub const FLEE_SPEED:   f32 = 3.5;
pub const HEAL_PER_SEC: f32 = 6.0;
pub const SWING_RANGE:  f32 = 2.5;

/// Rally point a faction falls back to.
pub fn home_of(faction: FactionId) -> Position {
    if faction.0 == 0 { Position::new(-25.0, 0.0) } else { Position::new(25.0, 0.0) }
}

/// Refresh every agent's target to its nearest hostile and move it
/// according to its current node.
pub fn update(sim: &mut Sim, nodes: &Nodes, rng: &mut SmallRng) {
    let dt = sim.config.tick_secs;
    sim.refresh_index();

    let targets: Vec<(AgentId, Option<Position>)> = sim
        .agents()
        .iter()
        .map(|a| (a.id, sim.index().nearest_hostile(a.position, a.faction).map(|(_, p)| p)))
        .collect();

    for (id, target) in targets {
        let Some(agent) = sim.agent_mut(id) else { continue };
        agent.target = target;
        let home = home_of(agent.faction);
        let node = agent.current_behavior;

        if node == nodes.patrol {
            let waypoint = Position::new(rng.gen_range(-4.0_f32..4.0), rng.gen_range(-10.0_f32..10.0));
            agent.position = agent.position.step_towards(waypoint, PATROL_SPEED * dt);
        } else if node == nodes.chase {
            if let Some(t) = target {
                agent.position = agent.position.step_towards(t, CHASE_SPEED * dt);
            }
        } else if node == nodes.flee {
            agent.position = agent.position.step_towards(home, FLEE_SPEED * dt);
        } else if node == nodes.regroup {
            agent.position = agent.position.step_towards(home, PATROL_SPEED * dt);
            if let Some(stats) = agent.stats.as_mut() {
                stats.heal(HEAL_PER_SEC * dt);
            }
        }
    }
}

/// Resolve this tick's swings: each attacker hits the nearest hostile in
/// reach.  Returns the agents whose health reached zero.
pub fn resolve_swings(sim: &mut Sim, swings: &[AgentId], rng: &mut SmallRng) -> Vec<AgentId> {
    let hits: Vec<AgentId> = swings
        .iter()
        .filter_map(|&attacker| {
            let a = sim.agent(attacker)?;
            let (victim, at) = sim.index().nearest_hostile(a.position, a.faction)?;
            (a.position.distance(at) <= SWING_RANGE).then_some(victim)
        })
        .collect();

    let mut fallen = Vec::new();
    for victim in hits {
        let Some(stats) = sim.agent_mut(victim).and_then(|v| v.stats.as_mut()) else { continue };
        if stats.current_health <= 0.0 {
            continue;
        }
        stats.damage(rng.gen_range(8.0_f32..16.0));
        if stats.current_health <= 0.0 {
            fallen.push(victim);
        }
    }
    fallen
}
