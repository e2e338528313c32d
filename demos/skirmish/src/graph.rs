//! The skirmish behavior graph, embedded as JSON.

use std::io::Cursor;

use anyhow::{Context, Result};

use br_behavior::{BehaviorGraph, load_graph_reader};
use br_core::NodeId;

// Guards are listed in priority order: fleeing always wins.
const GRAPH_JSON: &str = r#"{
  "decisions": [
    { "name": "hurt",         "kind": "health_ratio", "threshold_pct": 30.0, "mode": "below" },
    { "name": "recovered",    "kind": "health_ratio", "threshold_pct": 70.0, "mode": "above" },
    { "name": "enemy_near",   "kind": "proximity",    "range": 12.0 },
    { "name": "enemy_lost",   "kind": "proximity",    "range": 20.0, "invert": true },
    { "name": "in_reach",     "kind": "proximity",    "range": 2.0 },
    { "name": "out_of_reach", "kind": "proximity",    "range": 3.0, "invert": true },
    { "name": "grouped",      "kind": "ally_count",   "radius": 6.0, "threshold": 2, "mode": "above" },
    { "name": "swing",        "kind": "cooldown",     "cooldown": 1.0 },
    { "name": "patrol_leg",   "kind": "state_timer",  "duration": 4.0 }
  ],
  "nodes": [
    { "name": "patrol", "transitions": [
        { "decision": "hurt",       "target": "flee" },
        { "decision": "enemy_near", "target": "chase" },
        { "decision": "patrol_leg", "target": "patrol" } ] },
    { "name": "chase", "transitions": [
        { "decision": "hurt",       "target": "flee" },
        { "decision": "in_reach",   "target": "attack" },
        { "decision": "enemy_lost", "target": "patrol" } ] },
    { "name": "attack", "transitions": [
        { "decision": "hurt",         "target": "flee" },
        { "decision": "out_of_reach", "target": "chase" },
        { "decision": "swing",        "target": "attack" } ] },
    { "name": "flee", "transitions": [
        { "decision": "grouped",   "target": "regroup" },
        { "decision": "recovered", "target": "patrol" } ] },
    { "name": "regroup", "transitions": [
        { "decision": "recovered", "target": "patrol" } ] }
  ]
}"#;

/// Node ids of the skirmish graph, resolved once by name.
#[derive(Copy, Clone, Debug)]
pub struct Nodes {
    pub patrol:  NodeId,
    pub chase:   NodeId,
    pub attack:  NodeId,
    pub flee:    NodeId,
    pub regroup: NodeId,
}

pub fn load() -> Result<(BehaviorGraph, Nodes)> {
    let graph = load_graph_reader(Cursor::new(GRAPH_JSON)).context("parsing embedded graph")?;
    let node = |name: &str| graph.node_by_name(name).with_context(|| format!("graph has no {name:?} node"));
    let nodes = Nodes {
        patrol:  node("patrol")?,
        chase:   node("chase")?,
        attack:  node("attack")?,
        flee:    node("flee")?,
        regroup: node("regroup")?,
    };
    Ok((graph, nodes))
}
