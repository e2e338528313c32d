//! skirmish: two small squads driven by one shared behavior graph.
//!
//! Each agent patrols, chases the nearest hostile, attacks on a cooldown,
//! flees when badly hurt and regroups with its squad to heal.  The graph
//! lives in `graph.rs` as JSON; movement and combat are host code in
//! `world.rs`, applied between ticks.
//!
//! Usage: `skirmish [config.json]`, where the optional file holds a
//! `DriverConfig` (`tick_secs`, `total_ticks`, `seed`,
//! `output_interval_ticks`).  Set `RUST_LOG=br_driver=debug` to log every
//! switch.

mod graph;
mod world;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use br_agent::{AgentBuilder, AgentTable, Stats};
use br_core::{AgentId, DriverConfig, FactionId, NodeId, Position, Tick};
use br_driver::{DriverObserver, Sim, SimBuilder};
use br_output::{CsvWriter, OutputWriter, SimOutputObserver};

use graph::Nodes;

// ── Constants ─────────────────────────────────────────────────────────────────

const SQUAD_SIZE:     u32   = 6;
const MAX_HEALTH:     f32   = 100.0;
const OUTPUT_DIR:     &str  = "output/skirmish";

/// Tick at which the blue squad walks into a minefield.
const AMBUSH_TICK:    u64   = 80;
const AMBUSH_DAMAGE:  f32   = 45.0;

fn default_config() -> DriverConfig {
    DriverConfig {
        tick_secs:             0.25,
        total_ticks:           480, // two minutes
        seed:                  7,
        output_interval_ticks: 40,
    }
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer while collecting attack swings and counting
/// entries per node for the summary.
struct SkirmishObserver<W: OutputWriter> {
    inner:   SimOutputObserver<W>,
    attack:  NodeId,
    swings:  Vec<AgentId>,
    entries: Vec<usize>,
    total:   usize,
}

impl<W: OutputWriter> SkirmishObserver<W> {
    fn new(inner: SimOutputObserver<W>, attack: NodeId, node_count: usize) -> Self {
        Self { inner, attack, swings: Vec::new(), entries: vec![0; node_count], total: 0 }
    }
}

impl<W: OutputWriter> DriverObserver for SkirmishObserver<W> {
    fn on_transition(&mut self, tick: Tick, agent: AgentId, from: NodeId, to: NodeId) {
        if from == self.attack && to == self.attack {
            self.swings.push(agent);
        }
        if let Some(n) = self.entries.get_mut(to.index()) {
            *n += 1;
        }
        self.total += 1;
        self.inner.on_transition(tick, agent, from, to);
    }

    fn on_tick_end(&mut self, tick: Tick, switched: usize) {
        self.inner.on_tick_end(tick, switched);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentTable) {
        self.inner.on_snapshot(tick, agents);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<DriverConfig> {
    match std::env::args().nth(1) {
        None => Ok(default_config()),
        Some(path) => {
            let file = std::fs::File::open(&path).with_context(|| format!("opening {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {path}"))
        }
    }
}

fn spawn_squads(sim: &mut Sim, nodes: &Nodes, rng: &mut SmallRng) -> Result<()> {
    for faction in [FactionId(0), FactionId(1)] {
        let home = world::home_of(faction);
        for _ in 0..SQUAD_SIZE {
            let at = Position::new(
                home.x + rng.gen_range(-3.0_f32..3.0),
                home.y + rng.gen_range(-8.0_f32..8.0),
            );
            sim.spawn(|id| {
                AgentBuilder::new(id, nodes.patrol)
                    .faction(faction)
                    .position(at)
                    .stats(Stats::full(MAX_HEALTH))
                    .build()
            })?;
        }
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    println!("=== skirmish — rust_brain behavior driver ===");
    println!(
        "Squads: 2 × {SQUAD_SIZE}  |  Ticks: {} × {} s  |  Seed: {}",
        config.total_ticks, config.tick_secs, config.seed
    );
    println!();

    // 1. Graph.
    let (graph, nodes) = graph::load()?;
    let graph = Arc::new(graph);
    println!("Behavior graph: {} nodes, {} decisions", graph.node_count(), graph.decision_count());

    // 2. Sim and agents.
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut sim = SimBuilder::new(config.clone(), Arc::clone(&graph)).build()?;
    spawn_squads(&mut sim, &nodes, &mut rng)?;
    world::update(&mut sim, &nodes, &mut rng);

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SkirmishObserver::new(
        SimOutputObserver::new(writer, &config),
        nodes.attack,
        graph.node_count(),
    );

    // 4. Run, interleaving host updates with driver ticks.
    let t0 = Instant::now();
    let end = config.end_tick();
    let mut fallen_total = 0usize;
    while sim.clock.current_tick < end {
        let tick = sim.clock.current_tick;
        sim.step(&mut obs);

        let swings = std::mem::take(&mut obs.swings);
        let mut fallen = world::resolve_swings(&mut sim, &swings, &mut rng);

        if tick.0 == AMBUSH_TICK {
            for agent in sim.agents_mut().iter_mut().filter(|a| a.faction == FactionId(1)) {
                if let Some(stats) = agent.stats.as_mut() {
                    stats.damage(AMBUSH_DAMAGE);
                    if stats.current_health <= 0.0 && !fallen.contains(&agent.id) {
                        fallen.push(agent.id);
                    }
                }
            }
            info!(%tick, damage = AMBUSH_DAMAGE, "blue squad ambushed");
        }

        for id in fallen {
            sim.despawn(id)?;
            fallen_total += 1;
            info!(%tick, agent = %id, "agent fell");
        }

        world::update(&mut sim, &nodes, &mut rng);
    }
    sim.finish(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    // 5. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  transitions : {}", obs.total);
    println!("  fallen      : {fallen_total}");
    for (id, node) in graph.nodes() {
        println!("  entered {:<8}: {}", node.name, obs.entries[id.index()]);
    }
    println!("  output      : {OUTPUT_DIR}/");
    println!();

    // 6. Final state table.
    println!("{:<8} {:<8} {:<10} {:>8} {:>8}", "Agent", "Squad", "Behavior", "Health", "Timer");
    println!("{}", "-".repeat(46));
    for agent in sim.agents().iter() {
        println!(
            "{:<8} {:<8} {:<10} {:>8.1} {:>8.2}",
            agent.id.0,
            if agent.faction == FactionId(0) { "red" } else { "blue" },
            graph.node_name(agent.current_behavior),
            agent.stats.map_or(0.0, |s| s.current_health),
            agent.state_timer,
        );
    }

    Ok(())
}
