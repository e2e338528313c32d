//! Integration tests for br-driver.

use std::sync::Arc;

use br_agent::{AgentBuilder, AgentContext, AgentTable, Stats};
use br_behavior::{BehaviorGraph, GraphBuilder};
use br_core::{AgentId, DriverConfig, FactionId, NodeId, Position, Tick};
use br_decision::{AllyCount, Cooldown, HealthRatio, StateTimer, TickContext};
use br_spatial::NoSpatial;

use crate::{BehaviorDriver, DriverObserver, NoopObserver, SimBuilder, TickOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> DriverConfig {
    DriverConfig {
        tick_secs: 1.0,
        total_ticks,
        seed: 42,
        output_interval_ticks: 0,
    }
}

/// Two nodes: `a --timer(5s)--> b`.  `b` is terminal.
fn timer_graph() -> (BehaviorGraph, NodeId, NodeId) {
    let mut g = GraphBuilder::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let timer = g.add_decision("five_seconds", StateTimer::new(5.0));
    g.connect(a, timer, b).unwrap();
    (g.build().unwrap(), a, b)
}

/// One node that loops back to itself whenever a 2 s cooldown is ready.
fn pulse_graph() -> (BehaviorGraph, NodeId) {
    pulse_graph_every(2.0)
}

fn pulse_graph_every(cooldown: f32) -> (BehaviorGraph, NodeId) {
    let mut g = GraphBuilder::new();
    let pulse = g.add_node("pulse");
    let ready = g.add_decision("ready", Cooldown::new(cooldown));
    g.connect(pulse, ready, pulse).unwrap();
    (g.build().unwrap(), pulse)
}

/// Records every observer callback for later assertions.
#[derive(Default)]
struct Recorder {
    tick_starts: Vec<Tick>,
    transitions: Vec<(Tick, AgentId, NodeId, NodeId)>,
    tick_ends:   Vec<(Tick, usize)>,
    snapshots:   Vec<(Tick, usize)>,
    run_end:     Option<Tick>,
}

impl DriverObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick_starts.push(tick);
    }

    fn on_transition(&mut self, tick: Tick, agent: AgentId, from: NodeId, to: NodeId) {
        self.transitions.push((tick, agent, from, to));
    }

    fn on_tick_end(&mut self, tick: Tick, switched: usize) {
        self.tick_ends.push((tick, switched));
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentTable) {
        self.snapshots.push((tick, agents.len()));
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.run_end = Some(final_tick);
    }
}

// ── Single-agent driver ───────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;

    #[test]
    fn timer_switches_exactly_on_fifth_one_second_tick() {
        let (graph, a, b) = timer_graph();
        let driver = BehaviorDriver::new(&graph);
        let mut agent = AgentBuilder::new(AgentId(0), a).build();

        for step in 1..=4u64 {
            let ctx = TickContext::new(Tick(step), step as f64, &NoSpatial);
            assert_eq!(driver.tick(&mut agent, &ctx, 1.0), TickOutcome::Stayed, "step {step}");
            assert_eq!(agent.current_behavior, a);
            assert_eq!(agent.state_timer, step as f32);
        }

        let ctx = TickContext::new(Tick(5), 5.0, &NoSpatial);
        assert_eq!(driver.tick(&mut agent, &ctx, 1.0), TickOutcome::Switched { from: a, to: b });
        assert_eq!(agent.current_behavior, b);
        assert_eq!(agent.state_timer, 0.0);

        // `b` has no transitions: the agent stays and its timer counts up.
        for step in 6..=8u64 {
            let ctx = TickContext::new(Tick(step), step as f64, &NoSpatial);
            assert!(!driver.tick(&mut agent, &ctx, 1.0).switched());
        }
        assert_eq!(agent.current_behavior, b);
        assert_eq!(agent.state_timer, 3.0);
    }

    #[test]
    fn self_transition_resets_timer() {
        let (graph, pulse) = pulse_graph();
        let driver = BehaviorDriver::new(&graph);
        let mut agent = AgentBuilder::new(AgentId(0), pulse).build();
        agent.state_timer = 7.5;

        let ctx = TickContext::new(Tick(0), 0.0, &NoSpatial);
        let outcome = driver.tick(&mut agent, &ctx, 0.5);
        assert_eq!(outcome, TickOutcome::Switched { from: pulse, to: pulse });
        assert_eq!(agent.current_behavior, pulse);
        assert_eq!(agent.state_timer, 0.0);
    }

    #[test]
    fn terminal_node_only_accumulates_time() {
        let (graph, _, b) = timer_graph();
        let driver = BehaviorDriver::new(&graph);
        let mut agent = AgentBuilder::new(AgentId(0), b).build();
        let ctx = TickContext::new(Tick(0), 0.0, &NoSpatial);
        for _ in 0..4 {
            driver.tick(&mut agent, &ctx, 0.25);
        }
        assert_eq!(agent.current_behavior, b);
        assert_eq!(agent.state_timer, 1.0);
    }

    #[test]
    fn unknown_current_node_stays_put() {
        let (graph, _, _) = timer_graph();
        let driver = BehaviorDriver::new(&graph);
        let mut agent = AgentBuilder::new(AgentId(0), NodeId(99)).build();
        let ctx = TickContext::new(Tick(0), 0.0, &NoSpatial);
        assert_eq!(driver.tick(&mut agent, &ctx, 1.0), TickOutcome::Stayed);
        assert_eq!(agent.current_behavior, NodeId(99));
        assert_eq!(agent.state_timer, 1.0);
    }

    #[test]
    fn health_guard_reacts_to_damage_between_ticks() {
        let mut g = GraphBuilder::new();
        let fight = g.add_node("fight");
        let flee = g.add_node("flee");
        let low = g.add_decision("low_health", HealthRatio::below(25.0));
        g.connect(fight, low, flee).unwrap();
        let graph = g.build().unwrap();
        let driver = BehaviorDriver::new(&graph);

        let mut agent = AgentBuilder::new(AgentId(0), fight).stats(Stats::full(100.0)).build();
        let ctx = TickContext::new(Tick(0), 0.0, &NoSpatial);
        assert_eq!(driver.tick(&mut agent, &ctx, 1.0), TickOutcome::Stayed);

        if let Some(stats) = agent.stats.as_mut() {
            stats.damage(80.0);
        }
        assert_eq!(driver.tick(&mut agent, &ctx, 1.0), TickOutcome::Switched { from: fight, to: flee });
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;
    use br_core::BrError;

    #[test]
    fn builds_with_no_agents() {
        let (graph, _, _) = timer_graph();
        let sim = SimBuilder::new(test_config(10), Arc::new(graph)).build().unwrap();
        assert!(sim.agents().is_empty());
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn builds_with_sequential_agents() {
        let (graph, a, _) = timer_graph();
        let agents = (0..3).map(|i| AgentBuilder::new(AgentId(i), a).build()).collect();
        let sim = SimBuilder::new(test_config(10), Arc::new(graph)).agents(agents).build().unwrap();
        assert_eq!(sim.agents().len(), 3);
        assert_eq!(sim.index().len(), 3);
        assert_eq!(sim.agent(AgentId(2)).map(|a| a.id), Some(AgentId(2)));
    }

    #[test]
    fn out_of_order_ids_error() {
        let (graph, a, _) = timer_graph();
        let agents = vec![
            AgentBuilder::new(AgentId(0), a).build(),
            AgentBuilder::new(AgentId(5), a).build(),
        ];
        let result = SimBuilder::new(test_config(10), Arc::new(graph)).agents(agents).build();
        assert!(matches!(
            result,
            Err(SimError::AgentIdMismatch { index: 1, id: AgentId(5) })
        ));
    }

    #[test]
    fn unknown_initial_node_errors() {
        let (graph, _, _) = timer_graph();
        let agents = vec![AgentBuilder::new(AgentId(0), NodeId(7)).build()];
        let result = SimBuilder::new(test_config(10), Arc::new(graph)).agents(agents).build();
        assert!(matches!(result, Err(SimError::Core(BrError::NodeNotFound(NodeId(7))))));
    }

    #[test]
    fn non_positive_tick_duration_errors() {
        let (graph, _, _) = timer_graph();
        let graph = Arc::new(graph);
        let mut config = test_config(10);
        config.tick_secs = 0.0;
        assert!(matches!(
            SimBuilder::new(config.clone(), graph.clone()).build(),
            Err(SimError::Config(_))
        ));
        config.tick_secs = f32::NAN;
        assert!(matches!(SimBuilder::new(config, graph).build(), Err(SimError::Config(_))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_end_tick_and_reports_once() {
        let (graph, a, b) = timer_graph();
        let agents = vec![AgentBuilder::new(AgentId(0), a).build()];
        let mut sim = SimBuilder::new(test_config(8), Arc::new(graph)).agents(agents).build().unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(sim.clock.current_tick, Tick(8));
        assert_eq!(rec.tick_starts.len(), 8);
        assert_eq!(rec.tick_ends.len(), 8);
        assert_eq!(rec.run_end, Some(Tick(8)));
        // Tick 4 is the fifth one-second tick.
        assert_eq!(rec.transitions, vec![(Tick(4), AgentId(0), a, b)]);
        assert_eq!(rec.tick_ends[4], (Tick(4), 1));
        assert_eq!(sim.agent(AgentId(0)).map(|x| x.current_behavior), Some(b));
        assert_eq!(sim.agent(AgentId(0)).map(|x| x.state_timer), Some(3.0));
    }

    #[test]
    fn run_ticks_ignores_end_tick_and_skips_run_end() {
        let (graph, a, _) = timer_graph();
        let agents = vec![AgentBuilder::new(AgentId(0), a).build()];
        let mut sim = SimBuilder::new(test_config(2), Arc::new(graph)).agents(agents).build().unwrap();

        let mut rec = Recorder::default();
        sim.run_ticks(5, &mut rec).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        assert_eq!(rec.tick_starts.len(), 5);
        assert_eq!(rec.run_end, None);
    }

    #[test]
    fn snapshots_follow_output_interval() {
        let (graph, a, _) = timer_graph();
        let agents = (0..2).map(|i| AgentBuilder::new(AgentId(i), a).build()).collect();
        let mut config = test_config(10);
        config.output_interval_ticks = 4;
        let mut sim = SimBuilder::new(config, Arc::new(graph)).agents(agents).build().unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.snapshots, vec![(Tick(0), 2), (Tick(4), 2), (Tick(8), 2)]);
    }

    #[test]
    fn cooldown_self_loop_fires_every_two_seconds() {
        let (graph, pulse) = pulse_graph();
        let agents = vec![AgentBuilder::new(AgentId(0), pulse).build()];
        let mut sim = SimBuilder::new(test_config(7), Arc::new(graph)).agents(agents).build().unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let fired: Vec<Tick> = rec.transitions.iter().map(|&(t, ..)| t).collect();
        assert_eq!(fired, vec![Tick(0), Tick(2), Tick(4), Tick(6)]);
    }

    #[test]
    fn cooldown_windows_line_up_with_decimal_ticks() {
        for (tick_secs, cooldown) in [(0.1, 0.3), (0.05, 0.15)] {
            let (graph, pulse) = pulse_graph_every(cooldown);
            let config = DriverConfig { tick_secs, ..test_config(7) };
            let agents = vec![AgentBuilder::new(AgentId(0), pulse).build()];
            let mut sim = SimBuilder::new(config, Arc::new(graph)).agents(agents).build().unwrap();

            let mut rec = Recorder::default();
            sim.run(&mut rec).unwrap();
            let fired: Vec<Tick> = rec.transitions.iter().map(|&(t, ..)| t).collect();
            assert_eq!(fired, vec![Tick(0), Tick(3), Tick(6)], "tick {tick_secs}, cooldown {cooldown}");
        }
    }

    #[test]
    fn cooldowns_are_per_agent() {
        let (graph, pulse) = pulse_graph();
        let agents = vec![AgentBuilder::new(AgentId(0), pulse).build()];
        let mut sim = SimBuilder::new(test_config(4), Arc::new(graph)).agents(agents).build().unwrap();

        let mut rec = Recorder::default();
        sim.run_ticks(1, &mut rec).unwrap();
        // A newcomer at tick 1 has an empty ledger and fires immediately,
        // while agent 0 is still cooling down.
        sim.spawn(|id| AgentBuilder::new(id, pulse).build()).unwrap();
        sim.run_ticks(1, &mut rec).unwrap();

        assert_eq!(
            rec.transitions,
            vec![
                (Tick(0), AgentId(0), pulse, pulse),
                (Tick(1), AgentId(1), pulse, pulse),
            ]
        );
    }

    #[test]
    fn transitions_reported_in_ascending_id_order() {
        let mut g = GraphBuilder::new();
        let idle = g.add_node("idle");
        let go = g.add_node("go");
        let t = g.add_decision("one_second", StateTimer::new(1.0));
        g.connect(idle, t, go).unwrap();
        let agents = (0..6).map(|i| AgentBuilder::new(AgentId(i), idle).build()).collect();
        let mut sim = SimBuilder::new(test_config(1), Arc::new(g.build().unwrap()))
            .agents(agents)
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let ids: Vec<AgentId> = rec.transitions.iter().map(|&(_, a, ..)| a).collect();
        assert_eq!(ids, (0..6).map(AgentId).collect::<Vec<_>>());
    }

    #[test]
    fn ally_guard_sees_rebuilt_index() {
        let mut g = GraphBuilder::new();
        let hold = g.add_node("hold");
        let regroup = g.add_node("regroup");
        let alone = g.add_decision("alone", AllyCount::below(5.0, 2));
        g.connect(hold, alone, regroup).unwrap();

        let team = FactionId(1);
        let at = |i: u32, x: f32| {
            AgentBuilder::new(AgentId(i), hold).faction(team).position(Position::new(x, 0.0)).build()
        };
        // Agents 0-2 stand together; agent 3 is far away.
        let agents = vec![at(0, 0.0), at(1, 1.0), at(2, 2.0), at(3, 100.0)];
        let mut sim = SimBuilder::new(test_config(3), Arc::new(g.build().unwrap()))
            .agents(agents)
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        sim.run_ticks(1, &mut rec).unwrap();
        assert_eq!(rec.transitions, vec![(Tick(0), AgentId(3), hold, regroup)]);

        // Move agent 2 away: agents 0 and 1 now have one ally each.
        if let Some(a) = sim.agent_mut(AgentId(2)) {
            a.position = Position::new(-50.0, 0.0);
        }
        sim.run_ticks(1, &mut rec).unwrap();
        let moved: Vec<AgentId> = rec.transitions[1..].iter().map(|&(_, a, ..)| a).collect();
        assert_eq!(moved, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn noop_observer_runs() {
        let (graph, a, _) = timer_graph();
        let agents = vec![AgentBuilder::new(AgentId(0), a).build()];
        let mut sim = SimBuilder::new(test_config(3), Arc::new(graph)).agents(agents).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(3));
    }
}

// ── Spawn / despawn ───────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use super::*;
    use crate::SimError;
    use br_core::BrError;

    #[test]
    fn spawn_assigns_next_id() {
        let (graph, a, _) = timer_graph();
        let mut sim = SimBuilder::new(test_config(1), Arc::new(graph)).build().unwrap();
        let first = sim.spawn(|id| AgentBuilder::new(id, a).build()).unwrap();
        let second = sim.spawn(|id| AgentBuilder::new(id, a).build()).unwrap();
        assert_eq!((first, second), (AgentId(0), AgentId(1)));
        assert_eq!(sim.agent(second).map(|x| x.id), Some(AgentId(1)));
    }

    #[test]
    fn spawn_into_unknown_node_errors() {
        let (graph, _, _) = timer_graph();
        let mut sim = SimBuilder::new(test_config(1), Arc::new(graph)).build().unwrap();
        let result = sim.spawn(|id| AgentBuilder::new(id, NodeId(42)).build());
        assert!(matches!(result, Err(SimError::Core(BrError::NodeNotFound(NodeId(42))))));
        assert!(sim.agents().is_empty());
    }

    #[test]
    fn despawned_agents_are_not_ticked() {
        let (graph, a, _) = timer_graph();
        let agents = (0..2).map(|i| AgentBuilder::new(AgentId(i), a).build()).collect();
        let mut sim = SimBuilder::new(test_config(6), Arc::new(graph)).agents(agents).build().unwrap();

        let gone: AgentContext = sim.despawn(AgentId(0)).unwrap();
        assert_eq!(gone.id, AgentId(0));

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.transitions.iter().all(|&(_, agent, ..)| agent == AgentId(1)));
        assert_eq!(rec.transitions.len(), 1);
        assert!(sim.agent(AgentId(0)).is_none());
    }

    #[test]
    fn despawn_unknown_agent_errors() {
        let (graph, _, _) = timer_graph();
        let mut sim = SimBuilder::new(test_config(1), Arc::new(graph)).build().unwrap();
        assert!(matches!(
            sim.despawn(AgentId(3)),
            Err(SimError::Core(BrError::AgentNotFound(AgentId(3))))
        ));
    }
}
