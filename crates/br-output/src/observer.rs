//! `SimOutputObserver<W>`: bridges `DriverObserver` to an `OutputWriter`.

use br_agent::AgentTable;
use br_core::{AgentId, DriverConfig, NodeId, SimClock, Tick};
use br_driver::DriverObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DriverObserver`] that writes transitions, tick summaries and agent
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `DriverObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    pending:    Vec<TransitionRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert
    /// ticks to seconds.
    pub fn new(writer: W, config: &DriverConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DriverObserver for SimOutputObserver<W> {
    fn on_transition(&mut self, tick: Tick, agent: AgentId, from: NodeId, to: NodeId) {
        self.pending.push(TransitionRow {
            tick:      tick.0,
            time_secs: self.clock.secs_at(tick),
            agent_id:  agent.0,
            from_node: from.0,
            to_node:   to.0,
        });
    }

    fn on_tick_end(&mut self, tick: Tick, switched: usize) {
        if !self.pending.is_empty() {
            let result = self.writer.write_transitions(&self.pending);
            self.pending.clear();
            self.store_err(result);
        }

        let row = TickSummaryRow {
            tick:        tick.0,
            time_secs:   self.clock.secs_at(tick),
            transitions: switched as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentTable) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow {
                tick:        tick.0,
                agent_id:    a.id.0,
                node:        a.current_behavior.0,
                state_timer: a.state_timer,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
