//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `transitions.csv`
//! - `tick_summaries.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow, TransitionRow};

pub const TRANSITIONS_FILE: &str = "transitions.csv";
pub const TICK_SUMMARIES_FILE: &str = "tick_summaries.csv";
pub const SNAPSHOTS_FILE: &str = "agent_snapshots.csv";

/// Writes run output to three CSV files.
pub struct CsvWriter {
    transitions: Writer<File>,
    summaries:   Writer<File>,
    snapshots:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.  Existing files are truncated.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut transitions = Writer::from_path(dir.join(TRANSITIONS_FILE))?;
        transitions.write_record(["tick", "time_secs", "agent_id", "from_node", "to_node"])?;

        let mut summaries = Writer::from_path(dir.join(TICK_SUMMARIES_FILE))?;
        summaries.write_record(["tick", "time_secs", "transitions"])?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["tick", "agent_id", "node", "state_timer"])?;

        Ok(Self {
            transitions,
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_transitions(&mut self, rows: &[TransitionRow]) -> OutputResult<()> {
        for row in rows {
            self.transitions.write_record(&[
                row.tick.to_string(),
                row.time_secs.to_string(),
                row.agent_id.to_string(),
                row.from_node.to_string(),
                row.to_node.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.time_secs.to_string(),
            row.transitions.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.node.to_string(),
                row.state_timer.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transitions.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
