//! `br-output`: run output writers for the rust_brain engine.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File                  | One row per                                   |
//! |-----------------------|-----------------------------------------------|
//! | `transitions.csv`     | node switch (self-transitions included)       |
//! | `tick_summaries.csv`  | tick                                          |
//! | `agent_snapshots.csv` | live agent, every `output_interval_ticks`     |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `br_driver::DriverObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use br_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow, TransitionRow};
pub use writer::OutputWriter;
