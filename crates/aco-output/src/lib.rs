//! `aco-output` — engine output writers for the rust_aco framework.
//!
//! | Writer               | Files created                                 |
//! |----------------------|-----------------------------------------------|
//! | `CsvHistoryWriter`   | `step_history.csv`, `best_history.csv`        |
//! | `JsonSnapshotWriter` | `graph.json`, `best.json`                     |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`EngineOutputObserver`], which implements `aco_engine::EngineObserver`.
//! A `(A, B)` pair of writers is itself a writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use aco_output::{CsvHistoryWriter, EngineOutputObserver, JsonSnapshotWriter};
//!
//! let csv = CsvHistoryWriter::new(dir)?;
//! let json = JsonSnapshotWriter::new(dir, &engine.current_graph())?;
//! let mut obs = EngineOutputObserver::new((csv, json));
//! engine.run_steps(100, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvHistoryWriter;
pub use error::{OutputError, OutputResult};
pub use json::{JsonSnapshotWriter, best_json, graph_json};
pub use observer::EngineOutputObserver;
pub use row::{ImprovementRow, StepSummaryRow};
pub use writer::OutputWriter;
