//! JSON snapshot encoding and the snapshot-file backend.
//!
//! The shapes match what a browser front end polls for:
//!
//! ```text
//! graph.json  {"nodes":[{"id":0,"x":..,"y":..}], "edges":[{"from":0,"to":1,"weight":..}]}
//! best.json   {"bestDist": 123.4, "bestPath": [0, 3, 1, 2]}
//! ```
//!
//! `bestDist` is `null` until some ant succeeds.

use std::fs;
use std::path::{Path, PathBuf};

use aco_engine::{BestSnapshot, GraphSnapshot};
use serde::Serialize;

use crate::{ImprovementRow, OutputResult, StepSummaryRow};
use crate::writer::OutputWriter;

#[derive(Serialize)]
struct BestWire<'a> {
    #[serde(rename = "bestDist")]
    best_dist: Option<f64>,
    #[serde(rename = "bestPath")]
    best_path: &'a [u32],
}

/// Encode the graph snapshot.
pub fn graph_json(graph: &GraphSnapshot) -> OutputResult<String> {
    Ok(serde_json::to_string(graph)?)
}

/// Encode the best snapshot as `{"bestDist":…,"bestPath":[…]}`.
pub fn best_json(best: &BestSnapshot) -> OutputResult<String> {
    let wire = BestWire { best_dist: best.cost, best_path: &best.path };
    Ok(serde_json::to_string(&wire)?)
}

/// Keeps `graph.json` and `best.json` in a directory current.
///
/// The graph never changes, so it is written once on creation.  `best.json`
/// starts as the empty best and is rewritten on every improvement.
pub struct JsonSnapshotWriter {
    best_path: PathBuf,
}

impl JsonSnapshotWriter {
    pub fn new(dir: &Path, graph: &GraphSnapshot) -> OutputResult<Self> {
        fs::write(dir.join("graph.json"), graph_json(graph)?)?;
        let best_path = dir.join("best.json");
        fs::write(&best_path, best_json(&BestSnapshot::default())?)?;
        Ok(Self { best_path })
    }
}

impl OutputWriter for JsonSnapshotWriter {
    fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    fn write_improvement(&mut self, row: &ImprovementRow) -> OutputResult<()> {
        let snap = BestSnapshot { cost: Some(row.cost), path: row.path.clone() };
        fs::write(&self.best_path, best_json(&snap)?)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
