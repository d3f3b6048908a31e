//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_history.csv`: one row per step
//! - `best_history.csv`: one row per improvement of the best solution

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{ImprovementRow, OutputResult, StepSummaryRow};
use crate::writer::OutputWriter;

/// Writes the run history to two CSV files.
pub struct CsvHistoryWriter {
    steps:    Writer<File>,
    bests:    Writer<File>,
    finished: bool,
}

impl CsvHistoryWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("step_history.csv"))?;
        steps.write_record(["step", "successes", "failures", "step_best", "best_cost"])?;

        let mut bests = Writer::from_path(dir.join("best_history.csv"))?;
        bests.write_record(["step", "cost", "path"])?;

        Ok(Self {
            steps,
            bests,
            finished: false,
        })
    }
}

/// Empty cell for "no value yet".
fn opt_cell(v: Option<f64>) -> String {
    v.map(|c| c.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvHistoryWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.step.to_string(),
            row.successes.to_string(),
            row.failures.to_string(),
            opt_cell(row.step_best),
            opt_cell(row.best_cost),
        ])?;
        Ok(())
    }

    fn write_improvement(&mut self, row: &ImprovementRow) -> OutputResult<()> {
        let path: Vec<String> = row.path.iter().map(u32::to_string).collect();
        self.bests.write_record(&[
            row.step.to_string(),
            row.cost.to_string(),
            path.join(" "),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.bests.flush()?;
        Ok(())
    }
}
