//! `EngineOutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use aco_engine::{BestSolution, EngineObserver, StepSummary};

use crate::row::{ImprovementRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EngineObserver`] that writes step summaries and best-solution
/// improvements to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `EngineObserver`
/// methods have no return value.  After `run_steps` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct EngineOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EngineOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run_steps` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
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

impl<W: OutputWriter> EngineObserver for EngineOutputObserver<W> {
    fn on_new_best(&mut self, step: u64, best: &BestSolution) {
        let result = self.writer.write_improvement(&ImprovementRow::new(step, best));
        self.store_err(result);
    }

    fn on_step_end(&mut self, summary: &StepSummary) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _steps_run: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
