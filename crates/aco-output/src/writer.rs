//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ImprovementRow, OutputResult, StepSummaryRow};

/// Trait implemented by the CSV and JSON writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`EngineOutputObserver::take_error`][crate::EngineOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Record a new best solution.
    fn write_improvement(&mut self, row: &ImprovementRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Fan out to two writers.  The first error wins, but both writers are
/// always called.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        let a = self.0.write_step_summary(row);
        let b = self.1.write_step_summary(row);
        a.and(b)
    }

    fn write_improvement(&mut self, row: &ImprovementRow) -> OutputResult<()> {
        let a = self.0.write_improvement(row);
        let b = self.1.write_improvement(row);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.0.finish();
        let b = self.1.finish();
        a.and(b)
    }
}
