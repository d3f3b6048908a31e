//! Engine observer trait for progress reporting and data collection.

use crate::BestSolution;

/// What one step produced.  Passed to
/// [`EngineObserver::on_step_end`] and returned by
/// [`Engine::step`][crate::Engine::step].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSummary {
    /// Zero-based index of the step just completed.
    pub step: u64,

    /// Ants that produced a valid path.
    pub successes: usize,

    /// Ants that dead-ended, ran out of budget, or could not close a tour.
    pub failures: usize,

    /// Cheapest path found in this step alone.
    pub step_best: Option<f64>,

    /// Best cost over the whole run, after this step.
    pub best_cost: Option<f64>,
}

/// Callbacks invoked by [`Engine::step_with`][crate::Engine::step_with] and
/// [`Engine::run_steps`][crate::Engine::run_steps].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl EngineObserver for ProgressPrinter {
///     fn on_step_end(&mut self, summary: &StepSummary) {
///         if summary.step % self.interval == 0 {
///             println!("step {}: best {:?}", summary.step, summary.best_cost);
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each step, before any ant moves.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called during the fold each time a strictly cheaper path replaces
    /// the best.
    fn on_new_best(&mut self, _step: u64, _best: &BestSolution) {}

    /// Called after evaporation and deposit.
    fn on_step_end(&mut self, _summary: &StepSummary) {}

    /// Called once after the last step of a `run_steps` call.
    fn on_run_end(&mut self, _steps_run: u64) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
