//! Plain data row types written by output backends.

use aco_engine::{BestSolution, StepSummary};

/// Summary statistics for one engine step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:      u64,
    pub successes: u64,
    pub failures:  u64,
    /// Cheapest path this step; `None` if every ant failed.
    pub step_best: Option<f64>,
    /// Best over the run so far; `None` until the first success.
    pub best_cost: Option<f64>,
}

impl From<&StepSummary> for StepSummaryRow {
    fn from(s: &StepSummary) -> Self {
        Self {
            step:      s.step,
            successes: s.successes as u64,
            failures:  s.failures as u64,
            step_best: s.step_best,
            best_cost: s.best_cost,
        }
    }
}

/// One improvement of the best solution.
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementRow {
    pub step: u64,
    pub cost: f64,
    pub path: Vec<u32>,
}

impl ImprovementRow {
    pub fn new(step: u64, best: &BestSolution) -> Self {
        Self {
            step,
            cost: best.cost,
            path: best.path.iter().map(|n| n.0).collect(),
        }
    }
}
