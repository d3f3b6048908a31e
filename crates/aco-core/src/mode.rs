//! The two path-finding regimes.

use std::fmt;

use crate::{AcoError, AcoResult, NodeId};

/// Moves allowed per node in an open route when no explicit budget is given.
pub const DEFAULT_BUDGET_PER_NODE: usize = 2;

/// What an ant is trying to build.
///
/// Construction and evaluation differ only in when the walk stops and
/// whether the last→first edge is counted, so both regimes share one
/// constructor and one evaluator keyed on this enum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathMode {
    /// Visit every node once from a random start; the cost includes the
    /// implicit return edge to the start.
    #[default]
    ClosedTour,

    /// Walk from `start` until `goal` is reached.  The attempt fails on a
    /// dead end or after `step_budget` moves.  No return edge.
    OpenRoute {
        start:       NodeId,
        goal:        NodeId,
        step_budget: usize,
    },
}

impl PathMode {
    /// Open route with the default budget of `2 × node_count` moves.
    pub fn open_route(start: NodeId, goal: NodeId, node_count: usize) -> Self {
        PathMode::OpenRoute {
            start,
            goal,
            step_budget: DEFAULT_BUDGET_PER_NODE * node_count,
        }
    }

    /// `true` if the cost (and deposit) includes the last→first edge.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, PathMode::ClosedTour)
    }

    /// Check start/goal against a graph of `node_count` nodes.
    pub fn validate(&self, node_count: usize) -> AcoResult<()> {
        if let PathMode::OpenRoute { start, goal, step_budget } = *self {
            for node in [start, goal] {
                if node.index() >= node_count {
                    return Err(AcoError::NodeOutOfRange { node, node_count });
                }
            }
            if start == goal {
                return Err(AcoError::StartIsGoal(start));
            }
            if step_budget == 0 {
                return Err(AcoError::ZeroStepBudget);
            }
        }
        Ok(())
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMode::ClosedTour => f.write_str("closed-tour"),
            PathMode::OpenRoute { start, goal, .. } => {
                write!(f, "open-route {} -> {}", start.0, goal.0)
            }
        }
    }
}
