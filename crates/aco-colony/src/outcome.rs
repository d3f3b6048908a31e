//! What one ant's construction attempt produced.

use std::fmt;

use aco_core::NodeId;

/// Why an ant gave up.
///
/// Failure is an ordinary outcome: the engine records it, skips the ant
/// when scoring and depositing, and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    /// No unvisited neighbor was reachable from `at`.
    DeadEnd { at: NodeId },

    /// An open route used its whole move budget without reaching the goal.
    BudgetExhausted,

    /// A closed tour visited every node but its last node `last` has no
    /// edge back to the start, so the cycle cannot be closed.
    Unclosed { last: NodeId },
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailReason::DeadEnd { at } => write!(f, "dead end at {at}"),
            FailReason::BudgetExhausted => f.write_str("step budget exhausted"),
            FailReason::Unclosed { last } => write!(f, "no return edge from {last}"),
        }
    }
}

/// Terminal state of one construction.
///
/// For open routes the per-ant walk is `AtStart → InProgress → Succeeded`
/// or `InProgress → Failed`; only the two terminal states ever leave the
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AntOutcome {
    /// A simple path: every node of a closed tour, or start … goal.
    Succeeded(Vec<NodeId>),

    Failed(FailReason),
}

impl AntOutcome {
    /// The path, if the ant succeeded.
    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            AntOutcome::Succeeded(path) => Some(path),
            AntOutcome::Failed(_) => None,
        }
    }
}
