//! Configuration error type.
//!
//! Downstream crates wrap `AcoError` as one variant of their own enums via
//! `#[from]`, so a bad parameter surfaces with the same message everywhere.

use thiserror::Error;

use crate::NodeId;

/// Fatal configuration errors.  There is no recovery path: the caller must
/// supply valid parameters.
#[derive(Debug, Error, PartialEq)]
pub enum AcoError {
    #[error("ant count must be at least 1")]
    NoAnts,

    #[error("graph needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("parameter `{name}` = {value} is out of range ({expected})")]
    Param {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },

    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("open route start and goal are both {0}")]
    StartIsGoal(NodeId),

    #[error("open route step budget must be at least 1")]
    ZeroStepBudget,
}

/// Shorthand result type for configuration checks.
pub type AcoResult<T> = Result<T, AcoError>;
