//! Graph-construction error type.

use thiserror::Error;

use aco_core::NodeId;

/// Errors produced by `aco-graph`.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("self-loop on {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("edge weight {0} is not a finite non-negative number")]
    InvalidWeight(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;
