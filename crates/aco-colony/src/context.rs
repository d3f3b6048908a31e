//! Read-only colony state passed to every path constructor.

use aco_core::{ColonyParams, PathMode};
use aco_graph::Graph;

use crate::PheromoneMatrix;

/// A read-only snapshot of the colony passed to every
/// [`PathConstructor`][crate::PathConstructor] call.
///
/// Built once per step by aco-engine and shared (immutably) across all ants
/// during the construction phase.  The engine never mutates the pheromone
/// matrix while a `ColonyContext` is live; that is what lets ants run in
/// parallel without locks.
pub struct ColonyContext<'a> {
    /// The static graph: node positions and the distance matrix.
    pub graph: &'a Graph,

    /// Trail strengths as of the end of the previous step.
    pub pheromone: &'a PheromoneMatrix,

    /// `alpha`, `beta` and the rest of the tuning knobs.
    pub params: &'a ColonyParams,

    /// Which regime ants are building paths for.
    pub mode: PathMode,
}

impl<'a> ColonyContext<'a> {
    #[inline]
    pub fn new(
        graph:     &'a Graph,
        pheromone: &'a PheromoneMatrix,
        params:    &'a ColonyParams,
        mode:      PathMode,
    ) -> Self {
        Self { graph, pheromone, params, mode }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
