//! Path cost.

use aco_core::{NodeId, PathMode};
use aco_graph::Graph;

/// Total weight of `path` under `mode`.
///
/// Closed tours add the last→first edge; open routes do not.  Returns
/// `None` for a path of fewer than two nodes or one with a consecutive
/// pair that is not an edge.
pub fn path_cost(graph: &Graph, path: &[NodeId], mode: PathMode) -> Option<f64> {
    if path.len() < 2 {
        return None;
    }

    let mut cost = 0.0;
    for pair in path.windows(2) {
        cost += graph.distance(pair[0], pair[1])?;
    }
    if mode.is_closed() {
        cost += graph.distance(path[path.len() - 1], path[0])?;
    }
    Some(cost)
}
