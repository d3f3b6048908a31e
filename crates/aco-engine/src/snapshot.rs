//! Plain-data views handed across the host boundary.
//!
//! Ids are raw `u32` here so hosts can render or serialize them without
//! depending on aco-core.

use aco_core::NodeId;
use aco_graph::Graph;

/// The cheapest successful path seen so far.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestSolution {
    pub cost: f64,
    pub path: Vec<NodeId>,
    /// Step in which this path was constructed.
    pub found_at_step: u64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeView {
    pub id: u32,
    pub x:  f64,
    pub y:  f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeView {
    pub from:   u32,
    pub to:     u32,
    pub weight: f64,
}

/// Every node with its coordinates and every edge in creation order.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphSnapshot {
    pub fn of(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, p)| NodeView { id: i as u32, x: p.x, y: p.y })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|e| EdgeView { from: e.from.0, to: e.to.0, weight: e.weight })
            .collect();
        Self { nodes, edges }
    }
}

/// Best cost and path, or `cost: None` with an empty path before the first
/// success.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestSnapshot {
    pub cost: Option<f64>,
    pub path: Vec<u32>,
}

impl From<Option<&BestSolution>> for BestSnapshot {
    fn from(best: Option<&BestSolution>) -> Self {
        match best {
            Some(b) => Self {
                cost: Some(b.cost),
                path: b.path.iter().map(|n| n.0).collect(),
            },
            None => Self::default(),
        }
    }
}
