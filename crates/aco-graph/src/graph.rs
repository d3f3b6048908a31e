//! Static weighted graph and its builder.
//!
//! # Data layout
//!
//! Node positions live in a `Vec<Point>` indexed by `NodeId`.  Adjacency and
//! weights live in a dense [`DistanceMatrix`]: the colony reads one row per
//! selection, and at the node counts the engine targets (tens to a few
//! hundred) a full row scan is cheaper than chasing an adjacency list.
//!
//! The [`Edge`] list is a reporting view kept in creation order for hosts
//! that draw or serialize the graph.  It is derived from the same inserts
//! as the matrix and never consulted by the colony.

use std::collections::HashSet;

use aco_core::{NodeId, Point};

use crate::matrix::DistanceMatrix;
use crate::{GraphError, GraphResult};

/// Smallest weight an edge may carry.  Keeps the `1/distance` heuristic
/// finite when two nodes coincide.
pub const MIN_EDGE_WEIGHT: f64 = 1e-6;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One undirected edge as reported to hosts.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:   NodeId,
    pub to:     NodeId,
    pub weight: f64,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected weighted graph with a dense distance matrix.
///
/// Do not construct directly; use [`GraphBuilder`] or
/// [`GraphGenerator`](crate::GraphGenerator).  A `Graph` is immutable: the
/// engine owns it for the lifetime of a run.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes:     Vec<Point>,
    distances: DistanceMatrix,
    edges:     Vec<Edge>,
}

impl Graph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Position of `node`.
    #[inline]
    pub fn node_pos(&self, node: NodeId) -> Point {
        self.nodes[node.index()]
    }

    /// All node positions, indexed by `NodeId`.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Weight of the edge `a`–`b`, or `None` if not adjacent.
    #[inline]
    pub fn distance(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.distances.get(a, b)
    }

    #[inline]
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.distances.get(a, b).is_some()
    }

    /// Neighbors of `node` with edge weights, ascending by `NodeId`.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.distances.neighbors(node)
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Nodes get sequential ids from 0.  Edges are undirected; adding an edge
/// that already exists (in either orientation) is a no-op and keeps the
/// first weight.
///
/// # Example
///
/// ```
/// use aco_core::Point;
/// use aco_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_node(Point::new(0.0, 0.0));
/// let c = b.add_node(Point::new(3.0, 4.0));
/// assert!(b.add_edge(a, c, 5.0).unwrap());
/// assert!(!b.add_edge(c, a, 9.0).unwrap()); // duplicate
/// let g = b.build();
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.distance(c, a), Some(5.0));
/// ```
pub struct GraphBuilder {
    nodes: Vec<Point>,
    edges: Vec<Edge>,
    seen:  HashSet<(u32, u32)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new(), seen: HashSet::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            seen:  HashSet::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Point) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add an undirected edge `a`–`b`.
    ///
    /// Returns `Ok(true)` if the edge was inserted and `Ok(false)` if it was
    /// already present.  Weights below [`MIN_EDGE_WEIGHT`] are raised to it;
    /// negative or non-finite weights are rejected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> GraphResult<bool> {
        for n in [a, b] {
            if n.index() >= self.nodes.len() {
                return Err(GraphError::NodeNotFound(n));
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        Ok(self.insert_edge(a, b, weight))
    }

    /// `true` if `a`–`b` was already added.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.seen.contains(&key(a, b))
    }

    /// Insert without validation.  Callers guarantee in-range, distinct
    /// endpoints and a finite non-negative weight.
    pub(crate) fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> bool {
        if !self.seen.insert(key(a, b)) {
            return false;
        }
        self.edges.push(Edge { from: a, to: b, weight: weight.max(MIN_EDGE_WEIGHT) });
        true
    }

    /// Position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> Point {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`Graph`].
    pub fn build(self) -> Graph {
        let mut distances = DistanceMatrix::empty(self.nodes.len());
        for e in &self.edges {
            distances.set_symmetric(e.from, e.to, e.weight);
        }
        Graph { nodes: self.nodes, distances, edges: self.edges }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Orientation-free dedup key.
#[inline]
fn key(a: NodeId, b: NodeId) -> (u32, u32) {
    if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) }
}
