//! Random spatial graph generator.
//!
//! Produces the "road network" the colony searches over:
//!
//! 1. `N` nodes uniformly in `[0, 100) × [0, 100)`.
//! 2. A ring `0-1-…-(N-1)-0`, so the graph is connected and always has a
//!    Hamiltonian cycle.
//! 3. `shortcut_factor × N` random shortcut attempts between two distinct
//!    nodes; an attempt that hits an existing edge is dropped.
//!
//! Every edge weight comes from one [`WeightModel`] chosen for the whole
//! graph, then floored at [`MIN_EDGE_WEIGHT`](crate::MIN_EDGE_WEIGHT).

use aco_core::{COORD_EXTENT, NodeId, Point, SimRng};

use crate::{Graph, GraphBuilder};

/// Default shortcut attempts per node.
pub const DEFAULT_SHORTCUT_FACTOR: usize = 2;

/// Default width of the traffic multiplier range: factors in `[1, 3)`.
pub const DEFAULT_TRAFFIC_SPREAD: f64 = 2.0;

/// How Euclidean length becomes edge weight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightModel {
    /// Weight = Euclidean length.
    Euclidean,

    /// Weight = Euclidean length × a per-edge factor drawn from
    /// `[1, 1 + spread)`, simulating uneven traffic.
    Traffic { spread: f64 },

    /// Weight = Euclidean length ÷ the square's diagonal, in `(0, 1]`.
    Normalized,
}

impl Default for WeightModel {
    fn default() -> Self {
        WeightModel::Traffic { spread: DEFAULT_TRAFFIC_SPREAD }
    }
}

impl WeightModel {
    /// Raw weight for an edge of Euclidean length `length`.  Draws from `rng`
    /// only for `Traffic`.
    pub fn weight(self, length: f64, rng: &mut SimRng) -> f64 {
        match self {
            WeightModel::Euclidean => length,
            WeightModel::Traffic { spread } => length * (1.0 + rng.unit() * spread),
            WeightModel::Normalized => length / (COORD_EXTENT * std::f64::consts::SQRT_2),
        }
    }
}

/// Fluent configuration for a random graph.
///
/// ```
/// use aco_core::SimRng;
/// use aco_graph::{GraphGenerator, WeightModel};
///
/// let g = GraphGenerator::new(12)
///     .shortcut_factor(3)
///     .weight_model(WeightModel::Euclidean)
///     .generate(&mut SimRng::new(7));
/// assert_eq!(g.node_count(), 12);
/// assert!(g.is_connected());
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    node_count:      usize,
    shortcut_factor: usize,
    weight_model:    WeightModel,
}

impl GraphGenerator {
    /// `node_count` below 2 is clamped to 2.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count:      node_count.max(2),
            shortcut_factor: DEFAULT_SHORTCUT_FACTOR,
            weight_model:    WeightModel::default(),
        }
    }

    /// Shortcut attempts per node (0 gives a bare ring).
    pub fn shortcut_factor(mut self, factor: usize) -> Self {
        self.shortcut_factor = factor;
        self
    }

    pub fn weight_model(mut self, model: WeightModel) -> Self {
        self.weight_model = model;
        self
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Draw a graph.  The same `rng` state always yields the same graph.
    pub fn generate(&self, rng: &mut SimRng) -> Graph {
        let n = self.node_count;
        let attempts = self.shortcut_factor * n;
        let mut b = GraphBuilder::with_capacity(n, n + attempts);

        for _ in 0..n {
            let x = rng.unit() * COORD_EXTENT;
            let y = rng.unit() * COORD_EXTENT;
            b.add_node(Point::new(x, y));
        }

        for i in 0..n {
            self.connect(&mut b, NodeId(i as u32), NodeId(((i + 1) % n) as u32), rng);
        }

        for _ in 0..attempts {
            let u = NodeId(rng.index(n) as u32);
            let v = NodeId(rng.index(n) as u32);
            if u != v {
                self.connect(&mut b, u, v, rng);
            }
        }

        b.build()
    }

    /// Add `u`–`v` unless already present.  The weight is drawn only for new
    /// edges so duplicates do not consume randomness.
    fn connect(&self, b: &mut GraphBuilder, u: NodeId, v: NodeId, rng: &mut SimRng) {
        if b.contains_edge(u, v) {
            return;
        }
        let length = b.node_pos(u).distance(b.node_pos(v));
        let weight = self.weight_model.weight(length, rng);
        b.insert_edge(u, v, weight);
    }
}
