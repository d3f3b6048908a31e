//! Dense symmetric distance matrix.
//!
//! Cells are `Option<f64>`: `None` means "no edge", so an absent edge can
//! never leak into arithmetic as an infinity.  The matrix is row-major in a
//! single `Vec` of `n * n` cells; the diagonal is always `None`.

use aco_core::NodeId;

/// N×N symmetric edge-weight matrix.  Immutable once owned by a
/// [`Graph`](crate::Graph).
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n:     usize,
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// An `n × n` matrix with no edges.
    pub(crate) fn empty(n: usize) -> Self {
        Self { n, cells: vec![None; n * n] }
    }

    /// Set both `(a, b)` and `(b, a)`.
    pub(crate) fn set_symmetric(&mut self, a: NodeId, b: NodeId, weight: f64) {
        let (a, b) = (a.index(), b.index());
        self.cells[a * self.n + b] = Some(weight);
        self.cells[b * self.n + a] = Some(weight);
    }

    /// Side length of the matrix (the node count).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of the edge between `a` and `b`, or `None` if they are not
    /// adjacent.
    #[inline]
    pub fn get(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.cells[a.index() * self.n + b.index()]
    }

    /// One row of the matrix: the weights from `a` to every node.
    #[inline]
    pub fn row(&self, a: NodeId) -> &[Option<f64>] {
        let start = a.index() * self.n;
        &self.cells[start..start + self.n]
    }

    /// Neighbors of `a` with their edge weights, in ascending `NodeId` order.
    pub fn neighbors(&self, a: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.row(a)
            .iter()
            .enumerate()
            .filter_map(|(j, w)| w.map(|w| (NodeId(j as u32), w)))
    }
}
