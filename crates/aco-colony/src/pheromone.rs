//! The shared pheromone matrix.
//!
//! Aligned cell-for-cell with the graph's distance matrix.  Entries are
//! non-zero only on edges; every mutation touches both `(i, j)` and
//! `(j, i)`, so the matrix stays symmetric.

use aco_core::NodeId;
use aco_graph::Graph;

/// N×N symmetric, non-negative reinforcement values.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    n:     usize,
    cells: Vec<f64>,
}

impl PheromoneMatrix {
    /// `initial` on every edge of `graph`, zero elsewhere.
    pub fn new(graph: &Graph, initial: f64) -> Self {
        let n = graph.node_count();
        let mut m = Self { n, cells: vec![0.0; n * n] };
        for e in graph.edges() {
            m.set(e.from, e.to, initial);
        }
        m
    }

    #[inline]
    fn at(&self, a: NodeId, b: NodeId) -> usize {
        a.index() * self.n + b.index()
    }

    #[inline]
    fn set(&mut self, a: NodeId, b: NodeId, value: f64) {
        let (ab, ba) = (self.at(a, b), self.at(b, a));
        self.cells[ab] = value;
        self.cells[ba] = value;
    }

    #[inline]
    fn add(&mut self, a: NodeId, b: NodeId, amount: f64) {
        let (ab, ba) = (self.at(a, b), self.at(b, a));
        self.cells[ab] += amount;
        self.cells[ba] += amount;
    }

    /// Side length of the matrix.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Trail strength between `a` and `b`.
    #[inline]
    pub fn get(&self, a: NodeId, b: NodeId) -> f64 {
        self.cells[self.at(a, b)]
    }

    /// Trail strengths from `a` to every node.
    #[inline]
    pub fn row(&self, a: NodeId) -> &[f64] {
        let start = a.index() * self.n;
        &self.cells[start..start + self.n]
    }

    /// Multiply every edge entry by `1 - rate`.  Non-edges stay at zero and
    /// are never touched.  Each edge is scaled exactly once per call.
    pub fn evaporate(&mut self, graph: &Graph, rate: f64) {
        let keep = 1.0 - rate;
        for e in graph.edges() {
            let v = self.get(e.from, e.to) * keep;
            self.set(e.from, e.to, v);
        }
    }

    /// Add `amount` to every edge `path` traverses, in both directions.
    /// With `closing`, the last→first edge is reinforced too.
    ///
    /// Consecutive pairs that are not edges of `graph` are skipped; a
    /// correctly constructed path never contains one.
    pub fn deposit(&mut self, graph: &Graph, path: &[NodeId], closing: bool, amount: f64) {
        for pair in path.windows(2) {
            if graph.has_edge(pair[0], pair[1]) {
                self.add(pair[0], pair[1], amount);
            }
        }
        if closing && path.len() >= 2 {
            let (last, first) = (path[path.len() - 1], path[0]);
            if graph.has_edge(last, first) {
                self.add(last, first, amount);
            }
        }
    }

    /// Sum of all entries.  Each undirected edge counts twice.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }
}
