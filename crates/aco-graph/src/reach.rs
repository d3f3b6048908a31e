//! Breadth-first reachability over a [`Graph`].
//!
//! The colony never needs shortest paths, only the guarantee that a graph
//! is connected (every generated graph must be) and, in open-route mode, a
//! quick way for hosts to check that the goal can be reached at all.

use std::collections::VecDeque;

use aco_core::NodeId;

use crate::Graph;

impl Graph {
    /// Mark every node reachable from `from`.  Indexed by `NodeId`.
    pub fn reachable_from(&self, from: NodeId) -> Vec<bool> {
        let mut seen = vec![false; self.node_count()];
        if from.index() >= seen.len() {
            return seen;
        }

        let mut queue = VecDeque::new();
        seen[from.index()] = true;
        queue.push_back(from);

        while let Some(node) = queue.pop_front() {
            for (next, _) in self.neighbors(node) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// `true` if `to` can be reached from `from`.
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> bool {
        self.reachable_from(from).get(to.index()).copied().unwrap_or(false)
    }

    /// `true` if every node is reachable from node 0.  An empty graph is
    /// trivially connected.
    pub fn is_connected(&self) -> bool {
        self.is_empty() || self.reachable_from(NodeId(0)).iter().all(|&r| r)
    }
}
