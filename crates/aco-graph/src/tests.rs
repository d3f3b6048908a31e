//! Unit tests for aco-graph.
//!
//! Hand-built graphs cover the builder and matrix; generated graphs are
//! checked for the structural guarantees the colony relies on.

#[cfg(test)]
mod helpers {
    use aco_core::{NodeId, Point};
    use crate::{Graph, GraphBuilder};

    /// Four nodes on a line with a detour:
    ///
    ///   0 —1.0— 1 —1.0— 2 —1.0— 3
    ///    \_______________4.0___/
    pub fn line_with_detour() -> (Graph, [NodeId; 4]) {
        let mut b = GraphBuilder::new();
        let n0 = b.add_node(Point::new(0.0, 0.0));
        let n1 = b.add_node(Point::new(1.0, 0.0));
        let n2 = b.add_node(Point::new(2.0, 0.0));
        let n3 = b.add_node(Point::new(3.0, 0.0));
        b.add_edge(n0, n1, 1.0).unwrap();
        b.add_edge(n1, n2, 1.0).unwrap();
        b.add_edge(n2, n3, 1.0).unwrap();
        b.add_edge(n0, n3, 4.0).unwrap();
        (b.build(), [n0, n1, n2, n3])
    }
}

// ── Builder & matrix ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use aco_core::{NodeId, Point};
    use crate::{GraphBuilder, GraphError, MIN_EDGE_WEIGHT};

    #[test]
    fn empty_build() {
        let g = GraphBuilder::new().build();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
        assert!(g.is_connected());
    }

    #[test]
    fn matrix_is_symmetric() {
        let (g, [n0, n1, _, n3]) = super::helpers::line_with_detour();
        assert_eq!(g.distance(n0, n1), Some(1.0));
        assert_eq!(g.distance(n1, n0), Some(1.0));
        assert_eq!(g.distance(n3, n0), Some(4.0));
        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(g.distance(NodeId(a), NodeId(b)), g.distance(NodeId(b), NodeId(a)));
            }
        }
    }

    #[test]
    fn diagonal_and_non_edges_are_absent() {
        let (g, [n0, _, n2, _]) = super::helpers::line_with_detour();
        assert_eq!(g.distance(n0, n0), None);
        assert_eq!(g.distance(n0, n2), None);
        assert!(!g.has_edge(n0, n2));
    }

    #[test]
    fn duplicate_edge_is_noop() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0));
        let c = b.add_node(Point::new(1.0, 0.0));
        assert!(b.add_edge(a, c, 2.0).unwrap());
        assert!(!b.add_edge(c, a, 7.0).unwrap());
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.distance(a, c), Some(2.0), "first weight wins");
    }

    #[test]
    fn zero_weight_is_floored() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point::new(5.0, 5.0));
        let c = b.add_node(Point::new(5.0, 5.0));
        b.add_edge(a, c, 0.0).unwrap();
        let g = b.build();
        assert_eq!(g.distance(a, c), Some(MIN_EDGE_WEIGHT));
    }

    #[test]
    fn invalid_edges_rejected() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0));
        let c = b.add_node(Point::new(1.0, 0.0));
        assert_eq!(b.add_edge(a, a, 1.0), Err(GraphError::SelfLoop(a)));
        assert_eq!(b.add_edge(a, NodeId(9), 1.0), Err(GraphError::NodeNotFound(NodeId(9))));
        assert!(matches!(b.add_edge(a, c, -1.0), Err(GraphError::InvalidWeight(_))));
        assert!(matches!(b.add_edge(a, c, f64::INFINITY), Err(GraphError::InvalidWeight(_))));
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn neighbors_ascending_with_weights() {
        let (g, [n0, n1, _, n3]) = super::helpers::line_with_detour();
        let nbrs: Vec<_> = g.neighbors(n0).collect();
        assert_eq!(nbrs, vec![(n1, 1.0), (n3, 4.0)]);
        assert_eq!(g.degree(n0), 2);
    }

    #[test]
    fn edges_reported_in_creation_order() {
        let (g, [n0, n1, _, n3]) = super::helpers::line_with_detour();
        let edges = g.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!((edges[0].from, edges[0].to), (n0, n1));
        assert_eq!((edges[3].from, edges[3].to, edges[3].weight), (n0, n3, 4.0));
    }
}

// ── Reachability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reach {
    use aco_core::Point;
    use crate::GraphBuilder;

    #[test]
    fn connected_graph_reaches_everything() {
        let (g, [n0, _, _, n3]) = super::helpers::line_with_detour();
        assert!(g.is_connected());
        assert!(g.is_reachable(n3, n0));
    }

    #[test]
    fn isolated_node_unreachable() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0));
        let c = b.add_node(Point::new(1.0, 0.0));
        let lone = b.add_node(Point::new(2.0, 0.0));
        b.add_edge(a, c, 1.0).unwrap();
        let g = b.build();
        assert!(!g.is_connected());
        assert!(!g.is_reachable(a, lone));
        assert_eq!(g.reachable_from(a), vec![true, true, false]);
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use aco_core::{NodeId, SimRng};
    use crate::{GraphGenerator, MIN_EDGE_WEIGHT, WeightModel};

    #[test]
    fn node_count_clamped_to_two() {
        let g = GraphGenerator::new(0).generate(&mut SimRng::new(1));
        assert_eq!(g.node_count(), 2);
        // The two ring edges 0-1 and 1-0 collapse into one.
        assert!(g.has_edge(NodeId(0), NodeId(1)));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn coordinates_in_extent() {
        let g = GraphGenerator::new(50).generate(&mut SimRng::new(2));
        assert!(g.nodes().iter().all(|p| p.in_extent()));
    }

    #[test]
    fn ring_edges_always_present() {
        for seed in 0..20 {
            let g = GraphGenerator::new(17).generate(&mut SimRng::new(seed));
            for i in 0..17u32 {
                assert!(g.has_edge(NodeId(i), NodeId((i + 1) % 17)), "seed {seed}: ring edge {i}");
            }
        }
    }

    #[test]
    fn generated_graphs_are_connected() {
        for seed in 0..20 {
            let g = GraphGenerator::new(30).generate(&mut SimRng::new(seed));
            assert!(g.is_connected(), "seed {seed}");
        }
    }

    #[test]
    fn bare_ring_without_shortcuts() {
        let g = GraphGenerator::new(8).shortcut_factor(0).generate(&mut SimRng::new(3));
        assert_eq!(g.edge_count(), 8);
        assert!((0..8).all(|i| g.degree(NodeId(i)) == 2));
    }

    #[test]
    fn shortcuts_bounded_by_attempts() {
        let g = GraphGenerator::new(10).shortcut_factor(3).generate(&mut SimRng::new(4));
        assert!(g.edge_count() >= 10);
        assert!(g.edge_count() <= 10 + 30);
        // Simple graph upper bound: n(n-1)/2.
        assert!(g.edge_count() <= 45);
    }

    #[test]
    fn same_seed_same_graph() {
        let a = GraphGenerator::new(25).generate(&mut SimRng::new(99));
        let b = GraphGenerator::new(25).generate(&mut SimRng::new(99));
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn euclidean_weights_match_positions() {
        let g = GraphGenerator::new(15)
            .weight_model(WeightModel::Euclidean)
            .generate(&mut SimRng::new(5));
        for e in g.edges() {
            let d = g.node_pos(e.from).distance(g.node_pos(e.to)).max(MIN_EDGE_WEIGHT);
            assert_eq!(e.weight, d);
        }
    }

    #[test]
    fn traffic_weights_within_factor_range() {
        let g = GraphGenerator::new(15)
            .weight_model(WeightModel::Traffic { spread: 2.0 })
            .generate(&mut SimRng::new(6));
        for e in g.edges() {
            let d = g.node_pos(e.from).distance(g.node_pos(e.to));
            assert!(e.weight >= d.max(MIN_EDGE_WEIGHT) - 1e-12);
            assert!(e.weight < (3.0 * d).max(MIN_EDGE_WEIGHT) + 1e-12);
        }
    }

    #[test]
    fn normalized_weights_in_unit_interval() {
        let g = GraphGenerator::new(40)
            .weight_model(WeightModel::Normalized)
            .generate(&mut SimRng::new(8));
        assert!(g.edges().iter().all(|e| e.weight >= MIN_EDGE_WEIGHT && e.weight <= 1.0));
    }
}
