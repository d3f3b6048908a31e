//! Hand-built delivery network for the open-route run.
//!
//! Seven sites in a 100 × 100 square.  The depot and the customer sit at
//! opposite corners; there is a short cheap route, a long scenic one, and a
//! spur that dead-ends at the warehouse.

use aco_core::{NodeId, Point};
use aco_graph::{Graph, GraphBuilder, GraphResult};

/// Build the network.
///
/// Returns `(graph, depot, customer)`.
pub fn build_network() -> GraphResult<(Graph, NodeId, NodeId)> {
    let mut b = GraphBuilder::with_capacity(7, 8);

    let depot     = b.add_node(Point::new(5.0, 5.0));
    let market    = b.add_node(Point::new(35.0, 20.0));
    let bridge    = b.add_node(Point::new(60.0, 55.0));
    let riverside = b.add_node(Point::new(20.0, 70.0));
    let hilltop   = b.add_node(Point::new(55.0, 90.0));
    let warehouse = b.add_node(Point::new(85.0, 15.0));
    let customer  = b.add_node(Point::new(95.0, 95.0));

    // Weights are travel minutes, not straight-line distance.
    let roads = [
        (depot,     market,    12.0),
        (market,    bridge,    18.0),
        (bridge,    customer,  20.0),
        (depot,     riverside, 25.0),
        (riverside, hilltop,   22.0),
        (hilltop,   customer,  30.0),
        (riverside, bridge,    35.0),
        (market,    warehouse, 15.0),
    ];
    for (a, z, minutes) in roads {
        b.add_edge(a, z, minutes)?;
    }

    Ok((b.build(), depot, customer))
}
