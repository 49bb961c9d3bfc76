use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{DeviceGraph, NodeIndex};

/// How a device forwards traffic to one destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    /// The neighbour traffic is forwarded to. A device routes to itself
    /// through itself.
    pub next_hop: NodeIndex,
    /// Sum of the speed classes along the cheapest path.
    pub cost: u64,
}

/// Cheapest routes from one device to every other device of a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingTable {
    source: NodeIndex,
    routes: Vec<Option<Route>>,
}

impl RoutingTable {
    /// The device this table belongs to.
    #[inline]
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// The route towards `destination`, or `None` if it is unreachable or
    /// not a device of the network.
    #[inline]
    pub fn route(&self, destination: NodeIndex) -> Option<Route> {
        self.routes.get(destination.index()).copied().flatten()
    }

    /// Iterates over every destination with its route, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, Option<Route>)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, route)| (NodeIndex::new(i), *route))
    }

    /// Number of destinations reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.routes.iter().filter(|r| r.is_some()).count()
    }
}

/// Computes the routing table of `source` with Dijkstra's algorithm.
///
/// The cost of a link is the numeric value of its speed class, so paths over
/// fast links are preferred. Among equally cheap paths the one leaving
/// through the neighbour with the smallest index is chosen.
///
/// If `source` is not a device, every route of the table is `None`.
///
/// # Example
///
/// ```
/// # use devnet::{algorithms::routing_table, DeviceGraph, NodeIndex, SpeedClass};
/// let mut graph = DeviceGraph::new(3);
/// let n = NodeIndex::new;
/// graph.add_link(n(0), n(1), SpeedClass::TenGigabit).unwrap();
/// graph.add_link(n(1), n(2), SpeedClass::TenGigabit).unwrap();
/// graph.add_link(n(0), n(2), SpeedClass::TenMegabit).unwrap();
///
/// let table = routing_table(&graph, n(0));
/// let route = table.route(n(2)).unwrap();
/// assert_eq!(route.next_hop, n(1));
/// assert_eq!(route.cost, 2);
/// ```
pub fn routing_table(graph: &DeviceGraph, source: NodeIndex) -> RoutingTable {
    let mut routes: Vec<Option<Route>> = vec![None; graph.node_count()];
    if !graph.contains_node(source) {
        return RoutingTable { source, routes };
    }

    routes[source.index()] = Some(Route {
        next_hop: source,
        cost: 0,
    });
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        let Some(current) = routes[node.index()] else {
            continue;
        };
        if current.cost < cost {
            // Stale entry.
            continue;
        }
        for (neighbour, speed) in graph.neighbours(node) {
            let next_cost = cost + u64::from(speed.value());
            let next_hop = if node == source {
                neighbour
            } else {
                current.next_hop
            };
            let improves = match routes[neighbour.index()] {
                None => true,
                Some(known) => {
                    next_cost < known.cost || (next_cost == known.cost && next_hop < known.next_hop)
                }
            };
            if improves {
                routes[neighbour.index()] = Some(Route {
                    next_hop,
                    cost: next_cost,
                });
                heap.push(Reverse((next_cost, neighbour)));
            }
        }
    }

    RoutingTable { source, routes }
}

/// Computes the routing table of every device, in ascending device order.
pub fn routing_tables(graph: &DeviceGraph) -> Vec<RoutingTable> {
    graph
        .nodes()
        .map(|source| routing_table(graph, source))
        .collect()
}
