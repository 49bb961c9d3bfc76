//! Conversions from device networks into `petgraph` graphs.

use petgraph::graph::UnGraph;

use crate::{DeviceGraph, SpeedClass};

impl From<&DeviceGraph> for UnGraph<(), SpeedClass> {
    /// Builds an undirected petgraph with the same devices and links.
    ///
    /// Device `i` becomes node `i` of the petgraph, and links are added in
    /// canonical order so edge `k` is the `k`-th link of the network.
    fn from(graph: &DeviceGraph) -> Self {
        let mut pg = UnGraph::with_capacity(graph.node_count(), graph.link_count());
        for _ in graph.nodes() {
            pg.add_node(());
        }
        for (edge, speed) in graph.links() {
            pg.add_edge(
                petgraph::graph::NodeIndex::new(edge.low().index()),
                petgraph::graph::NodeIndex::new(edge.high().index()),
                speed,
            );
        }
        pg
    }
}
