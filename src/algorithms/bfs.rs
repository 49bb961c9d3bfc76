use std::{collections::VecDeque, iter::FusedIterator};

use bitvec::vec::BitVec;

use crate::{DeviceGraph, NodeIndex};

/// Returns an iterator over the devices reachable from `start`, in
/// breadth-first order.
///
/// Neighbours are enqueued in ascending index order, so the traversal is
/// deterministic. If `start` is not a device of the network the iterator is
/// empty.
///
/// # Example
///
/// ```
/// # use devnet::{algorithms::bfs, DeviceGraph, NodeIndex, SpeedClass};
/// let mut graph = DeviceGraph::new(4);
/// let n = NodeIndex::new;
/// graph.add_link(n(0), n(2), SpeedClass::Gigabit).unwrap();
/// graph.add_link(n(2), n(1), SpeedClass::Gigabit).unwrap();
///
/// let order: Vec<_> = bfs(&graph, n(0)).collect();
/// assert_eq!(order, [n(0), n(2), n(1)]);
/// ```
pub fn bfs(graph: &DeviceGraph, start: NodeIndex) -> Bfs<'_> {
    Bfs::new(graph, start)
}

/// Whether every device can reach every other device.
///
/// Networks with no devices are considered connected.
pub fn is_connected(graph: &DeviceGraph) -> bool {
    if graph.node_count() == 0 {
        return true;
    }
    bfs(graph, NodeIndex::new(0)).count() == graph.node_count()
}

/// Number of connected components in the network.
pub fn connected_components(graph: &DeviceGraph) -> usize {
    let mut seen: BitVec = BitVec::repeat(false, graph.node_count());
    let mut components = 0;
    for node in graph.nodes() {
        if seen[node.index()] {
            continue;
        }
        components += 1;
        for reached in bfs(graph, node) {
            seen.set(reached.index(), true);
        }
    }
    components
}

/// Iterator over a [`DeviceGraph`] in breadth-first order.
///
/// See [`bfs`] for more information.
#[derive(Clone, Debug)]
pub struct Bfs<'graph> {
    graph: &'graph DeviceGraph,
    visited: BitVec,
    queue: VecDeque<NodeIndex>,
    /// Devices already returned, for the `size_hint` upper bound.
    nodes_seen: usize,
}

impl<'graph> Bfs<'graph> {
    fn new(graph: &'graph DeviceGraph, start: NodeIndex) -> Self {
        let mut visited: BitVec = BitVec::repeat(false, graph.node_count());
        let mut queue = VecDeque::new();
        if graph.contains_node(start) {
            visited.set(start.index(), true);
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
            nodes_seen: 0,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for (neighbour, _) in self.graph.neighbours(node) {
            if !self.visited.replace(neighbour.index(), true) {
                self.queue.push_back(neighbour);
            }
        }
        self.nodes_seen += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.node_count() - self.nodes_seen),
        )
    }
}

impl FusedIterator for Bfs<'_> {}
