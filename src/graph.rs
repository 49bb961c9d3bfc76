//! The device network data structure.

use std::collections::btree_map::{self, BTreeMap};

use smallvec::SmallVec;
use thiserror::Error;

use crate::{Edge, NodeIndex, SpeedClass};

/// An undirected simple graph of devices with speed-annotated links.
///
/// Devices are the indices `0..node_count`. Links are stored once, in
/// canonical [`Edge`] form, and iterate in ascending order. Every linked
/// device also keeps a sorted adjacency list for neighbourhood queries, so
/// memory grows with the number of links rather than the number of devices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceGraph {
    node_count: usize,
    links: BTreeMap<Edge, SpeedClass>,
    adjacency: BTreeMap<NodeIndex, Adjacency>,
}

type Adjacency = SmallVec<[(NodeIndex, SpeedClass); 4]>;

impl DeviceGraph {
    /// Creates a network of `node_count` devices and no links.
    ///
    /// # Panics
    ///
    /// Panics if `node_count` exceeds `NodeIndex::MAX + 1`.
    pub fn new(node_count: usize) -> Self {
        if let Some(last) = node_count.checked_sub(1) {
            assert!(
                last <= NodeIndex::MAX,
                "too many devices for a network: {node_count}"
            );
        }
        Self {
            node_count,
            links: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Number of devices in the network.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of links in the network.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The largest number of links a simple graph on `node_count` devices
    /// can hold.
    #[inline]
    pub fn max_links(node_count: usize) -> usize {
        if node_count % 2 == 0 {
            (node_count / 2).saturating_mul(node_count.saturating_sub(1))
        } else {
            node_count.saturating_mul((node_count - 1) / 2)
        }
    }

    /// Whether every pair of distinct devices is linked.
    pub fn is_complete(&self) -> bool {
        self.link_count() == Self::max_links(self.node_count())
    }

    /// Iterates over the devices in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeIndex> + DoubleEndedIterator {
        (0..self.node_count()).map(NodeIndex::new)
    }

    /// Iterates over the links and their speeds in ascending canonical order.
    pub fn links(&self) -> Links<'_> {
        Links {
            iter: self.links.iter(),
        }
    }

    /// Whether `node` is a device of this network.
    #[inline]
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node.index() < self.node_count()
    }

    /// Whether `a` and `b` are linked.
    pub fn contains(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.speed(a, b).is_some()
    }

    /// The speed of the link between `a` and `b`, if it exists.
    pub fn speed(&self, a: NodeIndex, b: NodeIndex) -> Option<SpeedClass> {
        let edge = Edge::new(a, b).ok()?;
        self.links.get(&edge).copied()
    }

    /// Adds a link between `a` and `b`.
    ///
    /// Returns the canonical edge of the new link.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either endpoint is not a device.
    /// - [`GraphError::SelfLoop`] if `a == b`.
    /// - [`GraphError::DuplicateLink`] if the devices are already linked.
    pub fn add_link(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        speed: SpeedClass,
    ) -> Result<Edge, GraphError> {
        for node in [a, b] {
            if !self.contains_node(node) {
                return Err(GraphError::UnknownNode {
                    node,
                    node_count: self.node_count(),
                });
            }
        }
        let edge = Edge::new(a, b)?;
        match self.links.entry(edge) {
            btree_map::Entry::Occupied(_) => return Err(GraphError::DuplicateLink { edge }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(speed);
            }
        }
        let (low, high) = edge.endpoints();
        insert_sorted(self.adjacency.entry(low).or_default(), high, speed);
        insert_sorted(self.adjacency.entry(high).or_default(), low, speed);
        Ok(edge)
    }

    /// Iterates over the neighbours of `node` in ascending order, with the
    /// speed of the connecting link.
    ///
    /// Yields nothing if `node` is not a device.
    pub fn neighbours(
        &self,
        node: NodeIndex,
    ) -> impl ExactSizeIterator<Item = (NodeIndex, SpeedClass)> + '_ {
        self.adjacency
            .get(&node)
            .map_or(&[][..], |adj| adj.as_slice())
            .iter()
            .copied()
    }

    /// Number of links incident to `node`.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.adjacency.get(&node).map_or(0, SmallVec::len)
    }

    /// Mean number of links incident to a device, `2|E| / N`.
    ///
    /// Zero for an empty network.
    pub fn average_degree(&self) -> f64 {
        if self.node_count() == 0 {
            return 0.0;
        }
        2.0 * self.link_count() as f64 / self.node_count() as f64
    }
}

fn insert_sorted(
    adjacency: &mut Adjacency,
    node: NodeIndex,
    speed: SpeedClass,
) {
    let pos = adjacency.partition_point(|&(n, _)| n < node);
    adjacency.insert(pos, (node, speed));
}

/// Iterator over the links of a [`DeviceGraph`], created by
/// [`DeviceGraph::links`].
#[derive(Clone, Debug)]
pub struct Links<'a> {
    iter: btree_map::Iter<'a, Edge, SpeedClass>,
}

impl Iterator for Links<'_> {
    type Item = (Edge, SpeedClass);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&edge, &speed)| (edge, speed))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Links<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(&edge, &speed)| (edge, speed))
    }
}

impl ExactSizeIterator for Links<'_> {}

impl std::iter::FusedIterator for Links<'_> {}

/// Error generated when a link violates the structure of a [`DeviceGraph`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A link would join a device to itself.
    #[error("device {node} can not be linked to itself")]
    SelfLoop {
        /// The device.
        node: NodeIndex,
    },
    /// The devices are already linked.
    #[error("devices {} and {} are already linked", .edge.low(), .edge.high())]
    DuplicateLink {
        /// The existing link.
        edge: Edge,
    },
    /// An endpoint is outside the network.
    #[error("unknown device {node} in a network of {node_count} devices")]
    UnknownNode {
        /// The offending endpoint.
        node: NodeIndex,
        /// Number of devices in the network.
        node_count: usize,
    },
}
