#![warn(missing_docs)]
//! `devnet` generates random connected networks of devices with weighted
//! link speeds.
//!
//! A device network (as implemented by this library) is an undirected simple
//! graph over the devices `0..N`. Every link joins two distinct devices and is
//! annotated with a [`SpeedClass`], where a lower class denotes a faster link.
//!
//! The core data structure [`DeviceGraph`] stores the links in canonical
//! [`Edge`] form, so that every unordered pair of devices is stored at most
//! once. Random networks are produced by a [`NetworkGenerator`], which first
//! builds a random spanning tree to guarantee connectivity and then adds
//! random links until the requested average degree is reached. Generated
//! networks can be written to and read from a plain text format with the
//! [`format`] module, and analysed with the [`algorithms`] module.
//!
//! # Example
//!
//! ```
//! use devnet::{algorithms::is_connected, GeneratorConfig, NetworkGenerator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = GeneratorConfig::new(10, 3.0).unwrap();
//! let mut generator = NetworkGenerator::new(StdRng::seed_from_u64(42));
//! let generation = generator.generate(&config);
//!
//! assert_eq!(generation.graph().link_count(), 15);
//! assert!(is_connected(generation.graph()));
//!
//! let text = generation.to_text();
//! assert!(text.starts_with("10\n"));
//! ```
//!
//! # Features
//!
//! - `serde` enables serialization and deserialization of `DeviceGraph`s and
//!   their components.
//! - `petgraph` enables conversions into `petgraph` graphs.
//! - `proptest` exposes strategies for generating random networks in property
//!   tests.
//!
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod algorithms;
pub mod format;
pub mod generate;
pub mod graph;
pub mod render;
pub mod rng;
pub mod speed;

#[cfg(feature = "serde")]
pub mod serialize;

#[cfg(feature = "petgraph")]
pub mod petgraph;

#[cfg(feature = "proptest")]
pub mod proptest;

#[doc(inline)]
pub use crate::generate::{generate, ConfigError, Generation, GeneratorConfig, NetworkGenerator};
#[doc(inline)]
pub use crate::graph::{DeviceGraph, GraphError};
#[doc(inline)]
pub use crate::rng::RandomSource;
#[doc(inline)]
pub use crate::speed::{SpeedClass, SpeedDistribution};

/// Index of a device within a `DeviceGraph`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Maximum allowed index.
    pub const MAX: usize = u32::MAX as usize;

    /// Creates a new node index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the index is greater than [`NodeIndex::MAX`].
    #[inline]
    pub fn new(index: usize) -> Self {
        index.try_into().unwrap()
    }

    /// Returns the index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.into()
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(index: NodeIndex) -> Self {
        index.0 as usize
    }
}

impl TryFrom<usize> for NodeIndex {
    type Error = IndexError;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| IndexError {
                index,
                max: Self::MAX,
            })
    }
}

impl std::fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // avoid unnecessary newlines in alternate mode
        write!(f, "NodeIndex({})", self.index())
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error indicating a `NodeIndex` is too large.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the index {index} is too large. The maximum allowed index is {max}.")]
pub struct IndexError {
    index: usize,
    max: usize,
}

/// An undirected link between two distinct devices, in canonical form.
///
/// The smaller endpoint is always stored first, so `(u, v)` and `(v, u)`
/// produce the same `Edge`. Edges order by their low endpoint, then by their
/// high endpoint.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Edge {
    low: NodeIndex,
    high: NodeIndex,
}

impl Edge {
    /// Creates the canonical edge between `a` and `b`.
    ///
    /// Returns [`GraphError::SelfLoop`] if both endpoints are the same device.
    #[inline]
    pub fn new(a: NodeIndex, b: NodeIndex) -> Result<Self, GraphError> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(GraphError::SelfLoop { node: a }),
        }
    }

    /// The endpoint with the smaller index.
    #[inline]
    pub fn low(self) -> NodeIndex {
        self.low
    }

    /// The endpoint with the larger index.
    #[inline]
    pub fn high(self) -> NodeIndex {
        self.high
    }

    /// Both endpoints, smallest first.
    #[inline]
    pub fn endpoints(self) -> (NodeIndex, NodeIndex) {
        (self.low, self.high)
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an
    /// endpoint of this edge.
    #[inline]
    pub fn other(self, node: NodeIndex) -> Option<NodeIndex> {
        if node == self.low {
            Some(self.high)
        } else if node == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({}, {})", self.low, self.high)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_is_canonical() {
        let a = NodeIndex::new(3);
        let b = NodeIndex::new(1);
        let edge = Edge::new(a, b).unwrap();
        assert_eq!(edge, Edge::new(b, a).unwrap());
        assert_eq!(edge.endpoints(), (b, a));
        assert_eq!(edge.other(a), Some(b));
        assert_eq!(edge.other(b), Some(a));
        assert_eq!(edge.other(NodeIndex::new(2)), None);
    }

    #[test]
    fn edge_rejects_self_loops() {
        let a = NodeIndex::new(7);
        assert_eq!(Edge::new(a, a), Err(GraphError::SelfLoop { node: a }));
    }

    #[test]
    fn edges_order_lexicographically() {
        let e = |a, b| Edge::new(NodeIndex::new(a), NodeIndex::new(b)).unwrap();
        let mut edges = vec![e(2, 0), e(1, 3), e(0, 1), e(1, 2)];
        edges.sort();
        assert_eq!(edges, [e(0, 1), e(0, 2), e(1, 2), e(1, 3)]);
    }

    #[test]
    fn index_bounds() {
        assert_eq!(NodeIndex::new(5).index(), 5);
        assert!(NodeIndex::try_from(NodeIndex::MAX).is_ok());
        if let Some(too_big) = NodeIndex::MAX.checked_add(1) {
            assert!(NodeIndex::try_from(too_big).is_err());
        }
    }
}
