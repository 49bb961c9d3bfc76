//! Random connected network generation.
//!
//! Generation runs in three passes over a set of canonical edges:
//!
//! 1. A random spanning tree connects every device.
//! 2. Random links are added until the target link count is reached.
//! 3. Every link draws a [`SpeedClass`] from the configured
//!    [`SpeedDistribution`].
//!
//! The target link count is `floor(N * avg_degree / 2)`, capped at the number
//! of links of the complete graph. A spanning tree always has `N - 1` links,
//! so sparser targets yield exactly the tree.

mod densify;
mod spanning;

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::rng::{preseeded_rng, seeded_rng, RandomSource};
use crate::{DeviceGraph, Edge, NodeIndex, SpeedClass, SpeedDistribution};

/// Validated parameters of a network generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    num_devices: usize,
    avg_degree: f64,
    speeds: SpeedDistribution,
}

impl GeneratorConfig {
    /// Creates a configuration for `num_devices` devices with the requested
    /// average degree and the default speed distribution.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if there are no devices, more devices than
    /// a [`NodeIndex`] can address, or the degree is negative or not finite.
    pub fn new(num_devices: usize, avg_degree: f64) -> Result<Self, ConfigError> {
        if num_devices == 0 {
            return Err(ConfigError::NoDevices);
        }
        if num_devices - 1 > NodeIndex::MAX {
            return Err(ConfigError::TooManyDevices { num_devices });
        }
        if !avg_degree.is_finite() {
            return Err(ConfigError::NonFiniteDegree { avg_degree });
        }
        if avg_degree < 0.0 {
            return Err(ConfigError::NegativeDegree { avg_degree });
        }
        Ok(Self {
            num_devices,
            avg_degree,
            speeds: SpeedDistribution::default(),
        })
    }

    /// Replaces the distribution link speeds are drawn from.
    pub fn with_speeds(mut self, speeds: SpeedDistribution) -> Self {
        self.speeds = speeds;
        self
    }

    /// Number of devices to generate.
    #[inline]
    pub fn num_devices(&self) -> usize {
        self.num_devices
    }

    /// Requested average degree.
    #[inline]
    pub fn avg_degree(&self) -> f64 {
        self.avg_degree
    }

    /// Distribution link speeds are drawn from.
    #[inline]
    pub fn speeds(&self) -> &SpeedDistribution {
        &self.speeds
    }

    /// Number of links implied by the requested degree,
    /// `floor(num_devices * avg_degree / 2)`, before any capping.
    pub fn requested_links(&self) -> usize {
        // Float to int casts saturate.
        (self.num_devices as f64 * self.avg_degree / 2.0).floor() as usize
    }

    /// Number of links the generated network will have.
    ///
    /// This is the requested count, capped at the complete graph and raised
    /// to the `num_devices - 1` links of the spanning tree.
    pub fn target_links(&self) -> usize {
        let max = DeviceGraph::max_links(self.num_devices);
        self.requested_links()
            .min(max)
            .max(self.num_devices - 1)
    }

    /// Whether the requested degree exceeds what a simple graph on
    /// `num_devices` devices can reach.
    pub fn is_saturated(&self) -> bool {
        self.requested_links() > DeviceGraph::max_links(self.num_devices)
    }
}

/// Error returned for invalid generation parameters.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A network needs at least one device.
    #[error("the number of devices must be positive")]
    NoDevices,
    /// More devices than can be indexed.
    #[error("{num_devices} devices is more than the maximum of {}", NodeIndex::MAX as u64 + 1)]
    TooManyDevices {
        /// The requested number of devices.
        num_devices: usize,
    },
    /// The average degree was negative.
    #[error("the average degree must be non-negative, got {avg_degree}")]
    NegativeDegree {
        /// The requested degree.
        avg_degree: f64,
    },
    /// The average degree was NaN or infinite.
    #[error("the average degree must be a finite number, got {avg_degree}")]
    NonFiniteDegree {
        /// The requested degree.
        avg_degree: f64,
    },
}

/// The outcome of a network generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    graph: DeviceGraph,
    requested_links: usize,
    saturated: bool,
}

impl Generation {
    /// The generated network.
    #[inline]
    pub fn graph(&self) -> &DeviceGraph {
        &self.graph
    }

    /// Consumes the generation, returning the network.
    #[inline]
    pub fn into_graph(self) -> DeviceGraph {
        self.graph
    }

    /// Links implied by the requested degree, before capping.
    #[inline]
    pub fn requested_links(&self) -> usize {
        self.requested_links
    }

    /// Links in the generated network.
    ///
    /// Equal to [`GeneratorConfig::target_links`] of the configuration used.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.graph.link_count()
    }

    /// Whether the requested degree was unreachable, in which case the
    /// network is the complete graph.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Achieved average degree.
    #[inline]
    pub fn average_degree(&self) -> f64 {
        self.graph.average_degree()
    }

    /// The network in the text format of [`crate::format`].
    pub fn to_text(&self) -> String {
        crate::format::to_text(&self.graph)
    }
}

/// A random network generator owning its random source.
#[derive(Clone, Debug)]
pub struct NetworkGenerator<R> {
    rng: R,
}

impl<R: RandomSource> NetworkGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one network.
    pub fn generate(&mut self, config: &GeneratorConfig) -> Generation {
        generate_network(config, &mut self.rng)
    }

    /// Generates `count` independent networks.
    pub fn generate_many(&mut self, config: &GeneratorConfig, count: usize) -> Vec<Generation> {
        (0..count).map(|_| self.generate(config)).collect()
    }

    /// Consumes the generator, returning its random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl NetworkGenerator<StdRng> {
    /// A generator with reproducible output for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }

    /// A generator seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self::new(preseeded_rng())
    }
}

/// Generates a network and returns it in the text format.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the parameters are invalid.
///
/// # Example
///
/// ```
/// # use devnet::generate;
/// let mut rng = devnet::rng::seeded_rng(1);
/// let text = generate(1, 5.0, &mut rng).unwrap();
/// assert_eq!(text, "1");
/// ```
pub fn generate<R: RandomSource>(
    num_devices: usize,
    avg_degree: f64,
    rng: &mut R,
) -> Result<String, ConfigError> {
    let config = GeneratorConfig::new(num_devices, avg_degree)?;
    Ok(generate_network(&config, rng).to_text())
}

/// Generates one network drawing from `rng`.
#[instrument(level = "debug", skip_all, fields(devices = config.num_devices, avg_degree = config.avg_degree))]
pub fn generate_network<R: RandomSource>(config: &GeneratorConfig, rng: &mut R) -> Generation {
    let num_devices = config.num_devices;
    let target = config.target_links();

    let mut edges = BTreeSet::new();
    spanning::spanning_tree(num_devices, rng, &mut edges);
    debug!(links = edges.len(), "spanning tree built");

    densify::densify(num_devices, target, rng, &mut edges);
    debug!(links = edges.len(), target, "densification done");

    let saturated = config.is_saturated();
    if saturated {
        warn!(
            requested = config.requested_links(),
            achieved = edges.len(),
            avg_degree = 2.0 * edges.len() as f64 / num_devices as f64,
            "requested density is unreachable, generated the complete graph"
        );
    }

    let graph = assign_speeds(num_devices, &edges, &config.speeds, rng);
    Generation {
        graph,
        requested_links: config.requested_links(),
        saturated,
    }
}

/// Builds the network, drawing one speed per link in canonical order.
fn assign_speeds<R: RandomSource>(
    num_devices: usize,
    edges: &BTreeSet<Edge>,
    speeds: &SpeedDistribution,
    rng: &mut R,
) -> DeviceGraph {
    let mut graph = DeviceGraph::new(num_devices);
    for edge in edges {
        let speed: SpeedClass = rng.speed(speeds);
        let (low, high) = edge.endpoints();
        graph
            .add_link(low, high, speed)
            .expect("generated links are canonical and unique");
    }
    graph
}

/// The canonical edge between two device indices, or `None` for a self-loop.
#[inline]
fn canonical(a: usize, b: usize) -> Option<Edge> {
    Edge::new(NodeIndex::new(a), NodeIndex::new(b)).ok()
}
