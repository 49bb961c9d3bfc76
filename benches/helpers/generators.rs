//! Benchmark network generators.

use devnet::{DeviceGraph, GeneratorConfig, NetworkGenerator, NodeIndex, SpeedClass};

/// Seed shared by every benchmark input, so runs are comparable.
pub const SEED: u64 = 0x5eed;

/// A random connected network with `size` devices and average degree 4.
pub fn make_sparse_network(size: usize) -> DeviceGraph {
    make_network(size, 4.0)
}

/// A random connected network with `size` devices and average degree `avg_degree`.
pub fn make_network(size: usize, avg_degree: f64) -> DeviceGraph {
    let config = GeneratorConfig::new(size, avg_degree).unwrap();
    NetworkGenerator::seeded(SEED)
        .generate(&config)
        .into_graph()
}

/// A ring of `size` devices, alternating fast and slow links.
///
/// o =1= o -8- o =1= o -8- o   ...
/// |___________________________|
///
pub fn make_ring(size: usize) -> DeviceGraph {
    let mut graph = DeviceGraph::new(size);
    for i in 1..size {
        let speed = if i % 2 == 1 {
            SpeedClass::TenGigabit
        } else {
            SpeedClass::TenMegabit
        };
        graph
            .add_link(NodeIndex::new(i - 1), NodeIndex::new(i), speed)
            .unwrap();
    }
    if size > 2 {
        graph
            .add_link(NodeIndex::new(size - 1), NodeIndex::new(0), SpeedClass::Gigabit)
            .unwrap();
    }
    graph
}
