//! Benchmarks for connectivity checks and routing tables.

use criterion::{criterion_group, Criterion};
use devnet::algorithms::{is_connected, routing_table};
use devnet::{DeviceGraph, NodeIndex};

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct Connectivity {
    graph: DeviceGraph,
}
impl SizedBenchmark for Connectivity {
    fn name() -> &'static str {
        "is_connected"
    }

    fn setup(size: usize) -> Self {
        Self {
            graph: make_sparse_network(size),
        }
    }

    fn run(&self) -> impl Sized {
        is_connected(&self.graph)
    }
}

struct RoutingTable {
    graph: DeviceGraph,
}
impl SizedBenchmark for RoutingTable {
    fn name() -> &'static str {
        "routing_table"
    }

    fn setup(size: usize) -> Self {
        Self {
            graph: make_sparse_network(size),
        }
    }

    fn run(&self) -> impl Sized {
        routing_table(&self.graph, NodeIndex::new(0))
    }
}

/// Worst case for the route tie-breaking: every device has two paths.
struct RingRoutingTable {
    graph: DeviceGraph,
}
impl SizedBenchmark for RingRoutingTable {
    fn name() -> &'static str {
        "routing_table_ring"
    }

    fn setup(size: usize) -> Self {
        Self {
            graph: make_ring(size),
        }
    }

    fn run(&self) -> impl Sized {
        routing_table(&self.graph, NodeIndex::new(0))
    }
}

// -----------------------------------------------------------------------------
// iai_callgrind definitions
// -----------------------------------------------------------------------------

sized_iai_benchmark!(callgrind_is_connected, Connectivity);
sized_iai_benchmark!(callgrind_routing_table, RoutingTable);

iai_callgrind::library_benchmark_group!(
    name = callgrind_group;
    benchmarks = callgrind_is_connected, callgrind_routing_table
);

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        Connectivity::criterion,
        RoutingTable::criterion,
        RingRoutingTable::criterion,
}
