//! Benchmarks for random network generation.

use criterion::{criterion_group, Criterion};
use devnet::{GeneratorConfig, NetworkGenerator};

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

/// Sparse targets, densified by rejection sampling.
struct GenerateSparse {
    config: GeneratorConfig,
}
impl SizedBenchmark for GenerateSparse {
    fn name() -> &'static str {
        "generate_sparse"
    }

    fn setup(size: usize) -> Self {
        Self {
            config: GeneratorConfig::new(size, 4.0).unwrap(),
        }
    }

    fn run(&self) -> impl Sized {
        NetworkGenerator::seeded(SEED).generate(&self.config)
    }
}

/// Targets above half the complete graph, filled from the complement.
struct GenerateDense {
    config: GeneratorConfig,
}
impl SizedBenchmark for GenerateDense {
    fn name() -> &'static str {
        "generate_dense"
    }

    fn sizes() -> &'static [usize] {
        &[50, 200, 800]
    }

    fn setup(size: usize) -> Self {
        let avg_degree = 0.75 * (size - 1) as f64;
        Self {
            config: GeneratorConfig::new(size, avg_degree).unwrap(),
        }
    }

    fn run(&self) -> impl Sized {
        NetworkGenerator::seeded(SEED).generate(&self.config)
    }
}

// -----------------------------------------------------------------------------
// iai_callgrind definitions
// -----------------------------------------------------------------------------

sized_iai_benchmark!(callgrind_generate_sparse, GenerateSparse);
sized_iai_benchmark!(callgrind_generate_dense, GenerateDense);

iai_callgrind::library_benchmark_group!(
    name = callgrind_group;
    benchmarks = callgrind_generate_sparse, callgrind_generate_dense
);

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        GenerateSparse::criterion,
        GenerateDense::criterion,
}
