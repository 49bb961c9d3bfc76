//! Benchmarks for the text encoding and the dot renderer.

use criterion::{criterion_group, Criterion};
use devnet::format::{parse_network, to_text};
use devnet::render::dot_string;
use devnet::DeviceGraph;

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct WriteText {
    graph: DeviceGraph,
}
impl SizedBenchmark for WriteText {
    fn name() -> &'static str {
        "write_text"
    }

    fn setup(size: usize) -> Self {
        Self {
            graph: make_sparse_network(size),
        }
    }

    fn run(&self) -> impl Sized {
        to_text(&self.graph)
    }
}

struct ParseText {
    text: String,
}
impl SizedBenchmark for ParseText {
    fn name() -> &'static str {
        "parse_text"
    }

    fn setup(size: usize) -> Self {
        Self {
            text: to_text(&make_sparse_network(size)),
        }
    }

    fn run(&self) -> impl Sized {
        parse_network(&self.text).unwrap()
    }
}

struct RenderDot {
    graph: DeviceGraph,
}
impl SizedBenchmark for RenderDot {
    fn name() -> &'static str {
        "render_dot"
    }

    fn setup(size: usize) -> Self {
        Self {
            graph: make_sparse_network(size),
        }
    }

    fn run(&self) -> impl Sized {
        dot_string(&self.graph)
    }
}

// -----------------------------------------------------------------------------
// iai_callgrind definitions
// -----------------------------------------------------------------------------

sized_iai_benchmark!(callgrind_write_text, WriteText);
sized_iai_benchmark!(callgrind_parse_text, ParseText);
sized_iai_benchmark!(callgrind_render_dot, RenderDot);

iai_callgrind::library_benchmark_group!(
    name = callgrind_group;
    benchmarks = callgrind_write_text, callgrind_parse_text, callgrind_render_dot
);

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        WriteText::criterion,
        ParseText::criterion,
        RenderDot::criterion,
}
