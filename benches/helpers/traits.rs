//! Traits to define a benchmark once for both the criterion and the
//! iai_callgrind runners.

/// A benchmark parametrised by a problem size.
pub trait SizedBenchmark: Sized {
    /// Name of the benchmark.
    fn name() -> &'static str;

    /// Problem sizes to benchmark.
    fn sizes() -> &'static [usize] {
        &[100, 1_000, 10_000]
    }

    /// Prepare the benchmark input for a problem size.
    fn setup(size: usize) -> Self;

    /// Operation to benchmark.
    ///
    /// Dropping the returned value is part of the measurement.
    fn run(&self) -> impl Sized;

    /// The benchmark at its smallest size, for iai_callgrind.
    fn small() -> Self {
        Self::setup(Self::sizes().iter().min().copied().unwrap())
    }

    /// The benchmark at its biggest size, for iai_callgrind.
    fn big() -> Self {
        Self::setup(Self::sizes().iter().max().copied().unwrap())
    }

    /// Run the benchmark under criterion for every size.
    fn criterion(c: &mut criterion::Criterion) {
        let mut g = c.benchmark_group(Self::name());
        g.plot_config(
            criterion::PlotConfiguration::default()
                .summary_scale(criterion::AxisScale::Logarithmic),
        );

        for &size in Self::sizes() {
            let benchmark = Self::setup(size);
            g.bench_function(criterion::BenchmarkId::new(Self::name(), size), |b| {
                b.iter(|| criterion::black_box(benchmark.run()))
            });
        }
        g.finish();
    }
}

/// Defines a `small` and a `big` iai_callgrind benchmark named `$namespace`
/// for the [`SizedBenchmark`] `$sized_benchmark`.
///
/// The namespace goes in the `benchmarks` list of
/// `iai_callgrind::library_benchmark_group!`.
macro_rules! sized_iai_benchmark {
    ($namespace:ident, $sized_benchmark:path) => {
        #[iai_callgrind::library_benchmark]
        #[bench::small($sized_benchmark::small())]
        #[bench::big($sized_benchmark::big())]
        fn $namespace(benchmark: impl crate::helpers::traits::SizedBenchmark) {
            criterion::black_box(benchmark.run());
        }
    };
}
pub(crate) use sized_iai_benchmark;
