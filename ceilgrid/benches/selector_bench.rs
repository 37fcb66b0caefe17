use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ceilgrid::entities::{SpacingSpec, SurfaceDimensions};
use ceilgrid::search::{LayoutSelector, Strategy};
use ceilgrid::util::GridConfig;

criterion_main!(benches);
criterion_group!(benches, select_bench, window_bench);

const SURFACES: [(f64, f64); 4] = [
    (4800.0, 3600.0),
    (6000.0, 5000.0),
    (18_000.0, 9_500.0),
    (60_000.0, 42_000.0),
];

/// Full selection (generation, scoring and tie-breaking) for surfaces of increasing size
fn select_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_bench");
    for (length, width) in SURFACES {
        for strategy in [Strategy::Balanced, Strategy::MinimizeSeams] {
            let selector = LayoutSelector::new(
                SurfaceDimensions::new(length, width),
                SpacingSpec::new(200.0, 150.0),
                strategy,
                1.0,
                GridConfig::default(),
            );
            group.bench_function(
                BenchmarkId::new(format!("{strategy}"), format!("{length}x{width}")),
                |b| b.iter(|| black_box(selector.select())),
            );
        }
    }
    group.finish();
}

/// Selection for increasingly wide search windows
fn window_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_bench");
    for widen_factor in [1.0, 1.25, 2.0, 4.0] {
        let config = GridConfig {
            window_widen_factor: widen_factor,
            ..GridConfig::default()
        };
        let selector = LayoutSelector::new(
            SurfaceDimensions::new(18_000.0, 9_500.0),
            SpacingSpec::new(200.0, 150.0),
            Strategy::Balanced,
            1.0,
            config,
        );
        group.bench_with_input(BenchmarkId::from_parameter(widen_factor), &selector, |b, s| {
            b.iter(|| black_box(s.rank(5)))
        });
    }
    group.finish();
}
