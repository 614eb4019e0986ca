//! Throughput of full configuration computation and classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panegrid::layout::LayoutConfiguration;
use panegrid::model::{Breakpoint, BreakpointThresholds, ScreenSize};
use panegrid::prefs::LayoutPreferences;

fn bench_classification(c: &mut Criterion) {
    let thresholds = BreakpointThresholds::DEFAULT;
    c.bench_function("classify_with_hysteresis", |b| {
        b.iter(|| {
            for width in (300..2000).step_by(37) {
                black_box(thresholds.classify(black_box(width), Breakpoint::Laptop));
            }
        });
    });
}

fn bench_full_configuration(c: &mut Criterion) {
    let prefs = LayoutPreferences::default();
    c.bench_function("compute_configuration_desktop", |b| {
        b.iter(|| {
            black_box(LayoutConfiguration::compute(
                black_box(ScreenSize::new(1920, 1080)),
                Breakpoint::Desktop,
                &prefs,
            ))
        });
    });

    let mut compact = LayoutPreferences::default();
    compact.compact_mode = true;
    compact.performance_mode = true;
    c.bench_function("compute_configuration_tablet_flags", |b| {
        b.iter(|| {
            black_box(LayoutConfiguration::compute(
                black_box(ScreenSize::new(800, 1024)),
                Breakpoint::Tablet,
                &compact,
            ))
        });
    });
}

criterion_group!(benches, bench_classification, bench_full_configuration);
criterion_main!(benches);
