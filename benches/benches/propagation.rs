// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::time::Duration;
use tandem_gamelog::{GameRecord, Metric, RecordStore, WeekRange, WeekSet};
use tandem_link::{LinkConfig, LinkCoordinator, ViewTarget};
use tandem_views::{DomainRect, PlotLayout, RangeView, RegionView};

/// A synthetic log with `len` weeks and spread-out yards/touchdowns.
fn records(len: u32) -> RecordStore {
    RecordStore::new((1..=len).map(|week| {
        let w = f64::from(week);
        GameRecord::new(
            week,
            150.0 + (w * 37.0) % 200.0,
            f64::from(week % 5),
            20.0 + (w * 13.0) % 70.0,
        )
    }))
    .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("views/render");
    for len in [17_u32, 256, 4_096] {
        let store = records(len);
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("range", len), &store, |b, store| {
            b.iter_batched(
                || RangeView::new(PlotLayout::default(), Metric::Qbr),
                |mut view| {
                    black_box(view.render(store));
                    black_box(view.line_path());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("region", len), &store, |b, store| {
            b.iter_batched(
                || {
                    RegionView::new(
                        PlotLayout::default(),
                        Metric::PassYards,
                        Metric::PassTouchdowns,
                    )
                },
                |mut view| black_box(view.render(store)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("link/propagate");
    for len in [17_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(len)));
        let mut link = LinkCoordinator::new(records(len), LinkConfig::default());
        let half = WeekRange::new(1, len / 2);
        let odd: WeekSet = (1..=len).filter(|w| w % 2 == 1).collect();

        // Alternating keeps every iteration a real restyle.
        group.bench_function(BenchmarkId::new("week_range", len), |b| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                black_box(link.set_week_range(flip.then_some(half)))
            });
        });

        group.bench_function(BenchmarkId::new("selected_weeks", len), |b| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                black_box(link.set_selected_weeks(flip.then(|| odd.clone())))
            });
        });

        group.bench_function(BenchmarkId::new("region_drag", len), |b| {
            let area = link.region().layout().plot_area();
            let from = Point::new(area.x0 + 10.0, area.y0 + 10.0);
            let to = Point::new(area.center().x, area.center().y);
            b.iter(|| {
                link.clear(ViewTarget::Region);
                link.pointer_down(ViewTarget::Region, from);
                link.pointer_move(ViewTarget::Region, to);
                black_box(link.pointer_up(ViewTarget::Region, to))
            });
        });

        group.bench_function(BenchmarkId::new("brush_region", len), |b| {
            let rect = DomainRect::new(180.0..300.0, 1.0..3.0);
            b.iter(|| black_box(link.brush_region(Some(rect.clone()))));
        });
    }
    group.finish();
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_render, bench_propagation
}
criterion_main!(benches);
