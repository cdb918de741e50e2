// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use trellis_rose::{RoseConfig, RoseGenerator, step_range};
use trellis_scene::{ShapeCollection, Subscription};
use trellis_watchdog::Watchdog;

fn bench_rose(c: &mut Criterion) {
    let mut group = c.benchmark_group("rose");

    group.bench_function("segment", |b| {
        let rose = RoseGenerator::new();
        let mut index = 0_u32;
        b.iter(|| {
            index = (index + 1) % 360;
            black_box(rose.segment(black_box(index)))
        });
    });

    group.bench_function("full_cycle", |b| {
        b.iter_batched(
            || (RoseGenerator::new(), ShapeCollection::new()),
            |(mut rose, mut shapes)| {
                for _ in 0..rose.config().steps {
                    rose.draw_next(&mut shapes);
                }
                shapes
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("step_range", |b| {
        let config = RoseConfig {
            steps: 7,
            segments: 100_000,
            ..RoseConfig::DEFAULT
        };
        let mut step = 0_u32;
        b.iter(|| {
            step = (step + 1) % config.steps;
            black_box(step_range(black_box(step), &config))
        });
    });

    group.finish();
}

fn bench_watchdog(c: &mut Criterion) {
    let mut group = c.benchmark_group("watchdog");

    group.bench_function("restart_and_poll", |b| {
        let mut wd = Watchdog::new(Duration::from_millis(100));
        let mut now = Duration::ZERO;
        b.iter(|| {
            now += Duration::from_millis(1);
            wd.start_or_restart(now);
            black_box(wd.poll(now))
        });
    });

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");

    for subscribers in [0_usize, 1, 8] {
        group.bench_function(format!("push_fanout_{subscribers}"), |b| {
            b.iter_batched(
                || {
                    let mut shapes = ShapeCollection::new();
                    let subs: Vec<Subscription> =
                        (0..subscribers).map(|_| shapes.subscribe(|_| {})).collect();
                    (shapes, subs, RoseGenerator::new().segment(0))
                },
                |(mut shapes, _subs, segment)| {
                    for _ in 0..120 {
                        shapes.push(segment.into());
                    }
                    shapes
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rose, bench_watchdog, bench_scene);
criterion_main!(benches);
