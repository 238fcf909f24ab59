// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use advent_inertia::{Inertia, InertiaConfig, VelocitySampler};
use advent_view::clamp_offset;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;

fn bench_sampler(c: &mut Criterion) {
    c.bench_function("inertia/sample_1024", |b| {
        b.iter_batched(
            || VelocitySampler::new(InertiaConfig::DEFAULT_MAX_VELOCITY),
            |mut s| {
                let mut offset = Vec2::ZERO;
                for i in 0..1024_u32 {
                    offset -= Vec2::new(3.0, 1.5);
                    black_box(s.sample(offset, f64::from(i) * 8.0));
                }
                s.velocity()
            },
            BatchSize::SmallInput,
        );
    });
}

/// Runs a fling to rest at different frame intervals.
fn bench_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertia/fling");
    let max = Vec2::new(1e6, 1e6);

    for frame_ms in [4.0_f64, 8.0, 16.0, 33.0] {
        group.bench_with_input(BenchmarkId::from_parameter(frame_ms), &frame_ms, |b, &dt| {
            b.iter_batched(
                || {
                    let mut inertia = Inertia::new(InertiaConfig::default());
                    inertia.start(Vec2::new(-0.8, -0.4), 0.0);
                    inertia
                },
                |mut inertia| {
                    let mut offset = Vec2::new(-10.0, -10.0);
                    let mut now = 0.0;
                    loop {
                        now += dt;
                        let step = inertia.step(now, offset, max);
                        offset = step.offset;
                        if step.settled {
                            break;
                        }
                    }
                    black_box(clamp_offset(offset, max))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sampler, bench_fling);
criterion_main!(benches);
