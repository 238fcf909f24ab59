// Copyright 2026 the Advent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use advent_gesture::{GestureConfig, PanGesture, PointerButton, PointerId};
use advent_pan::{Listeners, PanConfig, PanController, PanEvent, PanHost, PointerInput};
use advent_timing::ManualFrames;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

/// Host that only counts what it is asked to do.
#[derive(Debug, Default)]
struct CountingHost {
    writes: u64,
    events: u64,
}

impl PanHost for CountingHost {
    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 720.0)
    }

    fn content_size(&self) -> Size {
        Size::new(4096.0, 4096.0)
    }

    fn apply_translation(&mut self, _offset: Vec2) {
        self.writes += 1;
    }

    fn emit(&mut self, _event: PanEvent) {
        self.events += 1;
    }

    fn capture_pointer(&mut self, _pointer: PointerId) {}

    fn release_pointer(&mut self, _pointer: PointerId) {}

    fn add_listeners(&mut self, _listeners: Listeners) {}

    fn remove_listeners(&mut self, _listeners: Listeners) {}
}

fn controller() -> PanController<CountingHost, ManualFrames> {
    let mut pan =
        PanController::new(CountingHost::default(), ManualFrames::new(), PanConfig::default())
            .unwrap();
    pan.attach();
    pan
}

fn bench_gesture_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/moves");
    let finger = PointerId(1);

    for moves in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(moves)));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter_batched(
                || {
                    let mut g = PanGesture::new(GestureConfig::default());
                    g.on_pointer_down(finger, PointerButton::Primary, Point::ZERO, Vec2::ZERO);
                    g
                },
                |mut g| {
                    for i in 0..moves {
                        let x = -f64::from(i);
                        black_box(g.on_pointer_move(finger, Point::new(x, x * 0.5)));
                    }
                    g.on_pointer_up(finger)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// A full drag: several moves per frame, one flush per frame, then release.
fn bench_controller_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/drag");
    let finger = PointerId(1);

    for moves_per_frame in [1_u32, 4, 16] {
        let frames = 120_u32;
        group.throughput(Throughput::Elements(u64::from(frames * moves_per_frame)));
        group.bench_with_input(
            BenchmarkId::from_parameter(moves_per_frame),
            &moves_per_frame,
            |b, &per_frame| {
                b.iter_batched(
                    controller,
                    |mut pan| {
                        let mut t = 0.0;
                        pan.on_pointer_down(PointerInput::new(finger, Point::ZERO, t));
                        for frame in 0..frames {
                            for m in 0..per_frame {
                                t += 16.0 / f64::from(per_frame);
                                let d = -f64::from(frame * per_frame + m);
                                pan.on_pointer_move(PointerInput::new(finger, Point::new(d, d), t));
                            }
                            for handle in pan.scheduler_mut().take_pending() {
                                pan.on_frame(handle, t);
                            }
                        }
                        pan.on_pointer_up(PointerInput::new(finger, Point::ZERO, t));
                        black_box(pan.host().writes)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_gesture_moves, bench_controller_drag);
criterion_main!(benches);
