// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_hover::{HoverSettings, HoverState, HoverTimer, TimerRequest};

/// Timer host that only counts starts and stops.
#[derive(Default)]
struct CountingTimers {
    next: u64,
    stops: u64,
}

impl HoverTimer for CountingTimers {
    type Token = u64;

    fn start(&mut self, _request: TimerRequest) -> u64 {
        self.next += 1;
        self.next
    }

    fn stop(&mut self, _token: u64) {
        self.stops += 1;
    }
}

fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover/on_pointer_move");

    // Jitter stays inside the tolerance; sweep re-arms the timer on every move.
    for (name, step) in [("jitter", 0.5_f64), ("sweep", 8.0_f64)] {
        let points: Vec<Point> = (0..4_096_u32)
            .map(|i| {
                let t = f64::from(i % 8);
                Point::new(100.0 + t * step, 100.0)
            })
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(BenchmarkId::new(name, points.len()), &points, |b, points| {
            let mut timers = CountingTimers::default();
            let mut hover = HoverState::<u32, u64>::new(HoverSettings::default());
            b.iter(|| {
                for (i, p) in points.iter().enumerate() {
                    black_box(hover.on_pointer_move(*p, i as u32, &mut timers));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pointer_moves);
criterion_main!(benches);
