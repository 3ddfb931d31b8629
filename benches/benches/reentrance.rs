// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_reentrance::{Identity, enter};

fn bench_enter_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("reentrance/enter");

    // Entry scans the active stack, so cost grows with nesting depth.
    for depth in [0_usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("at_depth", depth), &depth, |b, &depth| {
            let mut outer: Vec<_> = (0..depth)
                .map(|i| enter(Identity::from_raw(i + 1)))
                .collect();
            b.iter(|| {
                let guard = enter(Identity::from_raw(usize::MAX));
                black_box(guard.is_entered());
            });
            // Release innermost first.
            while outer.pop().is_some() {}
        });
    }

    group.bench_function("reentrant_failure", |b| {
        let held = enter(Identity::from_raw(7));
        b.iter(|| black_box(enter(Identity::from_raw(7)).is_entered()));
        drop(held);
    });

    group.finish();
}

criterion_group!(benches, bench_enter_release);
criterion_main!(benches);
