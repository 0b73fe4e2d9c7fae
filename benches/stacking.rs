// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification stacking.
//!
//! Measures the performance of:
//! - Opening toasts into a crowded corner (offset accumulation)
//! - Closing from the head of a corner (full-suffix reflow)

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_notify::notifications::{NotificationService, Options, Position};
use iced_notify::ui::toast::ToastLayer;
use std::hint::black_box;

const STACK_DEPTH: usize = 64;

fn crowded_service() -> NotificationService<ToastLayer> {
    let mut service = NotificationService::new(ToastLayer::new());
    for i in 0..STACK_DEPTH {
        service.open(Options::new(format!("toast {i}")));
    }
    service
}

/// Benchmark opening one more toast on top of a deep stack.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");

    group.bench_function("open_into_crowded_corner", |b| {
        b.iter_batched(
            crowded_service,
            |mut service| {
                black_box(service.open(Options::new("one more")));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark closing the first toast, which reflows every other one.
fn bench_close_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacking");

    group.bench_function("close_head_reflows_suffix", |b| {
        b.iter_batched(
            crowded_service,
            |mut service| {
                let head = service
                    .notifications(Position::TopRight)
                    .next()
                    .map(|n| n.id().clone());
                if let Some(id) = head {
                    black_box(service.close(&id, Position::TopRight, None));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_close_head);
criterion_main!(benches);
