//! Benchmarks for netgrowl packet encoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netgrowl::protocol::{encode_notification, encode_registration, Notification, Priority};

fn encode_benchmarks(c: &mut Criterion) {
    let catalog: Vec<String> = (0..32).map(|i| format!("notification kind {}", i)).collect();

    c.bench_function("encode_registration_32", |b| {
        b.iter(|| {
            encode_registration(
                black_box("netgrowl"),
                black_box(catalog.as_slice()),
                "password",
            )
        })
    });

    let notification = Notification::new(
        "notification kind 0",
        "Build finished",
        "All 42 tests passed",
    )
    .priority(Priority::High)
    .sticky(true);

    c.bench_function("encode_notification", |b| {
        b.iter(|| encode_notification(black_box(&notification), "netgrowl", "password"))
    });
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
