//! Benchmarks for the list path: projection alone, and a full request through
//! the bridge against an in-memory store.

use contacts_bridge::bridge::projector::project_all;
use contacts_bridge::providers::MemoryContactProvider;
use contacts_bridge::{ContactBridge, PlatformContact};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn sample_contacts(count: usize) -> Vec<PlatformContact> {
    (0..count)
        .map(|i| {
            PlatformContact::new(
                format!("Contact {i}"),
                [format!("contact{i}@example.com"), format!("c{i}@work.example.com")],
                [format!("555-{:04}", i % 10_000)],
            )
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_all");

    for size in [100, 1_000, 10_000] {
        let records = sample_contacts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| project_all(records.clone()))
        });
    }

    group.finish();
}

fn bench_list_request(c: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("list_contacts_request");

    for size in [100, 1_000] {
        let provider = Arc::new(MemoryContactProvider::new(sample_contacts(size)));
        let bridge = ContactBridge::with_runtime(provider, runtime.handle().clone());

        group.bench_with_input(BenchmarkId::from_parameter(size), &bridge, |b, bridge| {
            b.iter(|| runtime.block_on(bridge.list_contacts()).expect("list succeeds"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_list_request);
criterion_main!(benches);
