//! Criterion micro-benchmarks for allocate/release on the word arena.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use miniheap_arena::HeapArena;
use miniheap_bench::{fragmented_heap, large_heap, reference_heap};

/// Benchmark: carving fresh blocks at the frontier, no reuse.
fn bench_frontier_carve(c: &mut Criterion) {
    c.bench_function("frontier_carve_256_blocks", |b| {
        b.iter(|| {
            let mut heap = large_heap();
            for _ in 0..256 {
                let ptr = heap.allocate(black_box(12)).unwrap();
                black_box(ptr);
            }
            heap
        });
    });
}

/// Benchmark: release immediately followed by a same-size reallocation,
/// the hot free-block-reuse path.
fn bench_free_realloc(c: &mut Criterion) {
    let mut heap = reference_heap();
    let ptr = heap.allocate(10).unwrap();
    let _guard = heap.allocate(10).unwrap();

    let mut live = ptr;
    c.bench_function("free_then_realloc", |b| {
        b.iter(|| {
            heap.release(live).unwrap();
            live = heap.allocate(black_box(10)).unwrap();
            black_box(live);
        });
    });
}

/// Benchmark: first-fit scan across a long fragmented chain before the
/// request lands in the last free block.
fn bench_fragmented_scan(c: &mut Criterion) {
    c.bench_function("first_fit_scan_128_pairs", |b| {
        b.iter_batched(
            || fragmented_heap(128, 8),
            |mut heap: HeapArena| {
                // Too big for the 8-word holes: scans the whole chain,
                // then carves at the frontier.
                let ptr = heap.allocate(black_box(16)).unwrap();
                black_box(ptr);
                heap
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_frontier_carve,
    bench_free_realloc,
    bench_fragmented_scan
);
criterion_main!(benches);
