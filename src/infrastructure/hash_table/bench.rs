use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Import the table and record types from the crate
use bidtable::infrastructure::hash_table::BidTable;
use bidtable::Bid;

// Test configuration
const BID_COUNT: usize = 10_000;
const SMALL_CAPACITY: usize = 179;
const LARGE_CAPACITY: usize = 16_381;

// Generate bids with random numeric ids
fn generate_bids(count: usize) -> Vec<Bid> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let id: u32 = rng.gen_range(10_000..100_000);
            Bid::new(format!("{}{}", id, i), "Bench item", "General Fund", i as f64)
        })
        .collect()
}

fn build_table(capacity: usize, bids: &[Bid]) -> BidTable {
    let mut table = BidTable::new(capacity).unwrap();
    table.extend(bids.iter().cloned());
    table
}

// Benchmark bulk insertion for a small and a large bucket array
pub fn bench_insert(c: &mut Criterion) {
    let bids = generate_bids(BID_COUNT);

    let mut group = c.benchmark_group("Insert");

    group.bench_function("capacity_179", |b| {
        b.iter(|| build_table(SMALL_CAPACITY, black_box(&bids)))
    });
    group.bench_function("capacity_16381", |b| {
        b.iter(|| build_table(LARGE_CAPACITY, black_box(&bids)))
    });

    group.finish();
}

// Benchmark point lookups of present ids
pub fn bench_search(c: &mut Criterion) {
    let bids = generate_bids(BID_COUNT);
    let small = build_table(SMALL_CAPACITY, &bids);
    let large = build_table(LARGE_CAPACITY, &bids);

    let mut group = c.benchmark_group("Search");

    group.bench_function("capacity_179", |b| {
        b.iter(|| {
            for bid in &bids {
                assert!(small.search(black_box(bid.bid_id())).is_some());
            }
        })
    });
    group.bench_function("capacity_16381", |b| {
        b.iter(|| {
            for bid in &bids {
                assert!(large.search(black_box(bid.bid_id())).is_some());
            }
        })
    });

    group.finish();
}

// Benchmark removing every bid from a freshly built table
pub fn bench_remove(c: &mut Criterion) {
    let bids = generate_bids(BID_COUNT);

    let mut group = c.benchmark_group("Remove");

    group.bench_function("capacity_16381", |b| {
        b.iter_batched(
            || build_table(LARGE_CAPACITY, &bids),
            |mut table| {
                for bid in &bids {
                    table.remove(black_box(bid.bid_id()));
                }
                table
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_insert, bench_search, bench_remove);

criterion_main!(benches);
