use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fsieve_core::{SegmentedSieve, SieveConfig, estimate_limit};

const INDICES: [i64; 3] = [10_000, 100_000, 1_000_000];

fn sieve_with_chunk(max_chunk_size: usize) -> SegmentedSieve {
    SegmentedSieve::new(SieveConfig::default().with_max_chunk_size(max_chunk_size))
        .expect("chunk size should be valid")
}

fn bench_nth_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime");
    let sieve = SegmentedSieve::new(SieveConfig::default()).expect("default config is valid");

    for index in INDICES {
        let limit = estimate_limit(u64::try_from(index).expect("index is non-negative"));
        group.throughput(Throughput::Elements(limit));
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &index| {
            b.iter(|| {
                let prime = sieve.nth_prime(index).expect("lookup should succeed");
                criterion::black_box(prime);
            });
        });
    }

    group.finish();
}

fn bench_chunk_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime_chunk_size");
    let index = 100_000_i64;

    for chunk in [1_000_usize, 32_768, 262_144, 10_000_000] {
        let sieve = sieve_with_chunk(chunk);
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &sieve, |b, sieve| {
            b.iter(|| {
                let prime = sieve.nth_prime(index).expect("lookup should succeed");
                criterion::black_box(prime);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nth_prime, bench_chunk_size);
criterion_main!(benches);
