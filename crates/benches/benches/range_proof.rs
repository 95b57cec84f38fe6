//! Benchmarks for range proof generation and verification

use benches::near_max_value;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use range::{verify_batch, RangeProof, RangeProofConfig};

const BIT_LENGTHS: [usize; 4] = [8, 16, 32, 64];

fn bench_range_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_generation");

    for bit_length in BIT_LENGTHS {
        group.throughput(Throughput::Elements(bit_length as u64));
        let config = RangeProofConfig::with_bit_length(bit_length);
        let value = near_max_value(bit_length);

        group.bench_with_input(BenchmarkId::new("prove", bit_length), &bit_length, |b, _| {
            let mut rng = thread_rng();
            b.iter(|| {
                let mut session = RangeProof::new(&config).unwrap();
                black_box(session.generate_proof(black_box(value), &mut rng).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_range_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_verification");

    for bit_length in BIT_LENGTHS {
        group.throughput(Throughput::Elements(bit_length as u64));
        let config = RangeProofConfig::with_bit_length(bit_length);

        // Pre-generate proof for verification benchmark
        let mut prover = RangeProof::new(&config).unwrap();
        let (artifact, v) = prover
            .generate_proof(near_max_value(bit_length), &mut StdRng::seed_from_u64(7))
            .unwrap();

        group.bench_with_input(BenchmarkId::new("verify", bit_length), &bit_length, |b, _| {
            b.iter(|| {
                let mut session = RangeProof::new(&config).unwrap();
                assert!(session.verify(black_box(&artifact), &v).unwrap().is_verified());
            });
        });
    }

    group.finish();
}

fn bench_batch_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_batch_verification");
    let config = RangeProofConfig::with_bit_length(64);

    for batch_size in [4, 16] {
        group.throughput(Throughput::Elements(batch_size as u64));
        let mut rng = StdRng::seed_from_u64(batch_size as u64);
        let items: Vec<_> = (0..batch_size)
            .map(|i| {
                let mut prover = RangeProof::new(&config).unwrap();
                prover.generate_proof(i as u64 * 1_000_003, &mut rng).unwrap()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("verify_batch", batch_size), &batch_size, |b, _| {
            b.iter(|| black_box(verify_batch(&config, &items).unwrap()));
        });
    }

    group.finish();
}

fn bench_range_proof_size(c: &mut Criterion) {
    let group = c.benchmark_group("range_proof_size");

    for bit_length in BIT_LENGTHS {
        let config = RangeProofConfig::with_bit_length(bit_length);
        let mut prover = RangeProof::new(&config).unwrap();
        let (artifact, _) = prover.generate_proof(near_max_value(bit_length), &mut thread_rng()).unwrap();

        println!("Range proof size for {} bits: {} bytes", bit_length, artifact.size_bytes());
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_range_proof_generation,
    bench_range_proof_verification,
    bench_batch_verification,
    bench_range_proof_size
);
criterion_main!(benches);
