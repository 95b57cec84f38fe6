//! Benchmarks for inner product argument

use benches::random_vectors;
use bulletproofs_core::{GeneratorSet, Sha256Transcript, DEFAULT_GENERATOR_SEED};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipa::{InnerProductProver, InnerProductVerifier};

const VECTOR_LENGTHS: [usize; 5] = [8, 16, 32, 64, 128];

fn bench_ipa_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_generation");

    for vector_length in VECTOR_LENGTHS {
        group.throughput(Throughput::Elements(vector_length as u64));

        let generators = GeneratorSet::cached(DEFAULT_GENERATOR_SEED, vector_length).unwrap();
        let prover = InnerProductProver::new(generators.g_vec.clone(), generators.h_vec.clone(), generators.u).unwrap();
        let (a, b) = random_vectors(vector_length, 1);

        group.bench_with_input(BenchmarkId::new("prove", vector_length), &vector_length, |bench, _| {
            bench.iter(|| {
                let mut transcript = Sha256Transcript::new();
                black_box(prover.prove(&mut transcript, a.clone(), b.clone()).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_ipa_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_verification");

    for vector_length in VECTOR_LENGTHS {
        group.throughput(Throughput::Elements(vector_length as u64));

        let generators = GeneratorSet::cached(DEFAULT_GENERATOR_SEED, vector_length).unwrap();
        let prover = InnerProductProver::new(generators.g_vec.clone(), generators.h_vec.clone(), generators.u).unwrap();
        let verifier =
            InnerProductVerifier::new(generators.g_vec.clone(), generators.h_vec.clone(), generators.u).unwrap();

        let (a, b) = random_vectors(vector_length, 2);
        let commitment = generators.inner_product_commit(&a, &b).unwrap();
        let proof = prover.prove(&mut Sha256Transcript::new(), a, b).unwrap();

        group.bench_with_input(BenchmarkId::new("verify", vector_length), &vector_length, |bench, _| {
            bench.iter(|| {
                let mut transcript = Sha256Transcript::new();
                assert!(verifier.verify(&mut transcript, black_box(&proof), &commitment));
            });
        });
    }

    group.finish();
}

fn bench_generator_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_derivation");
    group.sample_size(10);

    for vector_length in [16, 64] {
        group.bench_with_input(BenchmarkId::new("derive", vector_length), &vector_length, |bench, &n| {
            bench.iter(|| black_box(GeneratorSet::new(DEFAULT_GENERATOR_SEED, n).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ipa_generation, bench_ipa_verification, bench_generator_derivation);
criterion_main!(benches);
