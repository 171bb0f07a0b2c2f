use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_pke::cipher::{decrypt, encrypt};
use knapsack_pke::keys::KeyPair;
use knapsack_pke::math::KeySampler;
use knapsack_pke::params::KnapsackParams;

fn keygen_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    let mut sampler = KeySampler::with_seed(1);

    for length in [64, 256, 1024] {
        let params = KnapsackParams::with_key_length(length);
        group.bench_with_input(BenchmarkId::new("generate", length), &params, |b, params| {
            b.iter(|| KeyPair::generate(params, &mut sampler).unwrap());
        });
    }

    group.finish();
}

fn cipher_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cipher");

    for length in [256, 1024] {
        let mut sampler = KeySampler::with_seed(length as u64);
        let pair = KeyPair::generate(&KnapsackParams::with_key_length(length), &mut sampler).unwrap();
        let message: Vec<u8> = (0..length / 8).map(|i| (i * 31 % 256) as u8).collect();
        let ct = encrypt(pair.public_key(), &message).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", length), &message, |b, msg| {
            b.iter(|| encrypt(pair.public_key(), msg).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", length), &ct, |b, ct| {
            b.iter(|| decrypt(pair.private_key(), ct));
        });
    }

    group.finish();
}

criterion_group!(benches, keygen_benchmark, cipher_benchmark);
criterion_main!(benches);
