// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;

use confidential_values::{
    common::*,
    pedersen::Generators,
    transaction::{deposit, transfer}
};

const RECEIVER_COUNTS: [usize; 4] = [1, 2, 4, 8];

fn generator_benchmark(c: &mut Criterion) {
    c.bench_function("derive H", |b| b.iter(|| {
        black_box(Generators::derive(&G_POINT).unwrap());
    }));
}

fn commitment_benchmark(c: &mut Criterion) {
    let params = (Amount(1234567890), random_scalar());
    c.bench_with_input(BenchmarkId::new("Commitment", "commit"), &params,
        |b, (amount, blinding)| b.iter(|| {
            black_box(Commitment::commit(*amount, *blinding));
        }));
}

fn transfer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transfer");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    for x in RECEIVER_COUNTS {
        let amounts: Vec<Amount> = (0..x).map(|n| Amount((n as u128 + 1) * 10)).collect();
        let total = Amount::checked_sum(&amounts).unwrap();
        group.bench_with_input(BenchmarkId::new("transfer", format!("Receivers: {x}")), &amounts,
            |b, amounts| b.iter(|| {
                transfer(vec!(deposit(total)), amounts).unwrap()
            }));
    }
}

criterion_group!(commitments, generator_benchmark, commitment_benchmark, transfer_benchmark);
criterion_main!(commitments);
