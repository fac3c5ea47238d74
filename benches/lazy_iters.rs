use criterion::{Criterion, criterion_group, criterion_main};
use lazy_iters::{Circle, MyRange, RoundRobin, my_chain};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let sources = (0..64).map(|n| vec![n; 1_000]).collect::<Vec<_>>();

    c.bench_function("Round-robin across 64 sources", |b| {
        b.iter(|| RoundRobin::new(black_box(sources.clone())).sum::<i32>())
    });

    c.bench_function("Chain 64 sources", |b| {
        b.iter(|| my_chain(black_box(sources.clone())).sum::<i32>())
    });

    let letters = ('a'..='z').collect::<Vec<_>>();
    c.bench_function("Cycle a slice 100k times", |b| {
        b.iter(|| {
            Circle::new(black_box(&letters), 100_000)
                .unwrap()
                .iter()
                .count()
        })
    });

    c.bench_function("Step through a 1M range", |b| {
        b.iter(|| MyRange::with_step(0, black_box(1_000_000), 3).unwrap().sum::<i64>())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
