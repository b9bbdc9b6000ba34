use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lockstep::prelude::*;

use std::collections::{LinkedList, VecDeque};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("lockstep dot 10", |b| {
        b.iter(|| lockstep_dot(black_box(10)))
    });
    c.bench_function("lockstep dot 1000", |b| {
        b.iter(|| lockstep_dot(black_box(1000)))
    });
    c.bench_function("iter zip dot 10", |b| b.iter(|| iter_dot(black_box(10))));
    c.bench_function("iter zip dot 1000", |b| {
        b.iter(|| iter_dot(black_box(1000)))
    });
    c.bench_function("lockstep mixed 1000", |b| {
        b.iter(|| lockstep_mixed(black_box(1000)))
    });
    c.bench_function("lockstep input stream 1000", |b| {
        b.iter(|| lockstep_input(black_box(1000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn inputs(max: usize) -> (Vec<f64>, Vec<f64>) {
    let a = (0..max).map(|n| n as f64 * 0.5).collect();
    let b = (0..max).map(|n| n as f64 * 0.25).collect();
    (a, b)
}

fn lockstep_dot(max: usize) -> f64 {
    let (a, b) = inputs(max);
    let mut total = 0.0;
    (&a, &b).lockstep().for_each(|step| {
        total += step.apply(|a, b| a * b);
    });
    total
}

fn iter_dot(max: usize) -> f64 {
    let (a, b) = inputs(max);
    a.iter().zip(b.iter()).map(|(a, b)| a * b).sum()
}

fn lockstep_mixed(max: usize) -> u64 {
    let a: Vec<u64> = (0..max as u64).collect();
    let b: VecDeque<u64> = (0..max as u64).collect();
    let mut c: LinkedList<u64> = (0..max as u64).collect();
    (&a, &b, &mut c).lockstep().for_each(|step| {
        step.apply(|a, b, c| *c += a + b);
    });
    c.iter().sum()
}

fn lockstep_input(max: usize) -> Vec<u32> {
    let text: String = (0..max).map(|n| format!("{n} ")).collect();
    let mut source = text.as_bytes();
    let mut out = vec![0u32; max];
    (lockstep::stream::input::<u32, _>(&mut source), &mut out)
        .lockstep()
        .for_each(|step| {
            step.apply(|n, slot| *slot = *n);
        });
    out
}
