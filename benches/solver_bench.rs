//! Benchmarks for the seismic solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seismic_solver::prelude::*;
use std::f64::consts::PI;

fn synthetic_record(n: usize, dt: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 * dt;
            0.3 * (-0.15 * t).exp() * (2.0 * PI * 1.4 * t).sin()
        })
        .collect()
}

fn bench_newmark_solve(c: &mut Criterion) {
    let record = synthetic_record(5000, 0.01);
    let oscillator = Oscillator::new(1.0, 0.05).unwrap();
    let solver = NewmarkSolver::new(oscillator);

    c.bench_function("newmark solve 5000 samples", |b| {
        b.iter(|| solver.solve(black_box(&record), 0.01).unwrap())
    });

    c.bench_function("newmark peaks 5000 samples", |b| {
        b.iter(|| solver.solve_peaks(black_box(&record), 0.01).unwrap())
    });
}

fn bench_spectrum_sweep(c: &mut Criterion) {
    let record = synthetic_record(2000, 0.01);
    let grid = PeriodGrid::default();

    c.bench_function("spectrum sweep 400 periods", |b| {
        b.iter(|| response_spectrum(black_box(&record), 0.01, 0.05, &grid).unwrap())
    });
}

fn bench_fourier(c: &mut Criterion) {
    let record = synthetic_record(4096, 0.01);

    c.bench_function("fourier amplitude 4096 samples", |b| {
        b.iter(|| fourier_amplitude_spectrum(black_box(&record), 0.01).unwrap())
    });
}

criterion_group!(
    benches,
    bench_newmark_solve,
    bench_spectrum_sweep,
    bench_fourier
);
criterion_main!(benches);
