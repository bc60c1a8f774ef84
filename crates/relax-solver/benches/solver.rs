//! Benchmarks for splitting construction and iterative solves.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use relax_core::LinearSystem;
use relax_solver::{Method, SolverConfig, SplittingMethod, default_cases, run_sweep, solve};

fn bench_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitting");
    let system = LinearSystem::pyramid(3.0);

    for method in Method::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(method),
            &method,
            |bencher, method| {
                bencher.iter(|| method.splitting(black_box(&system)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let config = SolverConfig::default();

    for method in Method::ALL {
        for gamma in [3.0, 2.0] {
            let system = LinearSystem::pyramid(gamma);
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), gamma),
                &system,
                |bencher, system| {
                    bencher.iter(|| solve(&method, black_box(system), &config).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let cases = default_cases();
    let config = SolverConfig::default();

    c.bench_function("default_sweep", |bencher| {
        bencher.iter(|| run_sweep(black_box(&cases), &config));
    });
}

criterion_group!(benches, bench_splitting, bench_solve, bench_sweep);
criterion_main!(benches);
