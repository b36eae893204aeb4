//! Criterion benchmarks for the knapsack solver family.
//!
//! Uses seeded random instances so runs are comparable across machines
//! and commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_solvers::bnb::BranchAndBound;
use knapsack_solvers::enumeration::Enumeration;
use knapsack_solvers::greedy::{FractionalSolver, GreedySolver};
use knapsack_solvers::sa::{SaConfig, SimulatedAnnealing};
use knapsack_solvers::tabu::{TabuConfig, TabuSearch};
use knapsack_solvers::Instance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random instance with capacity at half the total weight, the regime where
/// branching is hardest.
fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<u64> = (0..n).map(|_| rng.random_range(1..=100)).collect();
    let weights: Vec<u64> = (0..n).map(|_| rng.random_range(1..=100)).collect();
    let capacity = weights.iter().sum::<u64>() / 2;
    Instance::new(values, weights, capacity)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for n in [100, 1_000, 10_000] {
        let instance = random_instance(n, 7);
        group.bench_with_input(BenchmarkId::new("greedy", n), &instance, |b, inst| {
            b.iter(|| GreedySolver.run(black_box(inst)))
        });
        group.bench_with_input(BenchmarkId::new("fractional", n), &instance, |b, inst| {
            b.iter(|| FractionalSolver.run(black_box(inst)))
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    for n in [15, 20] {
        let instance = random_instance(n, 7);
        group.bench_with_input(BenchmarkId::new("enumeration", n), &instance, |b, inst| {
            b.iter(|| Enumeration.run(black_box(inst)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("branch-and-bound", n),
            &instance,
            |b, inst| b.iter(|| BranchAndBound.run(black_box(inst))),
        );
    }
    group.finish();
}

fn bench_metaheuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metaheuristics");
    let instance = random_instance(100, 7);

    let sa = SimulatedAnnealing::new(SaConfig::default().with_max_iterations(5_000).with_seed(42));
    group.bench_function("simulated-annealing/100", |b| {
        b.iter(|| sa.run(black_box(&instance)).unwrap())
    });

    let tabu = TabuSearch::new(TabuConfig::default().with_max_iterations(200).with_seed(42));
    group.bench_function("tabu-search/100", |b| {
        b.iter(|| tabu.run(black_box(&instance)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_exact, bench_metaheuristics);
criterion_main!(benches);
