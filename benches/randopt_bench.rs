//! Criterion benchmarks for u-randopt trainers.
//!
//! Uses synthetic problems (Sphere function, Four Peaks) to measure
//! trainer overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_randopt::candidate::{Candidate, Objective};
use u_randopt::dist::{ContinuousUniform, DependencyTree, DiscreteUniform};
use u_randopt::driver::{Driver, DriverConfig};
use u_randopt::ga::{GaConfig, StandardGeneticAlgorithm};
use u_randopt::mimic::{Mimic, MimicConfig, Retain};
use u_randopt::operators::{ContinuousAddOne, DiscreteChangeOneMutation, SingleCrossover};
use u_randopt::problem::{FnEvaluation, Problem};
use u_randopt::problems::FourPeaks;
use u_randopt::sa::{SaConfig, SimulatedAnnealing};

// ===========================================================================
// Sphere function: minimize sum(x_i^2)
// ===========================================================================

fn sphere(c: &Candidate) -> u_randopt::Result<f64> {
    Ok(c.values().iter().map(|x| x * x).sum())
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_sa_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");
    group.sample_size(10);

    let driver = Driver::new(DriverConfig::iterations(1000).with_log_interval(0)).unwrap();
    for &dim in &[10usize, 50, 100] {
        let problem = Problem::new(
            FnEvaluation::new(Objective::Minimize, sphere),
            ContinuousUniform::new(dim, -5.0, 5.0).unwrap(),
        )
        .with_neighbor(ContinuousAddOne::new(0.5));
        let config = SaConfig::new(100.0, 0.995).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let mut sa = SimulatedAnnealing::new(black_box(p), black_box(c)).unwrap();
                black_box(driver.run(&mut sa).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_ga_four_peaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_four_peaks");
    group.sample_size(10);

    let driver = Driver::new(DriverConfig::iterations(50).with_log_interval(0)).unwrap();
    for (n, pop) in [(40usize, 100usize), (100, 200)] {
        let problem = Problem::new(FourPeaks::new(n / 10), DiscreteUniform::binary(n))
            .with_mutation(DiscreteChangeOneMutation::binary(n))
            .with_crossover(SingleCrossover);
        let config = GaConfig::new(pop, pop / 2, pop / 20).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}", n, pop), n),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut ga = StandardGeneticAlgorithm::new(black_box(p), black_box(c)).unwrap();
                    black_box(driver.run(&mut ga).unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_mimic_four_peaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("mimic_four_peaks");
    group.sample_size(10);

    let driver = Driver::new(DriverConfig::iterations(10).with_log_interval(0)).unwrap();
    for &n in &[20usize, 60] {
        let problem = Problem::new(FourPeaks::new(n / 10), DiscreteUniform::binary(n));
        let config = MimicConfig::new(200, Retain::Count(20)).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let tree = DependencyTree::new(vec![2; n], 0.1).unwrap();
                let mut mimic = Mimic::new(black_box(p), tree, black_box(c)).unwrap();
                black_box(driver.run(&mut mimic).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sa_sphere, bench_ga_four_peaks, bench_mimic_four_peaks);
criterion_main!(benches);
