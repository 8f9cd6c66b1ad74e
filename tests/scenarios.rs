//! End-to-end runs of every trainer through the public API.

use u_randopt::candidate::Candidate;
use u_randopt::dist::{DependencyTree, DiscretePermutation, DiscreteUniform};
use u_randopt::driver::{Driver, DriverConfig};
use u_randopt::ga::{GaConfig, StandardGeneticAlgorithm};
use u_randopt::mimic::{Mimic, MimicConfig, Retain};
use u_randopt::operators::{
    DiscreteChangeOne, DiscreteChangeOneMutation, FlipOne, SingleCrossover, SwapMutation,
    SwapNeighbor,
};
use u_randopt::problem::{Counted, OptimizationProblem, Problem};
use u_randopt::problems::{
    CountOnes, FourPeaks, KColoring, NQueens, TravelingSalesmanCrossover, TravelingSalesmanRoute,
};
use u_randopt::random::create_rng;
use u_randopt::rhc::{RandomizedHillClimbing, RhcConfig};
use u_randopt::sa::{SaConfig, SimulatedAnnealing};
use u_randopt::{Phase, Trainer};

fn is_permutation(c: &Candidate) -> bool {
    let mut seen = vec![false; c.len()];
    c.discrete_iter()
        .all(|v| v < seen.len() && !std::mem::replace(&mut seen[v], true))
}

// ============================================================================
// Count ones
// ============================================================================

#[test]
fn count_ones_rhc_reaches_optimum_in_fifty_steps() {
    let problem = Problem::new(CountOnes, DiscreteUniform::binary(8)).with_neighbor(FlipOne);
    let mut rhc =
        RandomizedHillClimbing::new(problem, &RhcConfig::default().with_seed(7)).unwrap();

    let driver = Driver::new(DriverConfig::iterations(50).with_history()).unwrap();
    let result = driver.run(&mut rhc).unwrap();

    assert_eq!(result.steps, 50);
    assert_eq!(result.best.fitness, 8.0);
    assert_eq!(result.best.candidate, Candidate::from_discrete([1; 8]));
    assert!(result
        .history
        .windows(2)
        .all(|w| w[1].fitness >= w[0].fitness));
}

#[test]
fn count_ones_run_is_reproducible() {
    let run = |seed| {
        let problem = Problem::new(CountOnes, DiscreteUniform::binary(8)).with_neighbor(FlipOne);
        let mut rhc =
            RandomizedHillClimbing::new(problem, &RhcConfig::default().with_seed(seed)).unwrap();
        let driver = Driver::new(DriverConfig::iterations(50).with_history()).unwrap();
        let result = driver.run(&mut rhc).unwrap();
        result
            .history
            .iter()
            .map(|r| r.fitness)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}

// ============================================================================
// Annealing at zero temperature
// ============================================================================

#[test]
fn cold_annealing_replays_hill_climbing() {
    let problem = Problem::new(FourPeaks::new(3), DiscreteUniform::binary(24)).with_neighbor(FlipOne);
    let start = problem.random(&mut create_rng(99));

    let mut rhc =
        RandomizedHillClimbing::with_start(&problem, start.clone(), &RhcConfig::default().with_seed(5))
            .unwrap();
    let mut sa =
        SimulatedAnnealing::with_start(&problem, start, &SaConfig::new(0.0, 0.5).with_seed(5))
            .unwrap();

    for _ in 0..300 {
        let before = sa.current().fitness;
        rhc.train().unwrap();
        sa.train().unwrap();
        assert_eq!(sa.current(), rhc.current());
        assert!(sa.current().fitness >= before);
    }
    assert_eq!(sa.optimal().fitness, rhc.optimal().fitness);
    assert_eq!(sa.phase(), Phase::Cooled);
}

// ============================================================================
// Zero steps
// ============================================================================

#[test]
fn zero_steps_return_the_starting_point() {
    let problem = Problem::new(CountOnes, DiscreteUniform::binary(10))
        .with_neighbor(FlipOne)
        .with_mutation(DiscreteChangeOneMutation::binary(10))
        .with_crossover(SingleCrossover);
    let start = Candidate::from_discrete([1, 0, 1, 1, 0, 0, 0, 1, 0, 0]);

    let rhc = RandomizedHillClimbing::with_start(&problem, start.clone(), &RhcConfig::default())
        .unwrap();
    assert_eq!(rhc.optimal().candidate, start);
    assert_eq!(rhc.optimal().fitness, 4.0);
    assert_eq!(rhc.steps(), 0);

    let sa = SimulatedAnnealing::with_start(&problem, start.clone(), &SaConfig::new(10.0, 0.9))
        .unwrap();
    assert_eq!(sa.optimal().candidate, start);
    assert_eq!(sa.phase(), Phase::Initialized);

    let ga = StandardGeneticAlgorithm::new(&problem, &GaConfig::new(30, 20, 5).with_seed(1)).unwrap();
    let best = ga
        .population()
        .iter()
        .map(|s| s.fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(ga.optimal().fitness, best);
    assert_eq!(ga.phase(), Phase::Initialized);

    let tree = DependencyTree::new(vec![2; 10], 0.0).unwrap();
    let mimic = Mimic::new(&problem, tree, &MimicConfig::default().with_seed(1)).unwrap();
    let best = mimic
        .population()
        .iter()
        .map(|s| s.fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(mimic.optimal().fitness, best);
    assert_eq!(mimic.last_cutoff(), None);
}

// ============================================================================
// Population trainers
// ============================================================================

#[test]
fn elitist_ga_keeps_size_and_never_regresses() {
    let problem = Problem::new(FourPeaks::new(4), DiscreteUniform::binary(30))
        .with_mutation(DiscreteChangeOneMutation::binary(30))
        .with_crossover(SingleCrossover);
    let mut ga =
        StandardGeneticAlgorithm::new(problem, &GaConfig::new(50, 30, 10).with_seed(8)).unwrap();

    let mut last = ga.generation_best().fitness;
    for _ in 0..40 {
        ga.train().unwrap();
        assert_eq!(ga.population().len(), 50);
        let now = ga.generation_best().fitness;
        assert!(now >= last, "generation best fell from {last} to {now}");
        last = now;
    }
    assert_eq!(ga.phase(), Phase::Generation);
}

#[test]
fn mimic_keeps_population_and_retain_sizes() {
    let problem = Problem::new(CountOnes, DiscreteUniform::binary(16));
    let tree = DependencyTree::new(vec![2; 16], 0.1).unwrap();
    let config = MimicConfig::new(50, Retain::Quantile(0.25)).with_seed(3);
    let mut mimic = Mimic::new(problem, tree, &config).unwrap();

    assert_eq!(mimic.retain_count(), 13);
    for _ in 0..10 {
        mimic.train().unwrap();
        assert_eq!(mimic.population().len(), 50);
        assert!(mimic.last_cutoff().is_some());
    }
    assert!(mimic.optimal().fitness >= 12.0);
}

#[test]
fn ga_on_tsp_keeps_tours_valid() {
    let points: Vec<(f64, f64)> = (0..12)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / 12.0;
            (a.cos(), a.sin())
        })
        .collect();
    let route = TravelingSalesmanRoute::new(points);
    let crossover = TravelingSalesmanCrossover::new(&route);
    let problem = Problem::new(route, DiscretePermutation::new(12))
        .with_mutation(SwapMutation)
        .with_crossover(crossover);

    let mut ga =
        StandardGeneticAlgorithm::new(&problem, &GaConfig::new(40, 20, 4).with_seed(21)).unwrap();
    let initial = ga.optimal().fitness;
    for _ in 0..30 {
        ga.train().unwrap();
        assert!(ga.population().iter().all(|s| is_permutation(&s.candidate)));
    }
    assert!(ga.optimal().fitness >= initial);
    assert!(is_permutation(&ga.optimal().candidate));
}

// ============================================================================
// Driver
// ============================================================================

#[test]
fn restarts_share_a_counted_evaluation() {
    let eval = Counted::new(NQueens);
    let problem = Problem::new(&eval, DiscretePermutation::new(8)).with_neighbor(SwapNeighbor);
    let driver = Driver::new(DriverConfig::iterations(100)).unwrap();

    let result = driver
        .run_restarts(5, |i| {
            RandomizedHillClimbing::new(&problem, &RhcConfig::default().with_seed(i as u64))
        })
        .unwrap();

    // One evaluation for each start and one per step.
    assert_eq!(eval.evaluations(), 5 * 101);
    assert!(is_permutation(&result.best.candidate));
    assert!(result.best.fitness <= NQueens::max_fitness(8));

    eval.reset();
    assert_eq!(eval.evaluations(), 0);
}

#[test]
fn observer_and_budget_on_minimizing_problem() {
    let coloring = KColoring::petersen(3).unwrap();
    let ranges = coloring.ranges();
    let problem = Problem::new(coloring, DiscreteUniform::new(ranges.clone()).unwrap())
        .with_neighbor(DiscreteChangeOne::new(ranges).unwrap());
    let mut sa = SimulatedAnnealing::new(&problem, &SaConfig::new(2.0, 0.98).with_seed(4)).unwrap();
    let start = sa.optimal().fitness;

    let mut seen = Vec::new();
    let driver = Driver::new(DriverConfig::iterations(200)).unwrap();
    let result = driver
        .run_with_observer(&mut sa, |r| seen.push(r.fitness))
        .unwrap();

    assert_eq!(seen.len(), 200);
    // Best-so-far under minimization never goes up.
    assert!(seen.windows(2).all(|w| w[1] <= w[0]));
    assert!(result.best.fitness <= start);
    assert_eq!(result.best.fitness, *seen.last().unwrap());
}

#[test]
fn zero_ranges_are_rejected_before_a_run() {
    use u_randopt::OptError;

    assert!(matches!(
        DiscreteUniform::new(vec![2, 0]),
        Err(OptError::InvalidConfig(_))
    ));
    assert!(matches!(
        DiscreteChangeOne::new(vec![0, 0]),
        Err(OptError::InvalidConfig(_))
    ));
    assert!(matches!(
        DiscreteChangeOneMutation::new(vec![0, 0]),
        Err(OptError::InvalidConfig(_))
    ));
}

#[test]
fn missing_budget_is_rejected() {
    assert!(Driver::new(DriverConfig::default()).is_err());
    assert!(Driver::new(DriverConfig::iterations(5).with_time_limit_ms(5)).is_err());
}
