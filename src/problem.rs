//! Capability traits that plug a concrete problem into the trainers.
//!
//! Each capability is a single-method trait: evaluate, draw a neighbor,
//! mutate, mate, sample, estimate. Concrete problems supply structs or
//! closures for the capabilities they need, and a [`Problem`] bundle wires
//! them together:
//!
//! ```
//! use u_randopt::dist::DiscreteUniform;
//! use u_randopt::operators::{FlipOne, SingleCrossover, DiscreteChangeOneMutation};
//! use u_randopt::problem::{Counted, Problem};
//! use u_randopt::problems::CountOnes;
//!
//! let eval = Counted::new(CountOnes);
//! let problem = Problem::new(&eval, DiscreteUniform::binary(16))
//!     .with_neighbor(FlipOne)
//!     .with_mutation(DiscreteChangeOneMutation::binary(16))
//!     .with_crossover(SingleCrossover);
//! # let _ = problem;
//! ```
//!
//! The bundle only implements [`NeighborhoodProblem`] once a neighbor is
//! set, and [`EvolutionaryProblem`] once both mutation and crossover are.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::candidate::{Candidate, Objective, Scored};
use crate::error::{OptError, Result};
use crate::random::OptRng;

// ============================================================================
// Capabilities
// ============================================================================

/// Scores a candidate.
///
/// Must be deterministic for a fixed candidate. The comparison direction
/// is part of the contract and never changes for an instance.
pub trait EvaluationFunction {
    /// Whether higher or lower fitness is better.
    fn objective(&self) -> Objective;

    /// Computes the fitness of `candidate`.
    fn value(&self, candidate: &Candidate) -> Result<f64>;

    /// Reports whether `candidate` satisfies the problem's hard
    /// constraints, for problems that have a notion of feasibility
    /// (e.g. a conflict-free coloring). `None` when not applicable.
    fn feasible(&self, _candidate: &Candidate) -> Option<bool> {
        None
    }
}

impl<E: EvaluationFunction + ?Sized> EvaluationFunction for &E {
    fn objective(&self) -> Objective {
        (**self).objective()
    }
    fn value(&self, candidate: &Candidate) -> Result<f64> {
        (**self).value(candidate)
    }
    fn feasible(&self, candidate: &Candidate) -> Option<bool> {
        (**self).feasible(candidate)
    }
}

impl<E: EvaluationFunction + ?Sized> EvaluationFunction for Arc<E> {
    fn objective(&self) -> Objective {
        (**self).objective()
    }
    fn value(&self, candidate: &Candidate) -> Result<f64> {
        (**self).value(candidate)
    }
    fn feasible(&self, candidate: &Candidate) -> Option<bool> {
        (**self).feasible(candidate)
    }
}

/// Produces a candidate within a small move of the input.
pub trait NeighborFunction {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate;
}

impl<F> NeighborFunction for F
where
    F: Fn(&Candidate, &mut OptRng) -> Candidate,
{
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        self(candidate, rng)
    }
}

/// Perturbs one individual, returning the mutant.
pub trait MutationFunction {
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate;
}

impl<F> MutationFunction for F
where
    F: Fn(&Candidate, &mut OptRng) -> Candidate,
{
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        self(candidate, rng)
    }
}

/// Combines two parents into one child.
///
/// Implementations must respect the problem's domain constraints (e.g.
/// permutation validity).
pub trait CrossoverFunction {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate;
}

impl<F> CrossoverFunction for F
where
    F: Fn(&Candidate, &Candidate, &mut OptRng) -> Candidate,
{
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        self(a, b, rng)
    }
}

/// Draws candidates. Used for random starting points and by MIMIC.
pub trait Distribution {
    fn sample(&self, rng: &mut OptRng) -> Candidate;
}

impl<F> Distribution for F
where
    F: Fn(&mut OptRng) -> Candidate,
{
    fn sample(&self, rng: &mut OptRng) -> Candidate {
        self(rng)
    }
}

/// A distribution that can be refitted to observed candidates.
pub trait DistributionEstimator: Distribution {
    /// Re-estimates the model from `samples`, replacing the previous fit.
    fn estimate(&mut self, samples: &[Candidate]) -> Result<()>;
}

// ============================================================================
// Evaluation helpers
// ============================================================================

/// Wraps an evaluation function and counts how many times it was called.
///
/// The counter belongs to this instance only. Call [`reset`](Counted::reset)
/// between runs that share the wrapper.
#[derive(Debug, Default)]
pub struct Counted<E> {
    inner: E,
    calls: AtomicU64,
}

impl<E> Counted<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
        }
    }

    /// Number of `value` calls since construction or the last reset.
    pub fn evaluations(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: EvaluationFunction> EvaluationFunction for Counted<E> {
    fn objective(&self) -> Objective {
        self.inner.objective()
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.value(candidate)
    }

    fn feasible(&self, candidate: &Candidate) -> Option<bool> {
        self.inner.feasible(candidate)
    }
}

/// Adapts a closure into an [`EvaluationFunction`] with a fixed direction.
pub struct FnEvaluation<F> {
    objective: Objective,
    f: F,
}

impl<F> FnEvaluation<F>
where
    F: Fn(&Candidate) -> Result<f64>,
{
    pub fn new(objective: Objective, f: F) -> Self {
        Self { objective, f }
    }
}

impl<F> EvaluationFunction for FnEvaluation<F>
where
    F: Fn(&Candidate) -> Result<f64>,
{
    fn objective(&self) -> Objective {
        self.objective
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        (self.f)(candidate)
    }
}

// ============================================================================
// Problem traits consumed by the trainers
// ============================================================================

/// The part every trainer needs: scoring and random starting points.
pub trait OptimizationProblem {
    fn objective(&self) -> Objective;

    fn value(&self, candidate: &Candidate) -> Result<f64>;

    /// Draws a random starting candidate.
    fn random(&self, rng: &mut OptRng) -> Candidate;

    /// Evaluates `candidate` and pairs it with its fitness.
    ///
    /// Rejects NaN fitness, which no trainer can rank.
    fn score(&self, candidate: Candidate) -> Result<Scored> {
        let fitness = self.value(&candidate)?;
        if fitness.is_nan() {
            return Err(OptError::NonFiniteFitness);
        }
        Ok(Scored::new(candidate, fitness))
    }
}

/// A problem with a neighborhood, for hill climbing and annealing.
pub trait NeighborhoodProblem: OptimizationProblem {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate;
}

/// A problem with mutation and crossover, for the genetic algorithm.
pub trait EvolutionaryProblem: OptimizationProblem {
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate;

    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate;
}

impl<P: OptimizationProblem + ?Sized> OptimizationProblem for &P {
    fn objective(&self) -> Objective {
        (**self).objective()
    }
    fn value(&self, candidate: &Candidate) -> Result<f64> {
        (**self).value(candidate)
    }
    fn random(&self, rng: &mut OptRng) -> Candidate {
        (**self).random(rng)
    }
}

impl<P: NeighborhoodProblem + ?Sized> NeighborhoodProblem for &P {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        (**self).neighbor(candidate, rng)
    }
}

impl<P: EvolutionaryProblem + ?Sized> EvolutionaryProblem for &P {
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        (**self).mutate(candidate, rng)
    }
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        (**self).mate(a, b, rng)
    }
}

// ============================================================================
// Problem bundle
// ============================================================================

/// Composes an evaluation function, a starting distribution and optional
/// variation operators into a problem the trainers accept.
///
/// Unset operators are `()`.
#[derive(Debug, Clone)]
pub struct Problem<E, D, N = (), M = (), C = ()> {
    eval: E,
    init: D,
    neighbor: N,
    mutation: M,
    crossover: C,
}

impl<E, D> Problem<E, D> {
    pub fn new(eval: E, init: D) -> Self {
        Self {
            eval,
            init,
            neighbor: (),
            mutation: (),
            crossover: (),
        }
    }
}

impl<E, D, N, M, C> Problem<E, D, N, M, C> {
    /// Adds a neighbor function, enabling RHC and SA.
    pub fn with_neighbor<N2>(self, neighbor: N2) -> Problem<E, D, N2, M, C> {
        Problem {
            eval: self.eval,
            init: self.init,
            neighbor,
            mutation: self.mutation,
            crossover: self.crossover,
        }
    }

    /// Adds a mutation function for the GA.
    pub fn with_mutation<M2>(self, mutation: M2) -> Problem<E, D, N, M2, C> {
        Problem {
            eval: self.eval,
            init: self.init,
            neighbor: self.neighbor,
            mutation,
            crossover: self.crossover,
        }
    }

    /// Adds a crossover function for the GA.
    pub fn with_crossover<C2>(self, crossover: C2) -> Problem<E, D, N, M, C2> {
        Problem {
            eval: self.eval,
            init: self.init,
            neighbor: self.neighbor,
            mutation: self.mutation,
            crossover,
        }
    }

    pub fn evaluation(&self) -> &E {
        &self.eval
    }
}

impl<E, D, N, M, C> OptimizationProblem for Problem<E, D, N, M, C>
where
    E: EvaluationFunction,
    D: Distribution,
{
    fn objective(&self) -> Objective {
        self.eval.objective()
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        self.eval.value(candidate)
    }

    fn random(&self, rng: &mut OptRng) -> Candidate {
        self.init.sample(rng)
    }
}

impl<E, D, N, M, C> NeighborhoodProblem for Problem<E, D, N, M, C>
where
    E: EvaluationFunction,
    D: Distribution,
    N: NeighborFunction,
{
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        self.neighbor.neighbor(candidate, rng)
    }
}

impl<E, D, N, M, C> EvolutionaryProblem for Problem<E, D, N, M, C>
where
    E: EvaluationFunction,
    D: Distribution,
    M: MutationFunction,
    C: CrossoverFunction,
{
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        self.mutation.mutate(candidate, rng)
    }

    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        self.crossover.mate(a, b, rng)
    }
}
