//! MIMIC generation stepping.

use super::config::MimicConfig;
use crate::candidate::{best_index, Candidate, Objective, Scored};
use crate::error::Result;
use crate::problem::{DistributionEstimator, OptimizationProblem};
use crate::random::{rng_from, OptRng};
use crate::trainer::{Phase, Trainer};

/// MIMIC over an [`OptimizationProblem`] with a refittable model.
///
/// The initial population is drawn from the problem's own distribution;
/// every later generation is sampled from `estimator` after fitting it to
/// the retained subset.
pub struct Mimic<P, D> {
    problem: P,
    estimator: D,
    rng: OptRng,
    population_size: usize,
    retain: usize,
    population: Vec<Scored>,
    best: Scored,
    last_cutoff: Option<f64>,
    generation: usize,
}

impl<P, D> Mimic<P, D>
where
    P: OptimizationProblem,
    D: DistributionEstimator,
{
    pub fn new(problem: P, estimator: D, config: &MimicConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let population = (0..config.population_size)
            .map(|_| {
                let candidate = problem.random(&mut rng);
                problem.score(candidate)
            })
            .collect::<Result<Vec<_>>>()?;
        let best = population[best_index(&population, problem.objective())].clone();

        Ok(Self {
            problem,
            estimator,
            rng,
            population_size: config.population_size,
            retain: config.retain_count(),
            population,
            best,
            last_cutoff: None,
            generation: 0,
        })
    }

    pub fn population(&self) -> &[Scored] {
        &self.population
    }

    /// Fitness of the worst retained candidate in the last generation.
    /// `None` before the first step.
    pub fn last_cutoff(&self) -> Option<f64> {
        self.last_cutoff
    }

    /// Number of candidates the model is fitted on each generation.
    pub fn retain_count(&self) -> usize {
        self.retain
    }

    /// The model as fitted in the last generation.
    pub fn estimator(&self) -> &D {
        &self.estimator
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The fittest `retain` candidates of the current population,
    /// best-first.
    fn fittest(&self) -> Vec<&Scored> {
        let objective = self.problem.objective();
        let mut ranked: Vec<&Scored> = self.population.iter().collect();
        ranked.sort_by(|a, b| objective.cmp_best_first(a.fitness, b.fitness));
        ranked.truncate(self.retain);
        ranked
    }
}

impl<P, D> Trainer for Mimic<P, D>
where
    P: OptimizationProblem,
    D: DistributionEstimator,
{
    fn train(&mut self) -> Result<f64> {
        let objective = self.problem.objective();

        let kept = self.fittest();
        let cutoff = kept.last().map(|s| s.fitness);
        let samples: Vec<Candidate> = kept.into_iter().map(|s| s.candidate.clone()).collect();
        self.estimator.estimate(&samples)?;

        let mut population = Vec::with_capacity(self.population_size);
        for _ in 0..self.population_size {
            let candidate = self.estimator.sample(&mut self.rng);
            population.push(self.problem.score(candidate)?);
        }
        self.population = population;
        self.last_cutoff = cutoff;
        self.generation += 1;

        let gen_best = &self.population[best_index(&self.population, objective)];
        if objective.is_better(gen_best.fitness, self.best.fitness) {
            self.best = gen_best.clone();
        }
        tracing::trace!(
            generation = self.generation,
            cutoff = ?self.last_cutoff,
            best = self.best.fitness,
            "mimic generation"
        );
        Ok(self.best.fitness)
    }

    fn optimal(&self) -> &Scored {
        &self.best
    }

    fn objective(&self) -> Objective {
        self.problem.objective()
    }

    fn steps(&self) -> usize {
        self.generation
    }

    fn phase(&self) -> Phase {
        if self.generation == 0 {
            Phase::Initialized
        } else {
            Phase::Generation
        }
    }
}
