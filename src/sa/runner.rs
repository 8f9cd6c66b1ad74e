//! SA stepping.

use super::config::{CoolingSchedule, SaConfig};
use crate::candidate::{Candidate, Objective, Scored};
use crate::error::Result;
use crate::problem::NeighborhoodProblem;
use crate::random::{rng_from, OptRng};
use crate::trainer::{Phase, Trainer};
use rand::Rng;

/// Metropolis acceptance probability for a move with signed improvement
/// `delta` (positive = better) at `temperature`.
///
/// Non-worsening moves are always accepted. Worse moves are accepted with
/// probability `exp(delta / temperature)`, and never once the temperature
/// has reached zero.
///
/// ```
/// use u_randopt::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(0.5, 10.0), 1.0);
/// assert!((acceptance_probability(-2.0, 4.0) - (-0.5f64).exp()).abs() < 1e-12);
/// assert_eq!(acceptance_probability(-1.0, 0.0), 0.0);
/// ```
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta >= 0.0 {
        1.0
    } else if temperature > 0.0 {
        (delta / temperature).exp()
    } else {
        0.0
    }
}

/// Simulated annealing over a [`NeighborhoodProblem`].
///
/// Tracks the current candidate and the best-so-far separately, since an
/// accepted worse move can leave the current candidate behind the best.
pub struct SimulatedAnnealing<P> {
    problem: P,
    rng: OptRng,
    cooling: CoolingSchedule,
    temperature: f64,
    current: Scored,
    best: Scored,
    steps: usize,
    accepted_moves: usize,
}

impl<P: NeighborhoodProblem> SimulatedAnnealing<P> {
    /// Creates an annealer at a random starting point.
    pub fn new(problem: P, config: &SaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let start = problem.random(&mut rng);
        Self::start(problem, start, rng, config)
    }

    /// Creates an annealer at a caller-chosen starting point.
    pub fn with_start(problem: P, start: Candidate, config: &SaConfig) -> Result<Self> {
        config.validate()?;
        let rng = rng_from(config.seed);
        Self::start(problem, start, rng, config)
    }

    fn start(problem: P, start: Candidate, rng: OptRng, config: &SaConfig) -> Result<Self> {
        let current = problem.score(start)?;
        Ok(Self {
            problem,
            rng,
            cooling: config.cooling,
            temperature: config.initial_temperature,
            best: current.clone(),
            current,
            steps: 0,
            accepted_moves: 0,
        })
    }

    /// Temperature that the next step will use.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current(&self) -> &Scored {
        &self.current
    }

    /// Number of accepted moves, improving or not.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<P: NeighborhoodProblem> Trainer for SimulatedAnnealing<P> {
    fn train(&mut self) -> Result<f64> {
        let objective = self.problem.objective();
        let neighbor = self
            .problem
            .neighbor(&self.current.candidate, &mut self.rng);
        let neighbor = self.problem.score(neighbor)?;

        let delta = objective.improvement(neighbor.fitness, self.current.fitness);
        let probability = acceptance_probability(delta, self.temperature);
        // Draws only for uncertain moves: a cold run replays hill climbing.
        let accept = probability >= 1.0
            || (probability > 0.0 && self.rng.random::<f64>() < probability);

        if accept {
            tracing::trace!(
                step = self.steps + 1,
                fitness = neighbor.fitness,
                temperature = self.temperature,
                "sa accepted move"
            );
            self.current = neighbor;
            self.accepted_moves += 1;
            if objective.is_better(self.current.fitness, self.best.fitness) {
                self.best = self.current.clone();
            }
        }

        self.temperature = self.cooling.next(self.temperature);
        self.steps += 1;
        Ok(self.best.fitness)
    }

    fn optimal(&self) -> &Scored {
        &self.best
    }

    fn objective(&self) -> Objective {
        self.problem.objective()
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn phase(&self) -> Phase {
        if self.steps == 0 {
            Phase::Initialized
        } else if self.temperature <= 0.0 {
            Phase::Cooled
        } else {
            Phase::Stepping
        }
    }
}
