//! RHC stepping.

use super::config::RhcConfig;
use crate::candidate::{Candidate, Objective, Scored};
use crate::error::Result;
use crate::problem::NeighborhoodProblem;
use crate::random::{rng_from, OptRng};
use crate::trainer::{Phase, Trainer};

/// Randomized hill climbing over a [`NeighborhoodProblem`].
///
/// The current candidate is also the best-so-far: it is only ever
/// replaced by a candidate that is at least as good.
pub struct RandomizedHillClimbing<P> {
    problem: P,
    rng: OptRng,
    current: Scored,
    steps: usize,
}

impl<P: NeighborhoodProblem> RandomizedHillClimbing<P> {
    /// Creates a climber at a random starting point drawn from the
    /// problem's distribution. The start is evaluated immediately.
    pub fn new(problem: P, config: &RhcConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let start = problem.random(&mut rng);
        Self::start(problem, start, rng)
    }

    /// Creates a climber at a caller-chosen starting point.
    pub fn with_start(problem: P, start: Candidate, config: &RhcConfig) -> Result<Self> {
        config.validate()?;
        let rng = rng_from(config.seed);
        Self::start(problem, start, rng)
    }

    fn start(problem: P, start: Candidate, rng: OptRng) -> Result<Self> {
        let current = problem.score(start)?;
        Ok(Self {
            problem,
            rng,
            current,
            steps: 0,
        })
    }

    pub fn current(&self) -> &Scored {
        &self.current
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<P: NeighborhoodProblem> Trainer for RandomizedHillClimbing<P> {
    fn train(&mut self) -> Result<f64> {
        let neighbor = self
            .problem
            .neighbor(&self.current.candidate, &mut self.rng);
        let neighbor = self.problem.score(neighbor)?;
        self.steps += 1;

        if self
            .problem
            .objective()
            .is_not_worse(neighbor.fitness, self.current.fitness)
        {
            tracing::trace!(
                step = self.steps,
                fitness = neighbor.fitness,
                "rhc accepted move"
            );
            self.current = neighbor;
        }
        Ok(self.current.fitness)
    }

    fn optimal(&self) -> &Scored {
        &self.current
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
        } else {
            Phase::Stepping
        }
    }
}
