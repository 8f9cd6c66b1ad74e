//! Driver loops.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::config::{Budget, DriverConfig};
use crate::candidate::Scored;
use crate::error::{OptError, Result};
use crate::trainer::Trainer;

/// One step as seen by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// 1-based index of the step within this run.
    pub step: usize,
    /// Best-so-far fitness returned by the step.
    pub fitness: f64,
    /// Time since the run started, measured after the step.
    pub elapsed: Duration,
}

/// Outcome of a driver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverResult {
    /// The trainer's best-so-far candidate when the budget ran out.
    pub best: Scored,
    /// Steps performed by this run.
    pub steps: usize,
    pub elapsed: Duration,
    /// Mean of the per-step fitness returns. `None` if no step ran.
    pub mean_fitness: Option<f64>,
    /// `true` when a convergence budget stopped on its threshold rather
    /// than its step cap. Always `false` for the other budgets.
    pub converged: bool,
    /// Every step, in order, when history recording is enabled.
    pub history: Vec<StepRecord>,
}

/// Steps trainers under a validated budget.
#[derive(Debug, Clone)]
pub struct Driver {
    config: DriverConfig,
    budget: Budget,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Result<Self> {
        let budget = config.validate()?;
        Ok(Self { config, budget })
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Steps `trainer` until the budget runs out.
    pub fn run<T: Trainer + ?Sized>(&self, trainer: &mut T) -> Result<DriverResult> {
        self.run_with_observer(trainer, |_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every step.
    ///
    /// An evaluation error aborts the run and is returned as is; the
    /// trainer keeps whatever state it had before the failed step.
    #[tracing::instrument(level = "debug", skip_all, fields(budget = ?self.budget))]
    pub fn run_with_observer<T, F>(&self, trainer: &mut T, mut observer: F) -> Result<DriverResult>
    where
        T: Trainer + ?Sized,
        F: FnMut(&StepRecord),
    {
        let start = Instant::now();
        let mut steps = 0usize;
        let mut sum = 0.0;
        let mut previous: Option<f64> = None;
        let mut converged = false;
        let mut history = Vec::new();
        if self.config.record_history {
            if let Budget::Iterations(n) = self.budget {
                history.reserve(n);
            }
        }

        loop {
            let more = match self.budget {
                Budget::Iterations(n) => steps < n,
                Budget::Time(limit) => start.elapsed() < limit,
                Budget::Convergence(c) => steps < c.max_iterations,
            };
            if !more {
                break;
            }

            let fitness = trainer.train()?;
            steps += 1;
            sum += fitness;

            let record = StepRecord {
                step: steps,
                fitness,
                elapsed: start.elapsed(),
            };
            observer(&record);
            if self.config.record_history {
                history.push(record);
            }
            if self.config.log_interval > 0 && steps % self.config.log_interval == 0 {
                debug!(
                    step = steps,
                    fitness,
                    best = trainer.optimal().fitness,
                    "driver progress"
                );
            }

            if let Budget::Convergence(c) = self.budget {
                if previous.is_some_and(|p| (fitness - p).abs() <= c.threshold) {
                    converged = true;
                    break;
                }
                previous = Some(fitness);
            }
        }

        let elapsed = start.elapsed();
        let best = trainer.optimal().clone();
        info!(
            steps,
            best = best.fitness,
            elapsed_ms = elapsed.as_millis() as u64,
            converged,
            "driver finished"
        );
        Ok(DriverResult {
            best,
            steps,
            elapsed,
            mean_fitness: (steps > 0).then(|| sum / steps as f64),
            converged,
            history,
        })
    }

    /// Random-restart wrapper: builds `restarts` fresh trainers with
    /// `make(i)`, runs each under the full budget, and returns the result
    /// with the best final fitness. Ties keep the earlier restart.
    #[tracing::instrument(level = "debug", skip_all, fields(restarts = restarts))]
    pub fn run_restarts<T, F>(&self, restarts: usize, mut make: F) -> Result<DriverResult>
    where
        T: Trainer,
        F: FnMut(usize) -> Result<T>,
    {
        if restarts == 0 {
            return Err(OptError::config("restarts must be at least 1"));
        }

        let mut best: Option<DriverResult> = None;
        for i in 0..restarts {
            let mut trainer = make(i)?;
            let objective = trainer.objective();
            let result = self.run(&mut trainer)?;
            debug!(restart = i, fitness = result.best.fitness, "restart finished");
            let better = match &best {
                None => true,
                Some(b) => objective.is_better(result.best.fitness, b.best.fitness),
            };
            if better {
                best = Some(result);
            }
        }
        best.ok_or_else(|| OptError::config("restarts must be at least 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{Candidate, Objective};
    use crate::driver::Convergence;
    use crate::trainer::Phase;

    /// Replays a fixed fitness sequence, then repeats its last value.
    struct Scripted {
        fitness: Vec<f64>,
        best: Scored,
        steps: usize,
        fail_at: Option<usize>,
    }

    impl Scripted {
        fn new(fitness: Vec<f64>) -> Self {
            Self {
                fitness,
                best: Scored::new(Candidate::new(vec![0.0]), f64::NEG_INFINITY),
                steps: 0,
                fail_at: None,
            }
        }
    }

    impl Trainer for Scripted {
        fn train(&mut self) -> Result<f64> {
            if self.fail_at == Some(self.steps + 1) {
                return Err(OptError::Evaluation("scripted failure".into()));
            }
            let i = self.steps.min(self.fitness.len() - 1);
            self.steps += 1;
            let f = self.fitness[i];
            self.best = Scored::new(Candidate::new(vec![f]), f);
            Ok(f)
        }
        fn optimal(&self) -> &Scored {
            &self.best
        }
        fn objective(&self) -> Objective {
            Objective::Maximize
        }
        fn steps(&self) -> usize {
            self.steps
        }
        fn phase(&self) -> Phase {
            Phase::Stepping
        }
    }

    #[test]
    fn test_iteration_budget_runs_exactly_n() {
        let driver = Driver::new(DriverConfig::iterations(7)).unwrap();
        let mut t = Scripted::new(vec![1.0]);
        let result = driver.run(&mut t).unwrap();
        assert_eq!(result.steps, 7);
        assert_eq!(t.steps(), 7);
        assert!(result.history.is_empty());
        assert!(!result.converged);
    }

    #[test]
    fn test_observer_sees_every_step_in_order() {
        let driver = Driver::new(DriverConfig::iterations(4).with_history()).unwrap();
        let mut t = Scripted::new(vec![1.0, 2.0, 3.0, 4.0]);
        let mut seen = Vec::new();
        let result = driver
            .run_with_observer(&mut t, |r| seen.push((r.step, r.fitness)))
            .unwrap();
        assert_eq!(seen, vec![(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)]);
        assert_eq!(result.history.len(), 4);
        assert_eq!(result.mean_fitness, Some(2.5));
        assert!(result
            .history
            .windows(2)
            .all(|w| w[0].elapsed <= w[1].elapsed));
    }

    #[test]
    fn test_convergence_stops_on_flat_fitness() {
        let driver =
            Driver::new(DriverConfig::until_converged(Convergence::new(1e-9, 100))).unwrap();
        let mut t = Scripted::new(vec![1.0, 2.0, 3.0, 3.0]);
        let result = driver.run(&mut t).unwrap();
        assert!(result.converged);
        assert_eq!(result.steps, 4);
    }

    #[test]
    fn test_convergence_step_cap() {
        let driver = Driver::new(DriverConfig::until_converged(Convergence::new(0.0, 3))).unwrap();
        let mut t = Scripted::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let result = driver.run(&mut t).unwrap();
        assert!(!result.converged);
        assert_eq!(result.steps, 3);
    }

    #[test]
    fn test_time_budget_stops() {
        let driver = Driver::new(DriverConfig::time_limit(20)).unwrap();
        let mut t = Scripted::new(vec![1.0]);
        let result = driver.run(&mut t).unwrap();
        assert!(result.steps > 0);
        assert!(result.elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn test_evaluation_error_aborts_run() {
        let driver = Driver::new(DriverConfig::iterations(10)).unwrap();
        let mut t = Scripted::new(vec![1.0]);
        t.fail_at = Some(3);
        assert!(matches!(driver.run(&mut t), Err(OptError::Evaluation(_))));
        assert_eq!(t.steps(), 2);
    }

    #[test]
    fn test_restarts_keep_best() {
        let driver = Driver::new(DriverConfig::iterations(2)).unwrap();
        let finals = [3.0, 9.0, 5.0];
        let mut built = Vec::new();
        let result = driver
            .run_restarts(3, |i| {
                built.push(i);
                Ok(Scripted::new(vec![0.0, finals[i]]))
            })
            .unwrap();
        assert_eq!(built, vec![0, 1, 2]);
        assert_eq!(result.best.fitness, 9.0);
        assert!(driver
            .run_restarts(0, |_| Ok(Scripted::new(vec![0.0])))
            .is_err());
    }

    #[test]
    fn test_runs_boxed_trainers() {
        let driver = Driver::new(DriverConfig::iterations(2)).unwrap();
        let mut boxed: Box<dyn Trainer> = Box::new(Scripted::new(vec![1.0, 2.0]));
        assert_eq!(driver.run(&mut boxed).unwrap().best.fitness, 2.0);
        assert_eq!(driver.run(boxed.as_mut()).unwrap().steps, 2);
    }
}
