//! Validated, one-shot experiment descriptions.
//!
//! An [`ExperimentConfig`] names the algorithm with its parameters, the
//! driver budget and the seed, and turns a problem into a finished
//! [`DriverResult`]. [`NetworkExperimentConfig`] does the same for fitting
//! the weights of a [`FeedForwardNetwork`] to a [`DataSet`].
//!
//! ```
//! use u_randopt::dist::{DependencyTree, DiscreteUniform};
//! use u_randopt::driver::DriverConfig;
//! use u_randopt::experiment::{AlgorithmConfig, ExperimentConfig};
//! use u_randopt::operators::{DiscreteChangeOneMutation, FlipOne, SingleCrossover};
//! use u_randopt::problem::Problem;
//! use u_randopt::problems::FourPeaks;
//! use u_randopt::sa::SaConfig;
//!
//! let problem = Problem::new(FourPeaks::new(2), DiscreteUniform::binary(20))
//!     .with_neighbor(FlipOne)
//!     .with_mutation(DiscreteChangeOneMutation::binary(20))
//!     .with_crossover(SingleCrossover);
//!
//! let experiment = ExperimentConfig::new(
//!     AlgorithmConfig::Sa(SaConfig::new(100.0, 0.95)),
//!     DriverConfig::iterations(2000),
//! )
//! .with_seed(3);
//! let result = experiment.run(&problem, None::<DependencyTree>)?;
//! assert_eq!(result.steps, 2000);
//! # Ok::<(), u_randopt::OptError>(())
//! ```

use crate::dist::{ContinuousUniform, DependencyTree};
use crate::driver::{Driver, DriverConfig, DriverResult};
use crate::error::{OptError, Result};
use crate::ga::{GaConfig, StandardGeneticAlgorithm};
use crate::mimic::{Mimic, MimicConfig};
use crate::nn::{accuracy, Activation, DataSet, FeedForwardNetwork, NetworkError};
use crate::operators::{ContinuousAddOne, ContinuousAddOneMutation, UniformCrossover};
use crate::problem::{DistributionEstimator, EvolutionaryProblem, NeighborhoodProblem, Problem};
use crate::rhc::{RandomizedHillClimbing, RhcConfig};
use crate::sa::{SaConfig, SimulatedAnnealing};
use crate::trainer::Trainer;

/// Algorithm choice with its parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmConfig {
    Rhc(RhcConfig),
    Sa(SaConfig),
    Ga(GaConfig),
    Mimic(MimicConfig),
}

impl AlgorithmConfig {
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmConfig::Rhc(_) => "rhc",
            AlgorithmConfig::Sa(_) => "sa",
            AlgorithmConfig::Ga(_) => "ga",
            AlgorithmConfig::Mimic(_) => "mimic",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            AlgorithmConfig::Rhc(c) => c.validate(),
            AlgorithmConfig::Sa(c) => c.validate(),
            AlgorithmConfig::Ga(c) => c.validate(),
            AlgorithmConfig::Mimic(c) => c.validate(),
        }
    }

    /// Copy with the seed replaced, if one is given.
    fn seeded(&self, seed: Option<u64>) -> Self {
        let Some(seed) = seed else {
            return self.clone();
        };
        match self {
            AlgorithmConfig::Rhc(c) => AlgorithmConfig::Rhc(c.clone().with_seed(seed)),
            AlgorithmConfig::Sa(c) => AlgorithmConfig::Sa(c.clone().with_seed(seed)),
            AlgorithmConfig::Ga(c) => AlgorithmConfig::Ga(c.clone().with_seed(seed)),
            AlgorithmConfig::Mimic(c) => AlgorithmConfig::Mimic(c.clone().with_seed(seed)),
        }
    }

    /// Builds the trainer for `problem`.
    ///
    /// MIMIC needs `estimator`; the other algorithms ignore it.
    pub fn trainer<'a, P, D>(&self, problem: P, estimator: Option<D>) -> Result<Box<dyn Trainer + 'a>>
    where
        P: NeighborhoodProblem + EvolutionaryProblem + 'a,
        D: DistributionEstimator + 'a,
    {
        let trainer: Box<dyn Trainer + 'a> = match self {
            AlgorithmConfig::Rhc(c) => Box::new(RandomizedHillClimbing::new(problem, c)?),
            AlgorithmConfig::Sa(c) => Box::new(SimulatedAnnealing::new(problem, c)?),
            AlgorithmConfig::Ga(c) => Box::new(StandardGeneticAlgorithm::new(problem, c)?),
            AlgorithmConfig::Mimic(c) => {
                let estimator = estimator.ok_or_else(|| {
                    OptError::config("mimic requires a distribution estimator")
                })?;
                Box::new(Mimic::new(problem, estimator, c)?)
            }
        };
        Ok(trainer)
    }
}

/// One algorithm, one budget, one seed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    pub algorithm: AlgorithmConfig,
    pub driver: DriverConfig,
    /// Overrides the algorithm's own seed when set.
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    pub fn new(algorithm: AlgorithmConfig, driver: DriverConfig) -> Self {
        Self {
            algorithm,
            driver,
            seed: None,
        }
    }

    /// Sets the seed that overrides the algorithm's own.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.algorithm.validate()?;
        self.driver.validate()?;
        Ok(())
    }

    /// Builds the configured trainer for `problem` and drives it to the end
    /// of the budget.
    pub fn run<P, D>(&self, problem: P, estimator: Option<D>) -> Result<DriverResult>
    where
        P: NeighborhoodProblem + EvolutionaryProblem,
        D: DistributionEstimator,
    {
        self.validate()?;
        let driver = Driver::new(self.driver.clone())?;
        let mut trainer = self.algorithm.seeded(self.seed).trainer(problem, estimator)?;
        tracing::debug!(algorithm = self.algorithm.name(), "experiment starting");
        driver.run(&mut trainer)
    }
}

/// Weight optimization for a feed-forward network.
///
/// Weights start uniform in `[-weight_range, weight_range)`. Neighbors and
/// mutations add a uniform amount in `[-neighbor_step/2, neighbor_step/2)` to
/// one weight; crossover is uniform. MIMIC is not available here because
/// its estimators model discrete values.
///
/// ```
/// use u_randopt::driver::DriverConfig;
/// use u_randopt::experiment::{AlgorithmConfig, NetworkExperimentConfig};
/// use u_randopt::nn::{Activation, DataSet};
/// use u_randopt::rhc::RhcConfig;
///
/// // xor
/// let data = DataSet::from_rows(
///     &[
///         vec![0.0, 0.0, 0.0],
///         vec![0.0, 1.0, 1.0],
///         vec![1.0, 0.0, 1.0],
///         vec![1.0, 1.0, 0.0],
///     ],
///     1,
/// )?;
/// let experiment = NetworkExperimentConfig::new(
///     vec![2, 3, 1],
///     AlgorithmConfig::Rhc(RhcConfig::default()),
///     DriverConfig::iterations(3000),
/// )
/// .with_activation(Activation::Logistic)
/// .with_seed(11);
/// let run = experiment.run(&data)?;
/// assert!(run.accuracy >= 0.0 && run.accuracy <= 1.0);
/// assert_eq!(run.result.best.candidate.len(), run.network.weight_count());
/// # Ok::<(), u_randopt::OptError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkExperimentConfig {
    /// Node counts from input to output.
    pub layers: Vec<usize>,
    pub activation: Activation,
    /// Output layer activation; `None` uses `activation`.
    pub output_activation: Option<Activation>,
    pub algorithm: AlgorithmConfig,
    pub driver: DriverConfig,
    pub neighbor_step: f64,
    pub weight_range: f64,
    pub seed: Option<u64>,
}

/// A finished network experiment.
#[derive(Debug, Clone)]
pub struct NetworkRun {
    pub network: FeedForwardNetwork,
    /// `best.fitness` is the half sum of squared errors of the best weights.
    pub result: DriverResult,
    /// Classification accuracy of the best weights on the training data.
    pub accuracy: f64,
}

impl NetworkExperimentConfig {
    pub fn new(layers: Vec<usize>, algorithm: AlgorithmConfig, driver: DriverConfig) -> Self {
        Self {
            layers,
            activation: Activation::default(),
            output_activation: None,
            algorithm,
            driver,
            neighbor_step: 1.0,
            weight_range: 1.0,
            seed: None,
        }
    }

    /// Sets the hidden-layer activation.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Sets the output-layer activation.
    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = Some(activation);
        self
    }

    /// Sets the width of neighbor and mutation offsets.
    pub fn with_neighbor_step(mut self, step: f64) -> Self {
        self.neighbor_step = step;
        self
    }

    /// Sets the bound of the initial weight draw.
    pub fn with_weight_range(mut self, range: f64) -> Self {
        self.weight_range = range;
        self
    }

    /// Sets the seed that overrides the algorithm's own.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn network(&self) -> Result<FeedForwardNetwork> {
        let network = FeedForwardNetwork::new(self.layers.clone(), self.activation)?;
        Ok(match self.output_activation {
            Some(output) => network.with_output_activation(output),
            None => network,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.network()?;
        if !(self.neighbor_step.is_finite() && self.neighbor_step > 0.0) {
            return Err(OptError::config(format!(
                "neighbor_step must be finite and > 0, got {}",
                self.neighbor_step
            )));
        }
        if !(self.weight_range.is_finite() && self.weight_range > 0.0) {
            return Err(OptError::config(format!(
                "weight_range must be finite and > 0, got {}",
                self.weight_range
            )));
        }
        if let AlgorithmConfig::Mimic(_) = self.algorithm {
            return Err(OptError::config(
                "mimic cannot optimize continuous network weights",
            ));
        }
        self.algorithm.validate()?;
        self.driver.validate()?;
        Ok(())
    }

    /// Fits the network to `data` and reports the best weights found.
    pub fn run(&self, data: &DataSet) -> Result<NetworkRun> {
        self.validate()?;
        let network = self.network()?;
        let weights =
            ContinuousUniform::new(network.weight_count(), -self.weight_range, self.weight_range)?;
        let problem = Problem::new(NetworkError::new(network.clone(), data.clone())?, weights)
            .with_neighbor(ContinuousAddOne::new(self.neighbor_step))
            .with_mutation(ContinuousAddOneMutation::new(self.neighbor_step))
            .with_crossover(UniformCrossover);

        let experiment = ExperimentConfig {
            algorithm: self.algorithm.clone(),
            driver: self.driver.clone(),
            seed: self.seed,
        };
        let result = experiment.run(problem, None::<DependencyTree>)?;
        let accuracy = accuracy(&network, &result.best.candidate, data)?;
        tracing::info!(
            algorithm = self.algorithm.name(),
            error = result.best.fitness,
            accuracy,
            "network experiment finished"
        );
        Ok(NetworkRun {
            network,
            result,
            accuracy,
        })
    }
}
