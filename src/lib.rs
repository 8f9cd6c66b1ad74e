//! Randomized optimization harness.
//!
//! Four trainers share one stepping interface ([`Trainer`]):
//!
//! - **Randomized Hill Climbing (RHC)**: moves to any neighbor that is not
//!   worse than the current candidate.
//! - **Simulated Annealing (SA)**: accepts worse neighbors with the
//!   Metropolis probability under a decaying temperature.
//! - **Genetic Algorithm (GA)**: selection, crossover and mutation over a
//!   fixed-size population, elitist by default.
//! - **MIMIC**: refits a probability model (a dependency tree) to the
//!   fittest part of the population and samples the next one from it.
//!
//! Problems are assembled from small capabilities rather than class
//! hierarchies: an [`EvaluationFunction`](problem::EvaluationFunction)
//! scores candidates, a [`Distribution`](problem::Distribution) draws
//! starting points, and neighbor, mutation and crossover functions supply
//! the moves each trainer needs. Closures work for all of them.
//!
//! A [`Driver`](driver::Driver) steps a trainer under an iteration,
//! wall-clock or convergence budget and collects the per-step fitness.
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. Each trainer owns one
//! seedable [`OptRng`](random::OptRng), so a fixed seed replays a run
//! exactly. Concrete problems ([`problems`]), operators ([`operators`]),
//! distributions ([`dist`]) and neural-network weight fitting ([`nn`])
//! are provided for experiments; none of the trainers depend on them.
//!
//! ```
//! use u_randopt::dist::DiscreteUniform;
//! use u_randopt::driver::{Driver, DriverConfig};
//! use u_randopt::operators::FlipOne;
//! use u_randopt::problem::Problem;
//! use u_randopt::problems::CountOnes;
//! use u_randopt::rhc::{RandomizedHillClimbing, RhcConfig};
//!
//! let problem = Problem::new(CountOnes, DiscreteUniform::binary(16)).with_neighbor(FlipOne);
//! let mut rhc = RandomizedHillClimbing::new(problem, &RhcConfig::default().with_seed(42))?;
//! let result = Driver::new(DriverConfig::iterations(400))?.run(&mut rhc)?;
//! assert_eq!(result.best.fitness, 16.0);
//! # Ok::<(), u_randopt::OptError>(())
//! ```

pub mod candidate;
pub mod dist;
pub mod driver;
pub mod error;
pub mod experiment;
pub mod ga;
pub mod mimic;
pub mod nn;
pub mod operators;
pub mod problem;
pub mod problems;
pub mod random;
pub mod rhc;
pub mod sa;
pub mod trainer;

pub use candidate::{Candidate, Objective, Scored};
pub use error::{OptError, Result};
pub use trainer::{Phase, Trainer};
