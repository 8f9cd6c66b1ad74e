//! Budgeted training loops.
//!
//! A [`Driver`] steps any [`Trainer`](crate::trainer::Trainer) until its
//! budget runs out: a fixed number of steps, a wall-clock limit, or
//! convergence of the per-step fitness. Budgets are checked only between
//! steps; a step in progress always completes.
//!
//! ```
//! use u_randopt::driver::{Driver, DriverConfig};
//! use u_randopt::dist::DiscreteUniform;
//! use u_randopt::operators::FlipOne;
//! use u_randopt::problem::Problem;
//! use u_randopt::problems::CountOnes;
//! use u_randopt::rhc::{RandomizedHillClimbing, RhcConfig};
//!
//! let problem = Problem::new(CountOnes, DiscreteUniform::binary(32)).with_neighbor(FlipOne);
//! let mut rhc = RandomizedHillClimbing::new(problem, &RhcConfig::default().with_seed(1))?;
//!
//! let driver = Driver::new(DriverConfig::iterations(500).with_history())?;
//! let result = driver.run(&mut rhc)?;
//! assert_eq!(result.steps, 500);
//! assert_eq!(result.history.len(), 500);
//! # Ok::<(), u_randopt::OptError>(())
//! ```

mod config;
mod runner;

pub use config::{Budget, Convergence, DriverConfig};
pub use runner::{Driver, DriverResult, StepRecord};
