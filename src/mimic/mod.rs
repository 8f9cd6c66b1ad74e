//! MIMIC: Mutual-Information-Maximizing Input Clustering.
//!
//! Population-based search that, every generation, keeps the fittest
//! subset of the population, fits a probabilistic model to it and samples
//! a fresh population from the model. With a
//! [`DependencyTree`](crate::dist::DependencyTree) estimator the model
//! captures pairwise structure between variables.
//!
//! # References
//!
//! - De Bonet, Isbell & Viola (1997), "MIMIC: Finding Optima by Estimating
//!   Probability Densities"
//! - Chow & Liu (1968), "Approximating Discrete Probability Distributions
//!   with Dependence Trees"

mod config;
mod runner;

pub use config::{MimicConfig, Retain};
pub use runner::Mimic;
