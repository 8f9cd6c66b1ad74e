//! Standard genetic algorithm.
//!
//! Population-based search over an
//! [`EvolutionaryProblem`](crate::problem::EvolutionaryProblem): every
//! generation keeps some survivors, breeds `to_mate` children by crossover
//! and mutates `to_mutate` members, holding the population size constant.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, mate/mutate counts, selection and
//!   survivor policies
//! - [`StandardGeneticAlgorithm`]: the generation-stepping trainer
//! - [`Selection`]: roulette, top-k, tournament and rank selection
//!
//! Crossover and mutation operators live in [`crate::operators`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod runner;
mod selection;

pub use config::{GaConfig, Survivors};
pub use runner::StandardGeneticAlgorithm;
pub use selection::Selection;
