//! Sampling distributions over candidates.
//!
//! - [`DiscreteUniform`]: independent uniform values per position
//! - [`DiscretePermutation`]: uniformly random permutations of `0..n`
//! - [`ContinuousUniform`]: independent uniform reals in `[low, high)`
//! - [`DependencyTree`]: Chow-Liu tree model refitted by MIMIC

mod dependency_tree;
mod uniform;

pub use dependency_tree::DependencyTree;
pub use uniform::{ContinuousUniform, DiscretePermutation, DiscreteUniform};
pub(crate) use uniform::validate_ranges;
