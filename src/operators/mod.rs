//! Variation operators: neighbors, mutations and crossovers.
//!
//! All operators return new candidates; inputs are never modified.
//!
//! # Neighbors (RHC, SA)
//!
//! - [`FlipOne`]: flip one bit of a binary string
//! - [`DiscreteChangeOne`]: redraw one discrete position
//! - [`SwapNeighbor`]: exchange two positions (permutation-safe)
//! - [`ContinuousAddOne`]: nudge one real value
//!
//! # Mutations (GA)
//!
//! - [`DiscreteChangeOneMutation`], [`SwapMutation`], [`ContinuousAddOneMutation`]
//!
//! # Crossovers (GA)
//!
//! - [`SingleCrossover`], [`TwoPointCrossover`], [`UniformCrossover`]
//! - [`OrderCrossover`] (OX) and [`PartiallyMappedCrossover`] (PMX), which
//!   keep permutations valid

mod crossover;
mod mutation;
mod neighbor;

pub use crossover::{
    OrderCrossover, PartiallyMappedCrossover, SingleCrossover, TwoPointCrossover,
    UniformCrossover,
};
pub use mutation::{ContinuousAddOneMutation, DiscreteChangeOneMutation, SwapMutation};
pub use neighbor::{ContinuousAddOne, DiscreteChangeOne, FlipOne, SwapNeighbor};

use crate::candidate::Candidate;
use crate::random::OptRng;
use rand::Rng;

fn change_one(candidate: &Candidate, ranges: &[usize], rng: &mut OptRng) -> Candidate {
    if ranges.is_empty() {
        return candidate.clone();
    }
    let i = rng.random_range(0..ranges.len());
    let v = rng.random_range(0..ranges[i]);
    candidate.with_value(i, v as f64)
}

fn swap_two(candidate: &Candidate, rng: &mut OptRng) -> Candidate {
    let n = candidate.len();
    if n < 2 {
        return candidate.clone();
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    candidate.swapped(i, j)
}

/// Adds a uniform offset in `[-amount/2, amount/2)` to one position.
fn add_one(candidate: &Candidate, amount: f64, rng: &mut OptRng) -> Candidate {
    if candidate.is_empty() {
        return candidate.clone();
    }
    let i = rng.random_range(0..candidate.len());
    let offset = rng.random::<f64>() * amount - amount / 2.0;
    candidate.with_value(i, candidate.get(i) + offset)
}
