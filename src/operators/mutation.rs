//! Mutation functions for the genetic algorithm.

use super::{add_one, change_one, swap_two};
use crate::candidate::Candidate;
use crate::dist::validate_ranges;
use crate::error::Result;
use crate::problem::MutationFunction;
use crate::random::OptRng;

/// Redraws one position uniformly from its range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteChangeOneMutation {
    ranges: Vec<usize>,
}

impl DiscreteChangeOneMutation {
    /// Returns [`OptError::InvalidConfig`](crate::OptError::InvalidConfig)
    /// if `ranges` is empty or holds a zero.
    pub fn new(ranges: Vec<usize>) -> Result<Self> {
        validate_ranges(&ranges)?;
        Ok(Self { ranges })
    }

    /// Bit-flip-or-keep mutation for binary strings of length `n`.
    pub fn binary(n: usize) -> Self {
        Self {
            ranges: vec![2; n],
        }
    }
}

impl MutationFunction for DiscreteChangeOneMutation {
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        change_one(candidate, &self.ranges, rng)
    }
}

/// Exchanges two random positions. Keeps permutations valid.
///
/// # Complexity
/// O(n) for the copy, O(1) for the move
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapMutation;

impl MutationFunction for SwapMutation {
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        swap_two(candidate, rng)
    }
}

/// Adds a uniform offset in `[-amount/2, amount/2)` to one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousAddOneMutation {
    amount: f64,
}

impl ContinuousAddOneMutation {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl Default for ContinuousAddOneMutation {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl MutationFunction for ContinuousAddOneMutation {
    fn mutate(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        add_one(candidate, self.amount, rng)
    }
}
