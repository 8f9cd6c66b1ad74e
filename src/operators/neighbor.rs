//! Neighbor functions for hill climbing and annealing.

use super::{add_one, change_one, swap_two};
use crate::candidate::Candidate;
use crate::dist::validate_ranges;
use crate::error::Result;
use crate::problem::NeighborFunction;
use crate::random::OptRng;
use rand::Rng;

/// Flips one uniformly chosen bit of a binary candidate.
///
/// Consumes exactly one random draw per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipOne;

impl NeighborFunction for FlipOne {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        if candidate.is_empty() {
            return candidate.clone();
        }
        let i = rng.random_range(0..candidate.len());
        candidate.with_value(i, 1.0 - candidate.discrete(i).min(1) as f64)
    }
}

/// Picks one position and redraws it uniformly from its range. The new
/// value may equal the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteChangeOne {
    ranges: Vec<usize>,
}

impl DiscreteChangeOne {
    /// Returns [`OptError::InvalidConfig`](crate::OptError::InvalidConfig)
    /// if `ranges` is empty or holds a zero.
    pub fn new(ranges: Vec<usize>) -> Result<Self> {
        validate_ranges(&ranges)?;
        Ok(Self { ranges })
    }
}

impl NeighborFunction for DiscreteChangeOne {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        change_one(candidate, &self.ranges, rng)
    }
}

/// Exchanges two uniformly chosen positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapNeighbor;

impl NeighborFunction for SwapNeighbor {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        swap_two(candidate, rng)
    }
}

/// Adds a uniform offset in `[-amount/2, amount/2)` to one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousAddOne {
    amount: f64,
}

impl ContinuousAddOne {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl Default for ContinuousAddOne {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl NeighborFunction for ContinuousAddOne {
    fn neighbor(&self, candidate: &Candidate, rng: &mut OptRng) -> Candidate {
        add_one(candidate, self.amount, rng)
    }
}
