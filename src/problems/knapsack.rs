//! Bounded knapsack.

use crate::candidate::{Candidate, Objective};
use crate::error::{OptError, Result};
use crate::problem::EvaluationFunction;

/// Bounded knapsack: position `i` holds how many copies of item `i` are
/// packed, from `0` to `copies[i]`.
///
/// A packing under the weight limit scores its total value. An
/// overweight packing scores a tiny positive amount that shrinks as the
/// excess grows, so search still has a gradient back to feasibility.
#[derive(Debug, Clone)]
pub struct Knapsack {
    values: Vec<f64>,
    weights: Vec<f64>,
    max_weight: f64,
    copies: Vec<usize>,
    total_weight: f64,
}

impl Knapsack {
    pub fn new(
        values: Vec<f64>,
        weights: Vec<f64>,
        max_weight: f64,
        copies: Vec<usize>,
    ) -> Result<Self> {
        if values.len() != weights.len() || values.len() != copies.len() {
            return Err(OptError::config(format!(
                "knapsack needs one value, weight and copy count per item, got {}, {} and {}",
                values.len(),
                weights.len(),
                copies.len()
            )));
        }
        if !(max_weight > 0.0) {
            return Err(OptError::config("max_weight must be positive"));
        }
        let total_weight = weights
            .iter()
            .zip(&copies)
            .map(|(w, &c)| w * c as f64)
            .sum();
        Ok(Self {
            values,
            weights,
            max_weight,
            copies,
            total_weight,
        })
    }

    /// Value ranges per position, for
    /// [`DiscreteUniform`](crate::dist::DiscreteUniform) and the
    /// change-one operators.
    pub fn ranges(&self) -> Vec<usize> {
        self.copies.iter().map(|&c| c + 1).collect()
    }

    /// Total weight of a packing.
    pub fn weight(&self, candidate: &Candidate) -> f64 {
        self.weights
            .iter()
            .zip(candidate.values())
            .map(|(w, n)| w * n)
            .sum()
    }
}

impl EvaluationFunction for Knapsack {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        if candidate.len() != self.values.len() {
            return Err(OptError::LengthMismatch {
                expected: self.values.len(),
                actual: candidate.len(),
            });
        }
        let weight = self.weight(candidate);
        if weight < self.max_weight {
            Ok(self
                .values
                .iter()
                .zip(candidate.values())
                .map(|(v, n)| v * n)
                .sum())
        } else {
            Ok(1e-10 * (self.total_weight - weight))
        }
    }

    fn feasible(&self, candidate: &Candidate) -> Option<bool> {
        if candidate.len() != self.weights.len() {
            return None;
        }
        Some(self.weight(candidate) < self.max_weight)
    }
}
