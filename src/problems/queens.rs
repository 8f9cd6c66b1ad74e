//! N-Queens.

use crate::candidate::{Candidate, Objective};
use crate::error::Result;
use crate::problem::EvaluationFunction;

/// N-Queens with one queen per column: position `i` is the row of the
/// queen in column `i`. Fitness is the number of non-attacking pairs,
/// maximized at `n (n - 1) / 2`.
///
/// Usually searched over permutations, which rules out row clashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NQueens;

impl NQueens {
    /// Fitness of a solved board of size `n`.
    pub fn max_fitness(n: usize) -> f64 {
        (n * n.saturating_sub(1) / 2) as f64
    }
}

impl EvaluationFunction for NQueens {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        let rows: Vec<usize> = candidate.discrete_iter().collect();
        let mut safe = 0usize;
        for i in 0..rows.len() {
            for j in i + 1..rows.len() {
                if rows[i] != rows[j] && rows[i].abs_diff(rows[j]) != j - i {
                    safe += 1;
                }
            }
        }
        Ok(safe as f64)
    }

    fn feasible(&self, candidate: &Candidate) -> Option<bool> {
        let f = self.value(candidate).ok()?;
        Some(f == Self::max_fitness(candidate.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board() {
        let c = Candidate::from_discrete([1, 3, 0, 2]);
        assert_eq!(NQueens.value(&c), Ok(6.0));
        assert_eq!(NQueens.feasible(&c), Some(true));
    }

    #[test]
    fn test_diagonal_board() {
        // Every pair shares a diagonal.
        let c = Candidate::from_discrete([0, 1, 2, 3]);
        assert_eq!(NQueens.value(&c), Ok(0.0));
        assert_eq!(NQueens.feasible(&c), Some(false));
    }

    #[test]
    fn test_max_fitness() {
        assert_eq!(NQueens::max_fitness(8), 28.0);
        assert_eq!(NQueens::max_fitness(0), 0.0);
    }
}
