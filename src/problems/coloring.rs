//! Graph k-coloring.

use crate::candidate::{Candidate, Objective};
use crate::error::{OptError, Result};
use crate::problem::EvaluationFunction;

/// Graph k-coloring: position `v` is the color (`0..k`) of vertex `v`.
///
/// Fitness is the number of edges whose endpoints share a color, to be
/// minimized. [`feasible`](EvaluationFunction::feasible) reports whether a
/// coloring is conflict-free.
#[derive(Debug, Clone)]
pub struct KColoring {
    vertices: usize,
    edges: Vec<(usize, usize)>,
    k: usize,
}

impl KColoring {
    pub fn new(vertices: usize, edges: Vec<(usize, usize)>, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(OptError::config("k must be at least 1"));
        }
        if let Some(&(a, b)) = edges.iter().find(|&&(a, b)| a >= vertices || b >= vertices) {
            return Err(OptError::config(format!(
                "edge ({a}, {b}) references a vertex outside 0..{vertices}"
            )));
        }
        Ok(Self { vertices, edges, k })
    }

    /// The Petersen graph: 10 vertices, 15 edges, chromatic number 3.
    pub fn petersen(k: usize) -> Result<Self> {
        let mut edges = Vec::with_capacity(15);
        for i in 0..5 {
            edges.push((i, (i + 1) % 5));
            edges.push((i, i + 5));
            edges.push((i + 5, (i + 2) % 5 + 5));
        }
        Self::new(10, edges, k)
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// `k` colors for every vertex.
    pub fn ranges(&self) -> Vec<usize> {
        vec![self.k; self.vertices]
    }

    /// Number of monochromatic edges.
    pub fn conflicts(&self, candidate: &Candidate) -> Result<usize> {
        if candidate.len() != self.vertices {
            return Err(OptError::LengthMismatch {
                expected: self.vertices,
                actual: candidate.len(),
            });
        }
        Ok(self
            .edges
            .iter()
            .filter(|&&(a, b)| candidate.discrete(a) == candidate.discrete(b))
            .count())
    }
}

impl EvaluationFunction for KColoring {
    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        Ok(self.conflicts(candidate)? as f64)
    }

    fn feasible(&self, candidate: &Candidate) -> Option<bool> {
        self.conflicts(candidate).ok().map(|c| c == 0)
    }
}
