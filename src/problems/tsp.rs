//! Traveling salesman over points in the plane.

use crate::candidate::{Candidate, Objective};
use crate::error::{OptError, Result};
use crate::problem::{CrossoverFunction, EvaluationFunction};
use crate::random::OptRng;
use rand::Rng;

/// Closed tour through every point: a candidate is a permutation of
/// `0..n` giving the visiting order. Fitness is `1 / tour length`,
/// maximized.
#[derive(Debug, Clone)]
pub struct TravelingSalesmanRoute {
    points: Vec<(f64, f64)>,
}

impl TravelingSalesmanRoute {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Euclidean distance between points `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        let (a, b) = (self.points[i], self.points[j]);
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    /// Length of the closed tour.
    pub fn tour_length(&self, route: &Candidate) -> Result<f64> {
        let n = self.points.len();
        if route.len() != n {
            return Err(OptError::LengthMismatch {
                expected: n,
                actual: route.len(),
            });
        }
        if let Some(v) = route.discrete_iter().find(|&v| v >= n) {
            return Err(OptError::Evaluation(format!(
                "route visits point {v}, but only {n} exist"
            )));
        }
        let stops: Vec<usize> = route.discrete_iter().collect();
        Ok((0..n)
            .map(|i| self.distance(stops[i], stops[(i + 1) % n]))
            .sum())
    }
}

impl EvaluationFunction for TravelingSalesmanRoute {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        Ok(1.0 / self.tour_length(candidate)?)
    }
}

/// Greedy edge recombination for tours.
///
/// Starts at a random city and repeatedly moves to whichever parent's
/// successor of the current city is unvisited, preferring the nearer one;
/// when both successors are taken it jumps to a random unvisited city.
/// The child is always a valid permutation.
///
/// # Panics
/// Panics if parents have different lengths or are not permutations of
/// `0..n`.
#[derive(Debug, Clone)]
pub struct TravelingSalesmanCrossover {
    route: TravelingSalesmanRoute,
}

impl TravelingSalesmanCrossover {
    pub fn new(route: &TravelingSalesmanRoute) -> Self {
        Self {
            route: route.clone(),
        }
    }
}

fn successors(tour: &[usize]) -> Vec<usize> {
    let n = tour.len();
    let mut next = vec![0; n];
    for i in 0..n {
        next[tour[i]] = tour[(i + 1) % n];
    }
    next
}

impl CrossoverFunction for TravelingSalesmanCrossover {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        let ta: Vec<usize> = a.discrete_iter().collect();
        let tb: Vec<usize> = b.discrete_iter().collect();
        let n = ta.len();
        assert_eq!(n, tb.len(), "parents must have equal length");
        if n == 0 {
            return a.clone();
        }
        let (next_a, next_b) = (successors(&ta), successors(&tb));

        let mut visited = vec![false; n];
        let mut child = Vec::with_capacity(n);
        let mut cur = rng.random_range(0..n);
        visited[cur] = true;
        child.push(cur);

        while child.len() < n {
            let (na, nb) = (next_a[cur], next_b[cur]);
            cur = match (visited[na], visited[nb]) {
                (false, true) => na,
                (true, false) => nb,
                (false, false) => {
                    if self.route.distance(cur, na) < self.route.distance(cur, nb) {
                        na
                    } else {
                        nb
                    }
                }
                (true, true) => {
                    let unvisited: Vec<usize> = (0..n).filter(|&v| !visited[v]).collect();
                    unvisited[rng.random_range(0..unvisited.len())]
                }
            };
            visited[cur] = true;
            child.push(cur);
        }
        Candidate::from_discrete(child)
    }
}
