//! Chow-Liu dependency tree over discrete variables.
//!
//! Fitting builds the maximum-mutual-information spanning tree over the
//! variables (Prim's algorithm rooted at variable 0), then estimates each
//! variable's distribution conditioned on its parent with additive
//! smoothing:
//!
//! ```text
//! P(x_j = b | x_parent = a) = (count(a, b) + m / k_j) / (count(a) + m)
//! ```
//!
//! where `k_j` is the range of variable `j` and `m` the smoothing weight.
//!
//! # References
//!
//! Chow & Liu (1968), "Approximating Discrete Probability Distributions
//! with Dependence Trees"

use crate::candidate::Candidate;
use crate::error::{OptError, Result};
use crate::problem::{Distribution, DistributionEstimator};
use crate::random::OptRng;
use rand::Rng;

/// A tree-structured discrete distribution.
///
/// Before the first [`estimate`](DistributionEstimator::estimate) every
/// variable is independent and uniform.
#[derive(Debug, Clone)]
pub struct DependencyTree {
    ranges: Vec<usize>,
    smoothing: f64,
    /// `parents[j]` is `None` for the root (and for every variable before
    /// the first fit).
    parents: Vec<Option<usize>>,
    /// Variables in an order where every parent precedes its children.
    order: Vec<usize>,
    /// `tables[j][a][b]`: probability of `x_j = b` given parent value `a`.
    /// Roots have a single row.
    tables: Vec<Vec<Vec<f64>>>,
}

impl DependencyTree {
    /// Creates a tree over variables with the given ranges.
    pub fn new(ranges: Vec<usize>, smoothing: f64) -> Result<Self> {
        if ranges.is_empty() {
            return Err(OptError::config("dependency tree needs at least one variable"));
        }
        if ranges.contains(&0) {
            return Err(OptError::config("variable ranges must be positive"));
        }
        if !(smoothing.is_finite() && smoothing >= 0.0) {
            return Err(OptError::config(format!(
                "smoothing must be finite and non-negative, got {smoothing}"
            )));
        }
        let tables = ranges
            .iter()
            .map(|&k| vec![vec![1.0 / k as f64; k]])
            .collect();
        Ok(Self {
            parents: vec![None; ranges.len()],
            order: (0..ranges.len()).collect(),
            tables,
            ranges,
            smoothing,
        })
    }

    /// Parent of every variable in the fitted tree.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Probability of `candidate` under the model.
    pub fn probability(&self, candidate: &Candidate) -> f64 {
        self.order
            .iter()
            .map(|&j| self.row(j, candidate)[candidate.discrete(j)])
            .product()
    }

    /// Walks the tree from the root choosing each variable's most likely
    /// value given its parent's choice.
    pub fn mode(&self) -> Candidate {
        let mut values = vec![0.0; self.ranges.len()];
        for &j in &self.order {
            let row = self.row_for(j, &values);
            values[j] = argmax(row) as f64;
        }
        Candidate::new(values)
    }

    fn row(&self, j: usize, candidate: &Candidate) -> &[f64] {
        match self.parents[j] {
            Some(p) => &self.tables[j][candidate.discrete(p)],
            None => &self.tables[j][0],
        }
    }

    fn row_for(&self, j: usize, values: &[f64]) -> &[f64] {
        match self.parents[j] {
            Some(p) => &self.tables[j][values[p] as usize],
            None => &self.tables[j][0],
        }
    }

    fn check(&self, samples: &[Candidate]) -> Result<()> {
        if samples.is_empty() {
            return Err(OptError::EmptySample);
        }
        for s in samples {
            if s.len() != self.ranges.len() {
                return Err(OptError::LengthMismatch {
                    expected: self.ranges.len(),
                    actual: s.len(),
                });
            }
            for (i, v) in s.discrete_iter().enumerate() {
                if v >= self.ranges[i] {
                    return Err(OptError::DataSet(format!(
                        "value {v} at position {i} is outside 0..{}",
                        self.ranges[i]
                    )));
                }
            }
        }
        Ok(())
    }

    fn mutual_information(&self, data: &[Vec<usize>], i: usize, j: usize) -> f64 {
        let (ki, kj) = (self.ranges[i], self.ranges[j]);
        let n = data.len() as f64;
        let mut joint = vec![0.0; ki * kj];
        let mut pi = vec![0.0; ki];
        let mut pj = vec![0.0; kj];
        for row in data {
            joint[row[i] * kj + row[j]] += 1.0;
            pi[row[i]] += 1.0;
            pj[row[j]] += 1.0;
        }

        let mut mi = 0.0;
        for a in 0..ki {
            for b in 0..kj {
                let c = joint[a * kj + b];
                if c > 0.0 {
                    mi += c / n * (c * n / (pi[a] * pj[b])).ln();
                }
            }
        }
        mi
    }

    /// Maximum spanning tree by Prim's algorithm, rooted at variable 0.
    fn span(&self, data: &[Vec<usize>]) -> (Vec<Option<usize>>, Vec<usize>) {
        let d = self.ranges.len();
        let mut parents = vec![None; d];
        let mut order = Vec::with_capacity(d);
        let mut in_tree = vec![false; d];
        let mut weight = vec![f64::NEG_INFINITY; d];
        let mut link = vec![0usize; d];

        in_tree[0] = true;
        order.push(0);
        for j in 1..d {
            weight[j] = self.mutual_information(data, 0, j);
        }

        for _ in 1..d {
            let mut next = None;
            for j in 0..d {
                if !in_tree[j] && next.map_or(true, |n: usize| weight[j] > weight[n]) {
                    next = Some(j);
                }
            }
            let Some(j) = next else { break };
            in_tree[j] = true;
            parents[j] = Some(link[j]);
            order.push(j);
            for k in 0..d {
                if !in_tree[k] {
                    let w = self.mutual_information(data, j, k);
                    if w > weight[k] {
                        weight[k] = w;
                        link[k] = j;
                    }
                }
            }
        }
        (parents, order)
    }

    fn conditional_table(&self, data: &[Vec<usize>], j: usize, parent: Option<usize>) -> Vec<Vec<f64>> {
        let kj = self.ranges[j];
        let rows = parent.map_or(1, |p| self.ranges[p]);
        let mut counts = vec![vec![0.0; kj]; rows];
        let mut totals = vec![0.0; rows];
        for row in data {
            let a = parent.map_or(0, |p| row[p]);
            counts[a][row[j]] += 1.0;
            totals[a] += 1.0;
        }

        let m = self.smoothing;
        counts
            .into_iter()
            .zip(totals)
            .map(|(row, total)| {
                if total + m > 0.0 {
                    row.into_iter()
                        .map(|c| (c + m / kj as f64) / (total + m))
                        .collect()
                } else {
                    // Parent value never observed and no smoothing.
                    vec![1.0 / kj as f64; kj]
                }
            })
            .collect()
    }
}

fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (i, &p) in row.iter().enumerate().skip(1) {
        if p > row[best] {
            best = i;
        }
    }
    best
}

fn sample_index(row: &[f64], rng: &mut OptRng) -> usize {
    let u: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in row.iter().enumerate() {
        cumulative += p;
        if u < cumulative {
            return i;
        }
    }
    row.len() - 1
}

impl Distribution for DependencyTree {
    fn sample(&self, rng: &mut OptRng) -> Candidate {
        let mut values = vec![0.0; self.ranges.len()];
        for &j in &self.order {
            let v = sample_index(self.row_for(j, &values), rng);
            values[j] = v as f64;
        }
        Candidate::new(values)
    }
}

impl DistributionEstimator for DependencyTree {
    fn estimate(&mut self, samples: &[Candidate]) -> Result<()> {
        self.check(samples)?;
        let data: Vec<Vec<usize>> = samples
            .iter()
            .map(|s| s.discrete_iter().collect())
            .collect();

        let (parents, order) = self.span(&data);
        let tables = (0..self.ranges.len())
            .map(|j| self.conditional_table(&data, j, parents[j]))
            .collect();

        self.parents = parents;
        self.order = order;
        self.tables = tables;
        Ok(())
    }
}
