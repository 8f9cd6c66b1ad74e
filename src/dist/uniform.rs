//! Fixed (non-estimating) distributions.

use crate::candidate::Candidate;
use crate::error::{OptError, Result};
use crate::problem::Distribution;
use crate::random::OptRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Each position `i` is drawn independently and uniformly from
/// `0..ranges[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteUniform {
    ranges: Vec<usize>,
}

/// Rejects an empty range list or a zero range at any position.
pub(crate) fn validate_ranges(ranges: &[usize]) -> Result<()> {
    if ranges.is_empty() {
        return Err(OptError::config("ranges must not be empty"));
    }
    if let Some(i) = ranges.iter().position(|&r| r == 0) {
        return Err(OptError::config(format!("range at position {i} is zero")));
    }
    Ok(())
}

impl DiscreteUniform {
    /// Returns [`OptError::InvalidConfig`] if `ranges` is empty or holds a
    /// zero.
    pub fn new(ranges: Vec<usize>) -> Result<Self> {
        validate_ranges(&ranges)?;
        Ok(Self { ranges })
    }

    /// Uniform bit strings of length `n`.
    pub fn binary(n: usize) -> Self {
        Self {
            ranges: vec![2; n],
        }
    }

    pub fn ranges(&self) -> &[usize] {
        &self.ranges
    }
}

impl Distribution for DiscreteUniform {
    fn sample(&self, rng: &mut OptRng) -> Candidate {
        Candidate::from_discrete(self.ranges.iter().map(|&r| rng.random_range(0..r)))
    }
}

/// Uniformly random orderings of `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscretePermutation {
    n: usize,
}

impl DiscretePermutation {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Distribution for DiscretePermutation {
    fn sample(&self, rng: &mut OptRng) -> Candidate {
        let mut perm: Vec<usize> = (0..self.n).collect();
        perm.shuffle(rng);
        Candidate::from_discrete(perm)
    }
}

/// `len` independent reals, each uniform in `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousUniform {
    len: usize,
    low: f64,
    high: f64,
}

impl ContinuousUniform {
    pub fn new(len: usize, low: f64, high: f64) -> Result<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(OptError::config(format!(
                "continuous range must satisfy low < high, got [{low}, {high})"
            )));
        }
        Ok(Self { len, low, high })
    }
}

impl Distribution for ContinuousUniform {
    fn sample(&self, rng: &mut OptRng) -> Candidate {
        Candidate::new(
            (0..self.len)
                .map(|_| rng.random_range(self.low..self.high))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_discrete_uniform_within_ranges() {
        let dist = DiscreteUniform::new(vec![2, 3, 5]).unwrap();
        let mut rng = create_rng(42);
        let mut seen = [[false; 5]; 3];
        for _ in 0..500 {
            let c = dist.sample(&mut rng);
            assert_eq!(c.len(), 3);
            for (i, v) in c.discrete_iter().enumerate() {
                assert!(v < dist.ranges()[i]);
                seen[i][v] = true;
            }
        }
        assert!(seen[2].iter().all(|&s| s));
    }

    #[test]
    fn test_discrete_uniform_rejects_bad_ranges() {
        assert!(matches!(
            DiscreteUniform::new(vec![2, 0]),
            Err(OptError::InvalidConfig(_))
        ));
        assert!(DiscreteUniform::new(vec![]).is_err());
        assert_eq!(DiscreteUniform::binary(3).ranges(), &[2, 2, 2]);
    }

    #[test]
    fn test_permutation_is_valid() {
        let dist = DiscretePermutation::new(9);
        let mut rng = create_rng(7);
        for _ in 0..50 {
            let mut v: Vec<usize> = dist.sample(&mut rng).discrete_iter().collect();
            v.sort_unstable();
            assert_eq!(v, (0..9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_continuous_uniform_bounds() {
        let dist = ContinuousUniform::new(4, -1.0, 1.0).unwrap();
        let mut rng = create_rng(3);
        for _ in 0..200 {
            for &x in dist.sample(&mut rng).values() {
                assert!((-1.0..1.0).contains(&x));
            }
        }
    }

    #[test]
    fn test_continuous_uniform_rejects_empty_range() {
        assert!(ContinuousUniform::new(4, 1.0, 1.0).is_err());
        assert!(ContinuousUniform::new(4, 0.0, f64::INFINITY).is_err());
    }
}
