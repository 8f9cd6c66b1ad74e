//! Bit-string benchmark functions. All are maximized.

use crate::candidate::{Candidate, Objective};
use crate::error::Result;
use crate::problem::EvaluationFunction;

fn bits(candidate: &Candidate) -> impl DoubleEndedIterator<Item = bool> + '_ {
    candidate.discrete_iter().map(|v| v == 1)
}

/// Number of ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOnes;

impl EvaluationFunction for CountOnes {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        Ok(bits(candidate).filter(|&b| b).count() as f64)
    }
}

/// Length of the leading run of `lead` followed by the trailing run of
/// `!lead`, scored the four-peaks way.
fn peaks(candidate: &Candidate, lead: bool, t: usize) -> f64 {
    let n = candidate.len();
    let head = bits(candidate).take_while(|&b| b == lead).count();
    let tail = bits(candidate).rev().take_while(|&b| b != lead).count();
    let reward = if head > t && tail > t { n } else { 0 };
    (head.max(tail) + reward) as f64
}

/// Four peaks: the longer of the leading-ones and trailing-zeros runs,
/// plus a bonus of `n` when both exceed `t`.
///
/// Two global optima (`2n - t - 1`) sit next to two wide local optima
/// (`n`) that attract hill climbers.
#[derive(Debug, Clone, Copy)]
pub struct FourPeaks {
    t: usize,
}

impl FourPeaks {
    pub fn new(t: usize) -> Self {
        Self { t }
    }
}

impl EvaluationFunction for FourPeaks {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        Ok(peaks(candidate, true, self.t))
    }
}

/// Six peaks: four peaks scored on the string and on its complement,
/// taking the better of the two.
#[derive(Debug, Clone, Copy)]
pub struct SixPeaks {
    t: usize,
}

impl SixPeaks {
    pub fn new(t: usize) -> Self {
        Self { t }
    }
}

impl EvaluationFunction for SixPeaks {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        Ok(peaks(candidate, true, self.t).max(peaks(candidate, false, self.t)))
    }
}

/// Continuous peaks: the longest run of equal bits anywhere, plus a bonus
/// of `n` when both the longest zero run and the longest one run exceed
/// `t`.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousPeaks {
    t: usize,
}

impl ContinuousPeaks {
    pub fn new(t: usize) -> Self {
        Self { t }
    }
}

fn longest_run(candidate: &Candidate, bit: bool) -> usize {
    let mut best = 0;
    let mut run = 0;
    for b in bits(candidate) {
        if b == bit {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

impl EvaluationFunction for ContinuousPeaks {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        let ones = longest_run(candidate, true);
        let zeros = longest_run(candidate, false);
        let reward = if ones > self.t && zeros > self.t {
            candidate.len()
        } else {
            0
        };
        Ok((ones.max(zeros) + reward) as f64)
    }
}

/// Number of adjacent positions holding different bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipFlop;

impl EvaluationFunction for FlipFlop {
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        let flips = candidate
            .values()
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count();
        Ok(flips as f64)
    }
}
