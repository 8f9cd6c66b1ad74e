//! Crossover functions.
//!
//! Positional crossovers ([`SingleCrossover`], [`TwoPointCrossover`],
//! [`UniformCrossover`]) suit bit strings and real vectors. The
//! permutation crossovers ([`OrderCrossover`], [`PartiallyMappedCrossover`])
//! always produce a valid permutation of `0..n` from two valid parents.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use crate::candidate::Candidate;
use crate::problem::CrossoverFunction;
use crate::random::OptRng;
use rand::Rng;

fn assert_same_len(a: &Candidate, b: &Candidate) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
}

/// Child takes `b` before a random cut point and `a` from it on.
///
/// # Panics
/// Panics if parents have different lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleCrossover;

impl CrossoverFunction for SingleCrossover {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        assert_same_len(a, b);
        let point = rng.random_range(0..=a.len());
        Candidate::new(
            (0..a.len())
                .map(|i| if i >= point { a.get(i) } else { b.get(i) })
                .collect(),
        )
    }
}

/// Child takes `a` inside a random segment `[first, second)` and `b`
/// outside it.
///
/// # Panics
/// Panics if parents have different lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl CrossoverFunction for TwoPointCrossover {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        assert_same_len(a, b);
        let n = a.len();
        let first = rng.random_range(0..=n);
        let second = rng.random_range(first..=n);
        Candidate::new(
            (0..n)
                .map(|i| if (first..second).contains(&i) { a.get(i) } else { b.get(i) })
                .collect(),
        )
    }
}

/// Each position comes from either parent with equal probability.
///
/// # Panics
/// Panics if parents have different lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl CrossoverFunction for UniformCrossover {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        assert_same_len(a, b);
        Candidate::new(
            (0..a.len())
                .map(|i| if rng.random::<bool>() { a.get(i) } else { b.get(i) })
                .collect(),
        )
    }
}

/// Order Crossover (OX) for permutations.
///
/// Preserves the **relative order** of elements from both parents.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]` from `a`
/// 2. Copy segment to child at the same positions
/// 3. Fill remaining positions with elements from `b`, in their original
///    order starting after the segment, skipping elements already present
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are not permutations of
/// `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderCrossover;

impl CrossoverFunction for OrderCrossover {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        assert_same_len(a, b);
        if a.len() < 2 {
            return a.clone();
        }
        let (template, donor) = (as_perm(a), as_perm(b));
        let (start, end) = random_segment(template.len(), rng);
        Candidate::from_discrete(ox_build_child(&template, &donor, start, end))
    }
}

/// Build one OX child: copy segment from `template`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // Fill from donor, starting after segment end, wrapping around.
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = donor[(end + 1 + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Partially Mapped Crossover (PMX) for permutations.
///
/// Preserves the **absolute position** of elements from both parents
/// as much as possible.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Select a random segment `[start, end]` from `a`
/// 2. Copy segment to child at the same positions
/// 3. For each element in `b`'s segment that isn't in the child yet,
///    follow the mapping chain to a free position and place it there
/// 4. Fill remaining positions from `b`
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are not permutations of
/// `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartiallyMappedCrossover;

impl CrossoverFunction for PartiallyMappedCrossover {
    fn mate(&self, a: &Candidate, b: &Candidate, rng: &mut OptRng) -> Candidate {
        assert_same_len(a, b);
        if a.len() < 2 {
            return a.clone();
        }
        let (template, donor) = (as_perm(a), as_perm(b));
        let (start, end) = random_segment(template.len(), rng);
        Candidate::from_discrete(pmx_build_child(&template, &donor, start, end))
    }
}

/// Build one PMX child: copy segment from `template`, map from `donor`.
fn pmx_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let sentinel = usize::MAX;
    let mut child = vec![sentinel; n];
    let mut placed = vec![false; n];
    let mut donor_pos = vec![0usize; n];
    for (i, &v) in donor.iter().enumerate() {
        donor_pos[v] = i;
    }

    for i in start..=end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    for i in start..=end {
        let donor_val = donor[i];
        if placed[donor_val] {
            continue;
        }
        let mut pos = i;
        loop {
            let target = donor_pos[template[pos]];
            if target < start || target > end {
                child[target] = donor_val;
                placed[donor_val] = true;
                break;
            }
            pos = target;
        }
    }

    for i in 0..n {
        if child[i] == sentinel {
            child[i] = donor[i];
        }
    }

    child
}

fn as_perm(c: &Candidate) -> Vec<usize> {
    let perm: Vec<usize> = c.discrete_iter().collect();
    let mut seen = vec![false; perm.len()];
    for &v in &perm {
        assert!(v < perm.len() && !seen[v], "parent is not a permutation: {c}");
        seen[v] = true;
    }
    perm
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment(n: usize, rng: &mut OptRng) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
