//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover, and under [`Survivors::Sampled`](super::Survivors::Sampled)
//! which individuals carry over unchanged. Different strategies provide
//! different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::candidate::{Objective, Scored};
use crate::random::OptRng;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// Every strategy respects the problem's [`Objective`], so the same policy
/// works for maximization and minimization.
///
/// # Examples
///
/// ```
/// use u_randopt::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Uniform among the 10 best
/// let sel = Selection::TopK(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Fitness is oriented so larger is better and shifted so the worst
    /// member gets a small positive weight.
    ///
    /// **Warning**: Susceptible to super-individual dominance when
    /// fitness variance is high.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Uniform choice among the `k` best individuals.
    ///
    /// # Complexity
    /// O(n log n) per selection (sort)
    TopK(usize),

    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Rank-based selection.
    ///
    /// Selection probability is proportional to rank position, not raw
    /// fitness, which avoids the scaling problems of roulette selection.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection (sort)
    Rank,
}

impl Selection {
    /// Select an index from a non-empty population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select(&self, population: &[Scored], objective: Objective, rng: &mut OptRng) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match *self {
            Selection::Roulette => roulette(population, objective, rng),
            Selection::TopK(k) => top_k(population, objective, k, rng),
            Selection::Tournament(k) => tournament(population, objective, k, rng),
            Selection::Rank => rank(population, objective, rng),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match *self {
            Selection::TopK(0) => Err("top-k selection needs k >= 1".into()),
            Selection::Tournament(0) => Err("tournament size must be at least 1".into()),
            _ => Ok(()),
        }
    }
}

/// Indices sorted best-first. Stable, so ties keep population order.
fn ranked(population: &[Scored], objective: Objective) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| objective.cmp_best_first(population[a].fitness, population[b].fitness));
    order
}

fn roulette(population: &[Scored], objective: Objective, rng: &mut OptRng) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let oriented: Vec<f64> = population
        .iter()
        .map(|s| objective.orient(s.fitness))
        .collect();
    let min = oriented.iter().cloned().fold(f64::INFINITY, f64::min);

    let epsilon = 1e-10;
    let weights: Vec<f64> = oriented.iter().map(|&f| f - min + epsilon).collect();

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

fn top_k(population: &[Scored], objective: Objective, k: usize, rng: &mut OptRng) -> usize {
    let k = k.clamp(1, population.len());
    let order = ranked(population, objective);
    order[rng.random_range(0..k)]
}

fn tournament(population: &[Scored], objective: Objective, k: usize, rng: &mut OptRng) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if objective.is_better(population[idx].fitness, population[best_idx].fitness) {
            best_idx = idx;
        }
    }
    best_idx
}

/// Linear ranking: the best of `n` gets weight `n`, the worst weight 1.
fn rank(population: &[Scored], objective: Objective, rng: &mut OptRng) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let order = ranked(population, objective);
    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Scored> {
        fitnesses
            .iter()
            .map(|&f| Scored::new(Candidate::new(vec![f]), f))
            .collect()
    }

    fn counts(sel: Selection, pop: &[Scored], objective: Objective) -> [u32; 4] {
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[sel.select(pop, objective, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let c = counts(Selection::Tournament(4), &pop, Objective::Maximize);
        assert!(c[0] > 6000, "expected best >60%, got {c:?}");

        let c = counts(Selection::Tournament(4), &pop, Objective::Minimize);
        assert!(c[2] > 6000, "expected best >60%, got {c:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let c = counts(Selection::Tournament(1), &pop, Objective::Maximize);
        for &x in &c {
            assert!(x > 1500, "expected uniform, got counts: {c:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let c = counts(Selection::Roulette, &pop, Objective::Maximize);
        assert!(c[0] > c[1] && c[1] > c[2], "got {c:?}");
        // The worst member keeps only the epsilon weight.
        assert!(c[2] < 10, "got {c:?}");

        let c = counts(Selection::Roulette, &pop, Objective::Minimize);
        assert!(c[2] > c[0], "got {c:?}");
    }

    #[test]
    fn test_top_k_only_picks_top() {
        let pop = make_population(&[3.0, 9.0, 1.0, 7.0]);
        let c = counts(Selection::TopK(2), &pop, Objective::Maximize);
        assert_eq!(c[0], 0);
        assert_eq!(c[2], 0);
        assert!(c[1] > 4000 && c[3] > 4000, "got {c:?}");
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let c = counts(Selection::Rank, &pop, Objective::Minimize);
        assert!(c[2] > c[0], "best={}, worst={}", c[2], c[0]);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        for sel in [
            Selection::Tournament(3),
            Selection::Roulette,
            Selection::Rank,
            Selection::TopK(5),
        ] {
            assert_eq!(sel.select(&pop, Objective::Maximize, &mut rng), 0);
        }
    }

    #[test]
    fn test_equal_fitness_roulette_is_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let c = counts(Selection::Roulette, &pop, Objective::Maximize);
        for &x in &c {
            assert!(x > 1500, "expected roughly uniform, got {c:?}");
        }
    }

    #[test]
    fn test_validate() {
        assert!(Selection::TopK(0).validate().is_err());
        assert!(Selection::Tournament(0).validate().is_err());
        assert!(Selection::Rank.validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&[], Objective::Maximize, &mut rng);
    }
}
