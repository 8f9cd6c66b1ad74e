//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control one generation.

use super::selection::Selection;
use crate::error::{OptError, Result};

/// Which members of the old generation fill the slots not taken by
/// children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Survivors {
    /// The best members of the old generation carry over. The slot holding
    /// the previous champion is never mutated, so the generation best
    /// never gets worse.
    #[default]
    Elite,

    /// Survivors are drawn with the configured [`Selection`] policy, with
    /// replacement. Cheaper pressure, no monotonicity guarantee.
    Sampled,
}

/// Configuration for the standard genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_randopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.to_mate, 100);
/// assert_eq!(config.to_mutate, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_randopt::ga::{GaConfig, Selection, Survivors};
///
/// let config = GaConfig::new(50, 30, 5)
///     .with_selection(Selection::Tournament(3))
///     .with_survivors(Survivors::Sampled)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of children produced by crossover per generation.
    pub to_mate: usize,

    /// Number of distinct individuals mutated per generation.
    pub to_mutate: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// How the non-child slots are filled.
    pub survivors: Survivors,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self::new(200, 100, 10)
    }
}

impl GaConfig {
    pub fn new(population_size: usize, to_mate: usize, to_mutate: usize) -> Self {
        Self {
            population_size,
            to_mate,
            to_mutate,
            selection: Selection::default(),
            survivors: Survivors::default(),
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets how many children crossover produces per generation.
    pub fn with_to_mate(mut self, n: usize) -> Self {
        self.to_mate = n;
        self
    }

    /// Sets how many individuals are mutated per generation.
    pub fn with_to_mutate(mut self, n: usize) -> Self {
        self.to_mutate = n;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets how the next generation is assembled.
    pub fn with_survivors(mut self, survivors: Survivors) -> Self {
        self.survivors = survivors;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let n = self.population_size;
        if n == 0 {
            return Err(OptError::config("population_size must be at least 1"));
        }
        if self.to_mate + self.to_mutate > n {
            return Err(OptError::config(format!(
                "to_mate + to_mutate ({} + {}) exceeds population_size {n}",
                self.to_mate, self.to_mutate
            )));
        }
        if self.survivors == Survivors::Elite {
            if self.to_mate >= n {
                return Err(OptError::config(
                    "elitist replacement needs to_mate < population_size",
                ));
            }
            if self.to_mutate >= n {
                return Err(OptError::config(
                    "elitist replacement needs to_mutate < population_size",
                ));
            }
        }
        self.selection.validate().map_err(OptError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.selection, Selection::Roulette);
        assert_eq!(config.survivors, Survivors::Elite);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_to_mate(10)
            .with_to_mutate(4)
            .with_selection(Selection::Rank)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.to_mate, 10);
        assert_eq!(config.to_mutate, 4);
        assert_eq!(config.selection, Selection::Rank);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_mate_plus_mutate_exceeds_population() {
        let err = GaConfig::new(10, 8, 3).validate().unwrap_err();
        assert!(matches!(err, OptError::InvalidConfig(_)));
        assert!(GaConfig::new(10, 7, 3).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        assert!(GaConfig::new(0, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_elite_needs_a_survivor() {
        assert!(GaConfig::new(10, 10, 0).validate().is_err());
        assert!(GaConfig::new(10, 0, 10).validate().is_err());
        let sampled = GaConfig::new(10, 10, 0).with_survivors(Survivors::Sampled);
        assert!(sampled.validate().is_ok());
    }

    #[test]
    fn test_validate_selection() {
        let config = GaConfig::default().with_selection(Selection::TopK(0));
        assert!(config.validate().is_err());
    }
}
