//! MIMIC configuration.

use crate::error::{OptError, Result};

/// How many of the fittest candidates are kept to fit the model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Retain {
    /// Keep the best `ceil(q * population_size)` candidates, `q` in (0, 1].
    Quantile(f64),
    /// Keep a fixed number of candidates.
    Count(usize),
}

impl Default for Retain {
    fn default() -> Self {
        Retain::Quantile(0.1)
    }
}

/// Configuration for [`Mimic`](super::Mimic).
///
/// Model smoothing belongs to the estimator, e.g.
/// [`DependencyTree::new`](crate::dist::DependencyTree::new).
///
/// ```
/// use u_randopt::mimic::{MimicConfig, Retain};
///
/// let config = MimicConfig::new(200, Retain::Count(20)).with_seed(1);
/// assert_eq!(config.retain_count(), 20);
///
/// let config = MimicConfig::new(50, Retain::Quantile(0.25));
/// assert_eq!(config.retain_count(), 13);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MimicConfig {
    /// Number of candidates sampled every generation.
    pub population_size: usize,

    /// Size of the fittest subset the model is fitted on.
    pub retain: Retain,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MimicConfig {
    fn default() -> Self {
        Self::new(200, Retain::default())
    }
}

impl MimicConfig {
    pub fn new(population_size: usize, retain: Retain) -> Self {
        Self {
            population_size,
            retain,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets how many candidates are retained.
    pub fn with_retain(mut self, retain: Retain) -> Self {
        self.retain = retain;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of candidates retained per generation.
    pub fn retain_count(&self) -> usize {
        let n = self.population_size;
        match self.retain {
            Retain::Quantile(q) => {
                // 0.07 * 100 is 7.000000000000001 in binary floating point.
                let k = q * n as f64;
                let k = if (k - k.round()).abs() < 1e-9 {
                    k.round()
                } else {
                    k.ceil()
                };
                (k as usize).clamp(1, n.max(1))
            }
            Retain::Count(k) => k,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let n = self.population_size;
        if n == 0 {
            return Err(OptError::config("population_size must be at least 1"));
        }
        match self.retain {
            Retain::Quantile(q) => {
                if !(q > 0.0 && q <= 1.0) {
                    return Err(OptError::config(format!(
                        "retain quantile must be in (0, 1], got {q}"
                    )));
                }
            }
            Retain::Count(k) => {
                if k == 0 || k > n {
                    return Err(OptError::config(format!(
                        "retain count must be in 1..={n}, got {k}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MimicConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.retain_count(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quantile_rounds_up() {
        assert_eq!(MimicConfig::new(10, Retain::Quantile(0.01)).retain_count(), 1);
        assert_eq!(MimicConfig::new(10, Retain::Quantile(0.55)).retain_count(), 6);
        assert_eq!(MimicConfig::new(10, Retain::Quantile(1.0)).retain_count(), 10);
        assert_eq!(MimicConfig::new(100, Retain::Quantile(0.07)).retain_count(), 7);
        assert_eq!(MimicConfig::new(100, Retain::Quantile(0.14)).retain_count(), 14);
        assert_eq!(MimicConfig::new(100, Retain::Quantile(0.071)).retain_count(), 8);
    }

    #[test]
    fn test_validate_rejects_bad_retain() {
        assert!(MimicConfig::new(10, Retain::Quantile(0.0)).validate().is_err());
        assert!(MimicConfig::new(10, Retain::Quantile(1.5)).validate().is_err());
        assert!(MimicConfig::new(10, Retain::Quantile(f64::NAN)).validate().is_err());
        assert!(MimicConfig::new(10, Retain::Count(0)).validate().is_err());
        assert!(MimicConfig::new(10, Retain::Count(11)).validate().is_err());
        assert!(MimicConfig::new(10, Retain::Count(10)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_population() {
        assert!(MimicConfig::new(0, Retain::Count(1)).validate().is_err());
    }
}
