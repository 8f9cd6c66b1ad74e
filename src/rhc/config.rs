//! RHC configuration.

use crate::error::Result;

/// Configuration for [`RandomizedHillClimbing`](super::RandomizedHillClimbing).
///
/// Hill climbing has no tuning parameters of its own; the neighborhood
/// comes with the problem and the budget with the driver.
///
/// ```
/// use u_randopt::rhc::RhcConfig;
///
/// let config = RhcConfig::default().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RhcConfig {
    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl RhcConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. Every seed is valid.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}
