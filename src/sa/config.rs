//! SA configuration and cooling schedules.

use crate::error::{OptError, Result};

/// Cooling schedule for temperature reduction, applied once per step.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = rate * T_k`.
    ///
    /// Typical `rate`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        rate: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl CoolingSchedule {
    /// Temperature after one more step.
    pub fn next(self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { rate } => temperature * rate,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// There is no `Default`: sensible temperatures depend entirely on the
/// fitness scale of the problem (anything from 1 to 1e12 is common).
///
/// # Examples
///
/// ```
/// use u_randopt::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::new(1e11, 0.95).with_seed(42);
/// assert!(config.validate().is_ok());
///
/// let lundy = SaConfig::new(100.0, 0.95)
///     .with_cooling(CoolingSchedule::LundyMees { beta: 0.01 });
/// assert!(lundy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Zero makes the run greedy from the start.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl SaConfig {
    /// Geometric cooling from `initial_temperature` by `rate` per step.
    pub fn new(initial_temperature: f64, rate: f64) -> Self {
        Self {
            initial_temperature,
            cooling: CoolingSchedule::Geometric { rate },
            seed: None,
        }
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let t = self.initial_temperature;
        if !t.is_finite() || t < 0.0 {
            return Err(OptError::config(format!(
                "initial_temperature must be finite and non-negative, got {t}"
            )));
        }
        match self.cooling {
            CoolingSchedule::Geometric { rate } => {
                if !(rate > 0.0 && rate < 1.0) {
                    return Err(OptError::config(format!(
                        "cooling rate must be in (0, 1), got {rate}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(OptError::config(format!(
                        "lundy-mees beta must be positive, got {beta}"
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
    fn test_new_is_geometric() {
        let config = SaConfig::new(100.0, 0.9);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { rate: 0.9 });
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_temperature_allowed() {
        assert!(SaConfig::new(0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(SaConfig::new(-1.0, 0.9).validate().is_err());
        assert!(SaConfig::new(f64::NAN, 0.9).validate().is_err());
        assert!(SaConfig::new(f64::INFINITY, 0.9).validate().is_err());
    }

    #[test]
    fn test_validate_bad_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let err = SaConfig::new(10.0, rate).validate().unwrap_err();
            assert!(matches!(err, OptError::InvalidConfig(_)), "rate {rate}");
        }
    }

    #[test]
    fn test_validate_bad_beta() {
        let config =
            SaConfig::new(10.0, 0.9).with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_steps() {
        let geo = CoolingSchedule::Geometric { rate: 0.5 };
        assert!((geo.next(8.0) - 4.0).abs() < 1e-12);

        let lm = CoolingSchedule::LundyMees { beta: 1.0 };
        assert!((lm.next(1.0) - 0.5).abs() < 1e-12);
        assert!(lm.next(0.5) < 0.5);
    }
}
