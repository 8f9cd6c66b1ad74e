//! Driver configuration.

use std::time::Duration;

use crate::error::{OptError, Result};

/// Stop once consecutive step fitnesses differ by at most `threshold`, or
/// after `max_iterations` steps, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Convergence {
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Convergence {
    pub fn new(threshold: f64, max_iterations: usize) -> Self {
        Self {
            threshold,
            max_iterations,
        }
    }
}

impl Default for Convergence {
    fn default() -> Self {
        Self::new(1e-10, 500)
    }
}

/// The single stopping rule a validated [`DriverConfig`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Budget {
    Iterations(usize),
    Time(Duration),
    Convergence(Convergence),
}

/// Configuration for a [`Driver`](super::Driver).
///
/// Exactly one of `max_iterations`, `time_limit_ms` and `convergence`
/// must be set.
///
/// # Examples
///
/// ```
/// use u_randopt::driver::{Budget, DriverConfig};
///
/// let config = DriverConfig::iterations(1000).with_log_interval(50);
/// assert_eq!(config.validate().unwrap(), Budget::Iterations(1000));
///
/// // Two budgets at once is a configuration error.
/// assert!(config.with_time_limit_ms(10).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// Run exactly this many steps.
    pub max_iterations: Option<usize>,

    /// Keep stepping while less than this many milliseconds have elapsed.
    pub time_limit_ms: Option<u64>,

    /// Run until the per-step fitness settles.
    pub convergence: Option<Convergence>,

    /// Keep a [`StepRecord`](super::StepRecord) for every step in the result.
    pub record_history: bool,

    /// Emit a `debug!` event every this many steps. 0 disables it.
    pub log_interval: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            time_limit_ms: None,
            convergence: None,
            record_history: false,
            log_interval: 100,
        }
    }
}

impl DriverConfig {
    /// Fixed step count.
    pub fn iterations(n: usize) -> Self {
        Self::default().with_max_iterations(n)
    }

    /// Wall-clock limit in milliseconds.
    pub fn time_limit(ms: u64) -> Self {
        Self::default().with_time_limit_ms(ms)
    }

    /// Run until converged.
    pub fn until_converged(convergence: Convergence) -> Self {
        Self::default().with_convergence(convergence)
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the convergence budget.
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = Some(convergence);
        self
    }

    /// Records every step in [`DriverResult::history`](super::DriverResult::history).
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Sets how many steps pass between progress logs.
    pub fn with_log_interval(mut self, every: usize) -> Self {
        self.log_interval = every;
        self
    }

    /// Validates the configuration and resolves the budget.
    pub fn validate(&self) -> Result<Budget> {
        let set = [
            self.max_iterations.is_some(),
            self.time_limit_ms.is_some(),
            self.convergence.is_some(),
        ]
        .iter()
        .filter(|&&b| b)
        .count();
        match set {
            0 => {
                return Err(OptError::config(
                    "one of max_iterations, time_limit_ms or convergence must be set",
                ))
            }
            1 => {}
            _ => {
                return Err(OptError::config(
                    "max_iterations, time_limit_ms and convergence are mutually exclusive",
                ))
            }
        }

        if let Some(n) = self.max_iterations {
            if n == 0 {
                return Err(OptError::config("max_iterations must be at least 1"));
            }
            return Ok(Budget::Iterations(n));
        }
        if let Some(ms) = self.time_limit_ms {
            if ms == 0 {
                return Err(OptError::config("time_limit_ms must be at least 1"));
            }
            return Ok(Budget::Time(Duration::from_millis(ms)));
        }
        match self.convergence {
            Some(c) if !(c.threshold >= 0.0 && c.threshold.is_finite()) => Err(OptError::config(
                format!("convergence threshold must be finite and >= 0, got {}", c.threshold),
            )),
            Some(c) if c.max_iterations == 0 => Err(OptError::config(
                "convergence max_iterations must be at least 1",
            )),
            Some(c) => Ok(Budget::Convergence(c)),
            None => Err(OptError::config("no budget set")),
        }
    }
}
