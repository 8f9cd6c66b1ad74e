//! The common stepping interface shared by all four trainers.

use crate::candidate::{Objective, Scored};
use crate::error::Result;

/// Where a trainer is in its lifecycle.
///
/// No phase is terminal: a trainer can always be stepped again, and the
/// driver alone decides when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Constructed and evaluated, not yet stepped.
    Initialized,
    /// Single-solution trainers after their first move attempt.
    Stepping,
    /// Population trainers after their first generation.
    Generation,
    /// Annealing whose temperature has decayed to zero. From here on it
    /// behaves as greedy hill climbing.
    Cooled,
}

/// A randomized optimizer that advances one atomic step at a time.
pub trait Trainer {
    /// Performs one step (a move attempt or a generation) and returns the
    /// best-so-far fitness afterwards.
    ///
    /// An evaluation failure aborts the step and is returned unchanged.
    fn train(&mut self) -> Result<f64>;

    /// The best candidate seen so far, with its fitness.
    fn optimal(&self) -> &Scored;

    fn objective(&self) -> Objective;

    /// Number of completed `train` calls.
    fn steps(&self) -> usize;

    fn phase(&self) -> Phase;
}

impl<T: Trainer + ?Sized> Trainer for Box<T> {
    fn train(&mut self) -> Result<f64> {
        (**self).train()
    }
    fn optimal(&self) -> &Scored {
        (**self).optimal()
    }
    fn objective(&self) -> Objective {
        (**self).objective()
    }
    fn steps(&self) -> usize {
        (**self).steps()
    }
    fn phase(&self) -> Phase {
        (**self).phase()
    }
}
