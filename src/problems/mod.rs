//! Benchmark problems for randomized optimization.
//!
//! Bit-string problems ([`CountOnes`], [`FourPeaks`], [`SixPeaks`],
//! [`ContinuousPeaks`], [`FlipFlop`]), bounded [`Knapsack`], the
//! [`TravelingSalesmanRoute`], [`NQueens`] and graph [`KColoring`].
//!
//! Each type implements [`EvaluationFunction`](crate::problem::EvaluationFunction);
//! pair it with a distribution and operators in a
//! [`Problem`](crate::problem::Problem) to train on it.

mod bits;
mod coloring;
mod knapsack;
mod queens;
mod tsp;

pub use bits::{ContinuousPeaks, CountOnes, FlipFlop, FourPeaks, SixPeaks};
pub use coloring::KColoring;
pub use knapsack::Knapsack;
pub use queens::NQueens;
pub use tsp::{TravelingSalesmanCrossover, TravelingSalesmanRoute};
