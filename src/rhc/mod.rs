//! Randomized Hill Climbing (RHC).
//!
//! Local search that samples one neighbor per step and moves to it
//! whenever it is not worse than the current candidate. Accepting ties
//! lets the search drift across plateaus.
//!
//! RHC never restarts on its own. Use
//! [`Driver::run_restarts`](crate::driver::Driver::run_restarts) for
//! random-restart hill climbing.
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, ch. 4

mod config;
mod runner;

pub use config::RhcConfig;
pub use runner::RandomizedHillClimbing;
