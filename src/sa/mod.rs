//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worse neighbors are accepted with probability
//! `exp(Δ/T)`, where `Δ` is the (negative) signed improvement and `T` a
//! temperature that decays after every step, so the search can escape
//! local optima early and settles into greedy climbing as `T → 0`.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{acceptance_probability, SimulatedAnnealing};
