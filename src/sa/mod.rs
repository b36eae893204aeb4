//! Simulated annealing for the 0/1 knapsack problem.
//!
//! Single-trajectory stochastic local search over single-bit flips. Worsening
//! moves are accepted with a probability that shrinks as the temperature
//! falls, letting the search escape local optima early and settle later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{CoolingSchedule, InitialSolution, Reheat, SaConfig, StopRule};
pub use runner::{SaResult, SimulatedAnnealing};
