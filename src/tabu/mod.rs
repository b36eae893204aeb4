//! Tabu search for the 0/1 knapsack problem.
//!
//! Best-of-neighborhood local search over all single-bit flips, with a
//! bounded FIFO short-term memory that forbids recently visited states (or
//! recently flipped items) and thereby prevents cycling. Configurable over
//! four independent policy axes: initial solution, termination, tabu
//! attribute, and feasibility handling.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;

pub use config::{Attribute, Feasibility, InitialSolution, TabuConfig, Termination};
pub use runner::{TabuResult, TabuSearch};
