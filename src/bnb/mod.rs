//! Branch-and-bound exact solver for the 0/1 knapsack problem.
//!
//! Depth-first branching over a fixed item order (descending value-to-weight
//! ratio, decided once up front), with two pruning rules at every node:
//! infeasible partial assignments are cut immediately, and feasible ones are
//! cut when the fractional-relaxation bound on the undecided suffix cannot
//! beat the incumbent.
//!
//! # References
//!
//! - Kolesar, P. J. (1967). "A Branch and Bound Algorithm for the Knapsack
//!   Problem", *Management Science* 13(9), 723-735.
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations"

mod runner;

pub use runner::{BnbResult, BnbStats, BranchAndBound};
