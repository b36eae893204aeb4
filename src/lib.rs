//! Competing solvers for the 0/1 and fractional knapsack problem.
//!
//! Provides one exact solver, one exhaustive baseline, and a family of
//! heuristics over a shared [`Instance`]/[`Solution`] model:
//!
//! - **Branch-and-Bound** ([`bnb`]): exact depth-first search with
//!   fractional-relaxation pruning.
//! - **Greedy / Fractional** ([`greedy`]): ratio-ordered construction; the
//!   binary variant is a heuristic, the fractional variant is optimal for
//!   the relaxation and doubles as the bounding oracle.
//! - **Simulated Annealing** ([`sa`]): single-trajectory search with
//!   probabilistic acceptance of worsening bit flips.
//! - **Tabu Search** ([`tabu`]): best-of-neighborhood search with bounded
//!   FIFO short-term memory, configurable over four policy axes.
//! - **Enumeration** ([`enumeration`]): brute-force baseline for
//!   cross-checking the others on small instances.
//!
//! Every solver implements [`Solver`]: one synchronous `solve` call per
//! instance, returning a typed solution that borrows the instance. Solvers
//! share no mutable state; randomized solvers draw from a solver-local RNG
//! that is deterministic when seeded.
//!
//! # Examples
//!
//! ```
//! use knapsack_solvers::bnb::BranchAndBound;
//! use knapsack_solvers::{Instance, Solver};
//!
//! let instance = Instance::new(vec![6, 10, 12], vec![1, 2, 3], 5);
//! let best = BranchAndBound.solve(&instance).unwrap();
//! assert_eq!(best.value(), 22);
//! assert!(best.is_feasible());
//! ```

pub mod bnb;
pub mod enumeration;
mod error;
pub mod greedy;
mod instance;
pub mod sa;
mod solution;
mod solver;
pub mod tabu;

pub use error::SolverError;
pub use instance::Instance;
pub use solution::{FractionalSolution, Solution, EPSILON};
pub use solver::Solver;
