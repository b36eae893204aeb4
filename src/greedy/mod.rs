//! Ratio-ordered greedy construction.
//!
//! Both solvers walk the items in descending value-to-weight order. The
//! binary variant ([`GreedySolver`]) skips items that no longer fit and is a
//! heuristic for the 0/1 problem. The fractional variant
//! ([`FractionalSolver`]) tops the knapsack off with an exact fraction of the
//! first item that does not fit, which is optimal for the relaxation — this
//! is what makes it usable as the upper-bound oracle in branch-and-bound.
//!
//! # References
//!
//! - Dantzig, G. B. (1957). "Discrete-Variable Extremum Problems",
//!   *Operations Research* 5(2), 266-288.

mod binary;
mod fractional;

pub use binary::GreedySolver;
pub use fractional::FractionalSolver;
