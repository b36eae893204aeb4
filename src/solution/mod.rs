//! Solution representations for the knapsack problem.
//!
//! Both representations cache their total value and weight and keep the cache
//! consistent inside [`Solution::set`] / [`FractionalSolution::set`], the only
//! mutation points. Reads are O(1); copying a solution is O(n).

mod binary;
mod fractional;

pub use binary::Solution;
pub use fractional::{FractionalSolution, EPSILON};
