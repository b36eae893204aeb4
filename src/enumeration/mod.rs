//! Brute-force enumeration baseline.
//!
//! Walks every one of the `2^n` binary assignments and keeps the best
//! feasible one. Exponential and exact; only useful on small instances,
//! where it serves as the correctness cross-check for the other solvers.

use tracing::debug;

use crate::error::SolverError;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::Solver;

/// Diagnostic counters of an enumeration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationStats {
    /// Assignments evaluated (always `2^n`).
    pub explored: u64,
    /// Feasible assignments seen.
    pub feasible: u64,
    /// Feasible assignments achieving the optimal value.
    pub optimal: u64,
}

/// Result of an enumeration run.
#[derive(Debug, Clone)]
pub struct EnumerationResult<'a> {
    /// The best feasible assignment (the empty one is always feasible).
    pub best: Solution<'a>,
    /// Diagnostic counters.
    pub stats: EnumerationStats,
}

/// Exhaustive solver for the 0/1 knapsack problem.
///
/// Bit `j` of a `0..2^n` counter decides item `j`. Instances beyond 63 items
/// exceed the counter width and are refused with
/// [`SolverError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumeration;

impl Enumeration {
    /// Evaluates every assignment of `instance`.
    pub fn run<'a>(&self, instance: &'a Instance) -> Result<EnumerationResult<'a>, SolverError> {
        let n = instance.len();
        if n > 63 {
            return Err(SolverError::Unsupported {
                solver: self.name(),
                reason: format!("{n} items exceed the 63-item enumeration limit"),
            });
        }

        let mut stats = EnumerationStats::default();
        let mut best: Option<Solution<'a>> = None;

        for pattern in 0..(1u64 << n) {
            let mut solution = Solution::new(instance);
            for item in 0..n {
                if pattern & (1 << item) != 0 {
                    solution.set(item, true);
                }
            }
            stats.explored += 1;

            if !solution.is_feasible() {
                continue;
            }
            stats.feasible += 1;

            match &best {
                Some(incumbent) if solution.value() < incumbent.value() => {}
                Some(incumbent) if solution.value() == incumbent.value() => {
                    stats.optimal += 1;
                }
                _ => {
                    stats.optimal = 1;
                    best = Some(solution);
                }
            }
        }

        debug!(
            explored = stats.explored,
            feasible = stats.feasible,
            optimal = stats.optimal,
            "enumeration finished"
        );

        // pattern 0 is the empty assignment, feasible for any capacity
        let best = best.expect("the empty assignment is always feasible");
        Ok(EnumerationResult { best, stats })
    }
}

impl Solver for Enumeration {
    type Sol<'a> = Solution<'a>;

    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolverError> {
        Ok(self.run(instance)?.best)
    }

    fn name(&self) -> &'static str {
        "enumeration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_tiny_optimum() {
        let instance = Instance::new(vec![6, 10, 12], vec![1, 2, 3], 5);
        let result = Enumeration.run(&instance).unwrap();
        assert_eq!(result.best.value(), 22);
        assert!(result.best.weight() <= 5);
        assert_eq!(result.stats.explored, 8);
    }

    #[test]
    fn test_enumeration_counts_feasible() {
        // capacity 3 admits: {}, {0}, {1}, {0,1} of the 8 assignments
        let instance = Instance::new(vec![6, 10, 12], vec![1, 2, 3], 3);
        let result = Enumeration.run(&instance).unwrap();
        assert_eq!(result.stats.feasible, 5); // plus {2} at weight 3
        assert_eq!(result.best.value(), 16);
    }

    #[test]
    fn test_enumeration_counts_optimal_ties() {
        // two distinct single-item optima of value 5
        let instance = Instance::new(vec![5, 5], vec![2, 2], 2);
        let result = Enumeration.run(&instance).unwrap();
        assert_eq!(result.best.value(), 5);
        assert_eq!(result.stats.optimal, 2);
    }

    #[test]
    fn test_enumeration_zero_capacity() {
        let instance = Instance::new(vec![6, 10], vec![1, 2], 0);
        let result = Enumeration.run(&instance).unwrap();
        assert_eq!(result.best.value(), 0);
        assert_eq!(result.stats.feasible, 1);
    }

    #[test]
    fn test_enumeration_refuses_wide_instances() {
        let instance = Instance::new(vec![1; 64], vec![1; 64], 10);
        assert!(matches!(
            Enumeration.run(&instance),
            Err(SolverError::Unsupported { .. })
        ));
    }
}
