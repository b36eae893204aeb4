//! Greedy 0/1 heuristic.

use crate::error::SolverError;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::Solver;

/// Sorting-based heuristic for the binary knapsack problem.
///
/// Items are considered in descending value-to-weight order (ties broken by
/// ascending index) and added whole whenever they still fit. Single pass, no
/// backtracking: the result is feasible but not necessarily optimal.
///
/// Also used by the metaheuristics to build their initial incumbent and by
/// branch-and-bound as the initial lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Builds the greedy assignment for `instance`.
    pub fn run<'a>(&self, instance: &'a Instance) -> Solution<'a> {
        let mut solution = Solution::new(instance);
        for item in instance.indices_by_ratio() {
            if solution.weight() + instance.weight(item) <= instance.capacity() {
                solution.set(item, true);
            }
        }
        solution
    }
}

impl Solver for GreedySolver {
    type Sol<'a> = Solution<'a>;

    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolverError> {
        Ok(self.run(instance))
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
