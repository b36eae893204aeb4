//! Optimal fractional (relaxation) solver.

use crate::error::SolverError;
use crate::instance::Instance;
use crate::solution::FractionalSolution;
use crate::solver::Solver;

/// Exact greedy solver for the fractional knapsack relaxation.
///
/// Items are taken whole in descending value-to-weight order until one no
/// longer fits; that item is taken at the exact fraction that fills the
/// remaining capacity and the pass stops. The resulting value is the optimal
/// relaxation value and therefore a valid upper bound for the 0/1 problem,
/// which is how [`BranchAndBound`](crate::bnb::BranchAndBound) uses it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractionalSolver;

impl FractionalSolver {
    /// Builds the optimal fractional assignment for `instance`.
    pub fn run<'a>(&self, instance: &'a Instance) -> FractionalSolution<'a> {
        let mut solution = FractionalSolution::new(instance);
        for item in instance.indices_by_ratio() {
            let remaining = instance.capacity() as f64 - solution.weight();
            if instance.weight(item) as f64 <= remaining {
                solution.set(item, 1.0);
            } else {
                // remaining may be 0 here: the knapsack is exactly full and
                // the fill fraction degenerates to 0.
                solution.set(item, remaining / instance.weight(item) as f64);
                break;
            }
        }
        solution
    }

    /// Optimal relaxation value only, without keeping the assignment.
    pub fn bound(&self, instance: &Instance) -> f64 {
        self.run(instance).value()
    }
}

impl Solver for FractionalSolver {
    type Sol<'a> = FractionalSolution<'a>;

    fn solve<'a>(&self, instance: &'a Instance) -> Result<FractionalSolution<'a>, SolverError> {
        Ok(self.run(instance))
    }

    fn name(&self) -> &'static str {
        "fractional"
    }
}
