//! The shared solver capability.

use crate::error::SolverError;
use crate::instance::Instance;

/// A knapsack solver: consumes an [`Instance`], produces a typed solution.
///
/// The associated `Sol` type is generic over the instance lifetime so that
/// binary solvers return [`Solution`](crate::solution::Solution) and the
/// relaxation solver returns
/// [`FractionalSolution`](crate::solution::FractionalSolution) through the
/// same trait. The instance is never mutated by a solve call, and the
/// returned solution borrows the input instance.
///
/// Heuristic solvers attempt feasibility but do not unconditionally
/// guarantee it (a policy allowing infeasible exploration may never find a
/// feasible incumbent); callers should check `is_feasible()` on the result.
pub trait Solver {
    /// Solution type produced, borrowing the solved instance.
    type Sol<'a>;

    /// Runs the solver to completion on the calling thread.
    fn solve<'a>(&self, instance: &'a Instance) -> Result<Self::Sol<'a>, SolverError>;

    /// Short display name used for reporting only.
    fn name(&self) -> &'static str;
}
