//! Branch-and-bound search loop.

use tracing::debug;

use crate::error::SolverError;
use crate::greedy::{FractionalSolver, GreedySolver};
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::Solver;

/// Search statistics of a branch-and-bound run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbStats {
    /// Candidate partial solutions generated (tree nodes visited).
    pub nodes: u64,
    /// Subtrees cut because the candidate exceeded the capacity.
    pub pruned_infeasible: u64,
    /// Subtrees cut because the relaxation bound could not beat the
    /// incumbent.
    pub pruned_bound: u64,
}

/// Result of a branch-and-bound run: the optimal solution plus statistics.
#[derive(Debug, Clone)]
pub struct BnbResult<'a> {
    /// A provably optimal solution.
    pub best: Solution<'a>,
    /// Search statistics.
    pub stats: BnbStats,
}

/// Exact solver via depth-first branch-and-bound.
///
/// The greedy heuristic provides the initial incumbent (a valid lower
/// bound); the fractional relaxation of the undecided suffix provides the
/// upper bound at every node. Recursion depth equals the item count, so very
/// large instances need a stack-friendly run environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBound;

impl BranchAndBound {
    /// Solves `instance` to proven optimality.
    pub fn run<'a>(&self, instance: &'a Instance) -> BnbResult<'a> {
        let incumbent = GreedySolver.run(instance);
        let mut search = Search {
            instance,
            order: instance.indices_by_ratio(),
            best_value: incumbent.value(),
            best: incumbent,
            stats: BnbStats::default(),
        };

        if !instance.is_empty() {
            search.branch(Solution::new(instance), 0);
        }

        debug!(
            nodes = search.stats.nodes,
            pruned_infeasible = search.stats.pruned_infeasible,
            pruned_bound = search.stats.pruned_bound,
            best_value = search.best_value,
            "branch-and-bound finished"
        );

        BnbResult {
            best: search.best,
            stats: search.stats,
        }
    }
}

impl Solver for BranchAndBound {
    type Sol<'a> = Solution<'a>;

    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolverError> {
        Ok(self.run(instance).best)
    }

    fn name(&self) -> &'static str {
        "branch-and-bound"
    }
}

/// Mutable search state threaded through the recursion.
struct Search<'a> {
    instance: &'a Instance,
    /// Global branching order, fixed up front.
    order: Vec<usize>,
    /// Best fully-decided feasible solution found so far.
    best: Solution<'a>,
    best_value: u64,
    stats: BnbStats,
}

impl<'a> Search<'a> {
    /// Branches on `order[depth]`, excluding the item first, then including
    /// it. `partial` has all items before `depth` decided.
    fn branch(&mut self, partial: Solution<'a>, depth: usize) {
        let item = self.order[depth];

        for included in [false, true] {
            let mut candidate = partial.clone();
            candidate.set(item, included);
            self.stats.nodes += 1;

            if !candidate.is_feasible() {
                self.stats.pruned_infeasible += 1;
                continue;
            }

            let bound = candidate.value() as f64 + self.suffix_bound(depth + 1, &candidate);
            if bound <= self.best_value as f64 {
                self.stats.pruned_bound += 1;
                continue;
            }

            if depth + 1 == self.order.len() {
                // complete and, thanks to the bound check, strictly better
                if candidate.value() > self.best_value {
                    self.best_value = candidate.value();
                    self.best = candidate;
                }
            } else {
                self.branch(candidate, depth + 1);
            }
        }
    }

    /// Optimal relaxation value of the items still undecided below `depth`,
    /// under the capacity left over by `candidate`.
    fn suffix_bound(&self, depth: usize, candidate: &Solution<'_>) -> f64 {
        let undecided = &self.order[depth..];
        if undecided.is_empty() {
            return 0.0;
        }
        let values = undecided.iter().map(|&i| self.instance.value(i)).collect();
        let weights = undecided
            .iter()
            .map(|&i| self.instance.weight(i))
            .collect();
        let remaining = self.instance.capacity() - candidate.weight();
        let relaxation = Instance::new(values, weights, remaining);
        FractionalSolver.bound(&relaxation)
    }
}
