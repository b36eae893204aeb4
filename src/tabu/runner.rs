//! Tabu search execution loop.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{Attribute, Feasibility, InitialSolution, TabuConfig, Termination};
use crate::error::SolverError;
use crate::greedy::GreedySolver;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::Solver;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult<'a> {
    /// Best feasible solution encountered.
    pub best: Solution<'a>,
    /// Iterations executed (accepted moves).
    pub iterations: usize,
    /// Iteration at which the incumbent was last improved.
    pub best_iteration: usize,
    /// Deadlock evictions (oldest tabu entries dropped to free a move).
    pub evictions: usize,
}

/// Tabu search solver for the 0/1 knapsack problem.
///
/// Each iteration scores all single-bit flips of the current state, drops
/// candidates forbidden by the feasibility policy and the tabu memory, and
/// moves to the highest-scoring survivor (ties keep the first encountered).
/// The memory is a pair of bounded FIFO queues, assignment snapshots and
/// flipped indices, pushed in lockstep after every move; the configured
/// attribute decides which one is consulted.
#[derive(Debug, Clone, Default)]
pub struct TabuSearch {
    config: TabuConfig,
}

impl TabuSearch {
    /// Creates a solver with the given configuration.
    pub fn new(config: TabuConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs the search and returns the incumbent plus statistics.
    pub fn run<'a>(&self, instance: &'a Instance) -> Result<TabuResult<'a>, SolverError> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = match self.config.initial {
            InitialSolution::Greedy => GreedySolver.run(instance),
            InitialSolution::Random => random_solution(instance, &mut rng),
        };
        let mut best = current.clone();

        let mut tabu_solutions: VecDeque<Vec<bool>> = VecDeque::new();
        let mut tabu_indices: VecDeque<usize> = VecDeque::new();

        let mut iteration = 0usize;
        let mut best_iteration = 0usize;
        let mut evictions = 0usize;

        loop {
            // best admissible single-bit flip, first-encounter tie-break
            let mut chosen: Option<(Solution<'a>, usize, f64)> = None;
            for item in 0..instance.len() {
                let mut neighbor = current.clone();
                neighbor.flip(item);

                if self.config.feasibility == Feasibility::FeasibleOnly
                    && !neighbor.is_feasible()
                {
                    continue;
                }

                let is_tabu = match self.config.attribute {
                    Attribute::Solution => tabu_solutions
                        .iter()
                        .any(|s| s.as_slice() == neighbor.assignment()),
                    Attribute::Index => tabu_indices.contains(&item),
                };
                if is_tabu {
                    continue;
                }

                let score = penalized_value(&neighbor);
                if chosen.as_ref().is_none_or(|(_, _, s)| score > *s) {
                    chosen = Some((neighbor, item, score));
                }
            }

            let Some((neighbor, item, _)) = chosen else {
                // deadlock: every candidate is tabu or forbidden; free the
                // oldest memory entries and retry the same iteration
                if tabu_solutions.is_empty() && tabu_indices.is_empty() {
                    debug!(iteration, "no admissible move and nothing to evict, stopping");
                    break;
                }
                tabu_solutions.pop_front();
                tabu_indices.pop_front();
                evictions += 1;
                trace!(iteration, evictions, "tabu deadlock, evicted oldest entry");
                continue;
            };

            current = neighbor;

            if current.is_feasible() && current.value() > best.value() {
                best = current.clone();
                best_iteration = iteration;
            }

            tabu_solutions.push_back(current.assignment().to_vec());
            tabu_indices.push_back(item);
            if tabu_solutions.len() > self.config.tabu_size {
                tabu_solutions.pop_front();
            }
            if tabu_indices.len() > self.config.tabu_size {
                tabu_indices.pop_front();
            }

            iteration += 1;

            let stop = match self.config.termination {
                Termination::Iterations => iteration >= self.config.max_iterations,
                Termination::NoImprovement => {
                    iteration - best_iteration >= self.config.improvement_limit
                }
            };
            if stop {
                break;
            }
        }

        debug!(
            iterations = iteration,
            evictions,
            best_value = best.value(),
            "tabu search finished"
        );

        Ok(TabuResult {
            best,
            iterations: iteration,
            best_iteration,
            evictions,
        })
    }
}

impl Solver for TabuSearch {
    type Sol<'a> = Solution<'a>;

    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolverError> {
        Ok(self.run(instance)?.best)
    }

    fn name(&self) -> &'static str {
        "tabu-search"
    }
}

/// Candidate score: the plain value for feasible states, scaled down by
/// `1 − 0.5 · overrun / capacity` for infeasible ones.
fn penalized_value(solution: &Solution<'_>) -> f64 {
    let value = solution.value() as f64;
    if solution.is_feasible() {
        return value;
    }
    let capacity = solution.instance().capacity() as f64;
    let overrun = (solution.weight() - solution.instance().capacity()) as f64;
    value * (1.0 - 0.5 * overrun / capacity)
}

/// Feasibility-biased random assignment over a shuffled item permutation:
/// each item is included with 50% probability when it still fits.
fn random_solution<'a, R: Rng>(instance: &'a Instance, rng: &mut R) -> Solution<'a> {
    let mut order: Vec<usize> = (0..instance.len()).collect();
    order.shuffle(rng);

    let mut solution = Solution::new(instance);
    for item in order {
        if rng.random_bool(0.5)
            && solution.weight() + instance.weight(item) <= instance.capacity()
        {
            solution.set(item, true);
        }
    }
    solution
}
