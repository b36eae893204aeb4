//! Simulated annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{CoolingSchedule, InitialSolution, Reheat, SaConfig, StopRule};
use crate::error::SolverError;
use crate::greedy::GreedySolver;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::Solver;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<'a> {
    /// Best solution ever accepted (kept separately from the trajectory).
    pub best: Solution<'a>,
    /// Iterations executed (neighbor evaluations).
    pub iterations: usize,
    /// Temperature when the run stopped.
    pub final_temperature: f64,
    /// Accepted moves, improving ones included.
    pub accepted: usize,
    /// Moves that strictly improved on the trajectory state.
    pub improving: usize,
}

/// Simulated annealing solver for the 0/1 knapsack problem.
///
/// Moves flip a single uniformly random bit. A flip to 0 is always valid; a
/// flip to 1 is only drawn into evaluation if the result stays within
/// capacity, so the trajectory never visits an over-capacity state.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    config: SaConfig,
}

impl SimulatedAnnealing {
    /// Creates a solver with the given configuration.
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Runs the annealing trajectory and returns the incumbent plus
    /// statistics.
    pub fn run<'a>(&self, instance: &'a Instance) -> Result<SaResult<'a>, SolverError> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = match self.config.initial {
            InitialSolution::Random => random_solution(instance, &mut rng),
            InitialSolution::Greedy => GreedySolver.run(instance),
        };
        let mut best = current.clone();

        let mut temperature = self.config.initial_temperature;
        let mut iteration = 0usize;
        let mut accepted = 0usize;
        let mut improving = 0usize;

        loop {
            let Some(neighbor) = flip_random_bit(&current, &mut rng) else {
                // no structurally valid flip exists (e.g. capacity 0):
                // the trajectory cannot move, so the run ends here
                debug!(iteration, "no valid move available, stopping");
                break;
            };

            temperature = cool(temperature, self.config.cooling, iteration);

            let current_value = current.value() as f64;
            let neighbor_value = neighbor.value() as f64;

            let accept = if neighbor_value >= current_value {
                true
            } else {
                let probability =
                    (-(current_value - neighbor_value) / temperature).exp().clamp(0.0, 1.0);
                rng.random::<f64>() < probability
            };

            if accept {
                if neighbor.value() > current.value() {
                    improving += 1;
                }
                current = neighbor;
                accepted += 1;

                if current.value() > best.value() {
                    best = current.clone();
                    if let Reheat::Constant { temperature: t } = self.config.reheat {
                        trace!(iteration, reheat_to = t, "new incumbent, reheating");
                        temperature = t;
                    }
                }
            }

            iteration += 1;

            let stop = match self.config.stop {
                StopRule::Iterations => iteration >= self.config.max_iterations,
                StopRule::Temperature => temperature <= self.config.min_temperature,
            };
            if stop {
                break;
            }
        }

        debug!(
            iterations = iteration,
            accepted,
            improving,
            best_value = best.value(),
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            iterations: iteration,
            final_temperature: temperature,
            accepted,
            improving,
        })
    }
}

impl Solver for SimulatedAnnealing {
    type Sol<'a> = Solution<'a>;

    fn solve<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, SolverError> {
        Ok(self.run(instance)?.best)
    }

    fn name(&self) -> &'static str {
        "simulated-annealing"
    }
}

/// Applies the cooling schedule for iteration `iteration`.
fn cool(temperature: f64, schedule: CoolingSchedule, iteration: usize) -> f64 {
    match schedule {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::InverseTime { beta } => temperature / (1.0 + beta * iteration as f64),
    }
}

/// Feasibility-biased random assignment: each item is included with 50%
/// probability, skipped when it would exceed the capacity.
fn random_solution<'a, R: Rng>(instance: &'a Instance, rng: &mut R) -> Solution<'a> {
    let mut solution = Solution::new(instance);
    for item in 0..instance.len() {
        if rng.random_bool(0.5)
            && solution.weight() + instance.weight(item) <= instance.capacity()
        {
            solution.set(item, true);
        }
    }
    solution
}

/// Flips one uniformly random bit, re-sampling until the flip is valid:
/// 1→0 always is, 0→1 only if the result stays within capacity.
///
/// Returns `None` when no valid flip exists at all (nothing selected and no
/// item fits), which otherwise would make re-sampling spin forever.
fn flip_random_bit<'a, R: Rng>(current: &Solution<'a>, rng: &mut R) -> Option<Solution<'a>> {
    let instance = current.instance();
    let n = instance.len();
    if n == 0 {
        return None;
    }

    let any_valid = (0..n).any(|item| {
        current.get(item) || current.weight() + instance.weight(item) <= instance.capacity()
    });
    if !any_valid {
        return None;
    }

    loop {
        let item = rng.random_range(0..n);
        if current.get(item) {
            let mut neighbor = current.clone();
            neighbor.set(item, false);
            return Some(neighbor);
        }
        if current.weight() + instance.weight(item) <= instance.capacity() {
            let mut neighbor = current.clone();
            neighbor.set(item, true);
            return Some(neighbor);
        }
    }
}
