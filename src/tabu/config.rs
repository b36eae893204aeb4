//! Tabu search configuration and policy axes.

use crate::error::SolverError;

/// How the starting solution is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialSolution {
    /// Start from the greedy heuristic's solution.
    #[default]
    Greedy,
    /// Walk a shuffled item permutation, including each item with 50%
    /// probability when it still fits.
    Random,
}

/// When the search stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop after the configured iteration budget.
    #[default]
    Iterations,
    /// Stop once the configured number of iterations passed without a new
    /// incumbent.
    NoImprovement,
}

/// What the tabu memory records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// Full assignment snapshots; a candidate equal to any remembered
    /// assignment is tabu.
    #[default]
    Solution,
    /// Flipped item indices; flipping a remembered item again is tabu.
    Index,
}

/// How infeasible neighbors are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feasibility {
    /// Infeasible neighbors are filtered out of the candidate set.
    #[default]
    FeasibleOnly,
    /// Infeasible neighbors compete with their value scaled down linearly
    /// in the capacity overrun.
    PenalizedInfeasible,
}

/// Configuration for [`TabuSearch`](crate::tabu::TabuSearch).
///
/// # Examples
///
/// ```
/// use knapsack_solvers::tabu::{Attribute, Feasibility, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_attribute(Attribute::Index)
///     .with_feasibility(Feasibility::PenalizedInfeasible)
///     .with_tabu_size(50)
///     .with_seed(42);
/// assert_eq!(config.tabu_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// How the starting solution is built.
    pub initial: InitialSolution,
    /// Termination rule.
    pub termination: Termination,
    /// Tabu memory attribute.
    pub attribute: Attribute,
    /// Feasibility policy for neighborhood candidates.
    pub feasibility: Feasibility,
    /// Maximum tabu memory length; the oldest entry is evicted beyond it.
    pub tabu_size: usize,
    /// Iteration budget for [`Termination::Iterations`].
    pub max_iterations: usize,
    /// Stagnation limit for [`Termination::NoImprovement`].
    pub improvement_limit: usize,
    /// Random seed (None for a fresh random seed per run).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            initial: InitialSolution::default(),
            termination: Termination::default(),
            attribute: Attribute::default(),
            feasibility: Feasibility::default(),
            tabu_size: 100,
            max_iterations: 1000,
            improvement_limit: 100,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the initial-solution policy.
    pub fn with_initial(mut self, initial: InitialSolution) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the termination rule.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Sets the tabu memory attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Sets the feasibility policy.
    pub fn with_feasibility(mut self, feasibility: Feasibility) -> Self {
        self.feasibility = feasibility;
        self
    }

    /// Sets the maximum tabu memory length.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_improvement_limit(mut self, n: usize) -> Self {
        self.improvement_limit = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.tabu_size == 0 {
            return Err(SolverError::InvalidConfig(
                "tabu_size must be positive".into(),
            ));
        }
        if self.termination == Termination::Iterations && self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be positive under the iteration termination rule".into(),
            ));
        }
        if self.termination == Termination::NoImprovement && self.improvement_limit == 0 {
            return Err(SolverError::InvalidConfig(
                "improvement_limit must be positive under the no-improvement rule".into(),
            ));
        }
        Ok(())
    }
}
