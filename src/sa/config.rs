//! Simulated annealing configuration and policy axes.

use crate::error::SolverError;

/// How the starting solution is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialSolution {
    /// Include each item with 50% probability, skipping items that would
    /// break feasibility.
    #[default]
    Random,
    /// Start from the greedy heuristic's solution.
    Greedy,
}

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T ← alpha · T`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
    /// Inverse-time cooling: `T ← T / (1 + beta · i)` with `i` the
    /// iteration counter.
    InverseTime {
        /// Cooling parameter, must be positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::InverseTime { beta: 1e-9 }
    }
}

/// When the trajectory stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopRule {
    /// Stop after the configured iteration budget.
    #[default]
    Iterations,
    /// Stop once the temperature drops to the configured floor.
    Temperature,
}

/// Optional reheating on incumbent improvement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reheat {
    /// Never reset the temperature.
    #[default]
    Off,
    /// Reset the temperature to a fixed constant whenever a new incumbent
    /// is found.
    Constant {
        /// Temperature to reset to.
        temperature: f64,
    },
}

/// Configuration for [`SimulatedAnnealing`](crate::sa::SimulatedAnnealing).
///
/// # Examples
///
/// ```
/// use knapsack_solvers::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.999 })
///     .with_max_iterations(5_000)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// How the starting solution is built.
    pub initial: InitialSolution,
    /// Cooling schedule.
    pub cooling: CoolingSchedule,
    /// Termination rule.
    pub stop: StopRule,
    /// Reheating policy.
    pub reheat: Reheat,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Temperature floor for [`StopRule::Temperature`].
    pub min_temperature: f64,
    /// Iteration budget for [`StopRule::Iterations`].
    pub max_iterations: usize,
    /// Random seed (None for a fresh random seed per run).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial: InitialSolution::default(),
            cooling: CoolingSchedule::default(),
            stop: StopRule::default(),
            reheat: Reheat::default(),
            initial_temperature: 1000.0,
            min_temperature: 1e-4,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the initial-solution policy.
    pub fn with_initial(mut self, initial: InitialSolution) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the termination rule.
    pub fn with_stop(mut self, stop: StopRule) -> Self {
        self.stop = stop;
        self
    }

    /// Sets the reheating policy.
    pub fn with_reheat(mut self, reheat: Reheat) -> Self {
        self.reheat = reheat;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the temperature floor.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.initial_temperature <= 0.0 {
            return Err(SolverError::InvalidConfig(
                "initial_temperature must be positive".into(),
            ));
        }
        if self.min_temperature <= 0.0 {
            return Err(SolverError::InvalidConfig(
                "min_temperature must be positive".into(),
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(SolverError::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(SolverError::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::InverseTime { beta } => {
                if beta <= 0.0 {
                    return Err(SolverError::InvalidConfig(format!(
                        "inverse-time beta must be positive, got {beta}"
                    )));
                }
            }
        }
        if let Reheat::Constant { temperature } = self.reheat {
            if temperature <= 0.0 {
                return Err(SolverError::InvalidConfig(
                    "reheat temperature must be positive".into(),
                ));
            }
        }
        if self.stop == StopRule::Iterations && self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be positive under the iteration stop rule".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial, InitialSolution::Random);
        assert_eq!(config.stop, StopRule::Iterations);
        assert_eq!(config.max_iterations, 10_000);
    }

    #[test]
    fn test_validate_bad_initial_temperature() {
        let config = SaConfig::default().with_initial_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::InverseTime { beta: 0.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_reheat() {
        let config = SaConfig::default().with_reheat(Reheat::Constant { temperature: -5.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_iteration_budget() {
        let config = SaConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = SaConfig::default()
            .with_initial(InitialSolution::Greedy)
            .with_stop(StopRule::Temperature)
            .with_reheat(Reheat::Constant { temperature: 10.0 })
            .with_min_temperature(0.01)
            .with_seed(7);
        assert_eq!(config.initial, InitialSolution::Greedy);
        assert_eq!(config.stop, StopRule::Temperature);
        assert_eq!(config.seed, Some(7));
    }
}
