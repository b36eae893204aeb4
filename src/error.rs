//! Error taxonomy for the solver family.

use thiserror::Error;

/// Errors surfaced by solver runs.
///
/// Precondition violations (out-of-range item indices, mismatched value and
/// weight arrays) are programming errors and panic at the point of access
/// instead of appearing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A configuration carried an invalid policy or parameter value.
    ///
    /// Raised before the search starts; never triggered by problem data.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The solver cannot handle the given instance.
    ///
    /// Callers may treat this as "no result" rather than a hard failure.
    #[error("{solver} cannot solve this instance: {reason}")]
    Unsupported {
        /// Display name of the refusing solver.
        solver: &'static str,
        /// Human-readable refusal reason.
        reason: String,
    },
}
