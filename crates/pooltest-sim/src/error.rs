//! Simulation error types.

use pooltest_core::PoolError;

/// Result type alias for experiment operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Experiment errors.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Configuration or pooling failure from a trial.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// Report could not be rendered.
    #[error("report error: {0}")]
    Report(String),
}

impl SimError {
    /// Returns true if a trial failed to isolate every infected individual.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Pool(err) if err.is_invariant_violation())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(err.to_string())
    }
}
