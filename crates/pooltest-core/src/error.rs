//! Error types for pooltest-core.
//!
//! All failure modes are explicit; the resolver and trial runner never panic.

/// Result type alias for pooling operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Error type for configuration and pooling operations.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// Experiment parameters are unusable (non-positive sizes, prevalence
    /// out of range, more infections than individuals).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The resolver did not confirm exactly the infected individuals.
    #[error("invariant violation: expected {expected} positives, found {found}")]
    InvariantViolation {
        /// Size of the ground-truth infected set.
        expected: usize,
        /// Individuals confirmed positive by the resolver.
        found: usize,
    },

    /// Configuration file could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(String),
}

impl PoolError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a configuration load error.
    #[must_use]
    pub fn config_load(msg: impl Into<String>) -> Self {
        Self::ConfigLoad(msg.into())
    }

    /// Returns true if this error means the pooling strategy itself is broken.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}
