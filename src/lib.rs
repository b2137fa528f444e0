//! pooltest: adaptive hierarchical group-testing simulator.
//!
//! Simulates screening a population for a rare infection by testing pools
//! of 32 and splitting positive pools 9 → 3 → 1 until every infected
//! individual is isolated, then reports how many tests that took across
//! repeated trials.
//!
//! # Quick Start
//!
//! ```rust
//! use pooltest::prelude::*;
//!
//! let config = ExperimentConfig::default()
//!     .with_population_size(32_000)
//!     .with_trials(2)
//!     .with_seed(7);
//! let report = Experiment::new(config)?.run()?;
//! assert!(report.min_tests() >= 1000);
//! # Ok::<(), SimError>(())
//! ```

pub mod cli;

pub use pooltest_core as core;
pub use pooltest_sim as sim;

/// Prelude module for common imports.
pub mod prelude {
    pub use pooltest_core::{
        ExperimentConfig, InfectedSet, Individual, PoolError, PoolOracle, TestOracle,
        TrialOutcome, TrialRunner,
    };
    pub use pooltest_sim::{Experiment, ExperimentReport, ExperimentStats, SimError};
}
