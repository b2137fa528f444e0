// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # pooltest-sim
//!
//! Monte Carlo harness for adaptive pooled testing.
//!
//! Runs a [`TrialRunner`](pooltest_core::TrialRunner) a fixed number of
//! times over one random stream and reports the minimum, maximum and
//! average number of tests consumed.
//!
//! ## Example
//!
//! ```rust
//! use pooltest_core::ExperimentConfig;
//! use pooltest_sim::Experiment;
//!
//! let config = ExperimentConfig::default()
//!     .with_population_size(3200)
//!     .with_prevalence(0.01)
//!     .with_trials(3)
//!     .with_seed(1);
//!
//! let report = Experiment::new(config)?.run()?;
//! assert_eq!(report.stats.trials(), 3);
//! # Ok::<(), pooltest_sim::SimError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod experiment;
pub mod report;
pub mod stats;

pub use error::{Result, SimError};
pub use experiment::Experiment;
pub use report::ExperimentReport;
pub use stats::ExperimentStats;
