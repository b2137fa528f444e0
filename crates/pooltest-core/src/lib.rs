// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # pooltest-core
//!
//! Adaptive hierarchical group testing over a simulated population.
//!
//! - [`generate_infected`] draws the ground-truth infected set
//! - [`PoolOracle`] answers pooled tests and counts every one of them
//! - [`resolve`] splits positive groups 32 → 9 → 3 → 1 until every
//!   infected individual is isolated
//! - [`TrialRunner`] screens a whole population and checks the result
//!
//! ## Example
//!
//! ```rust
//! use pooltest_core::{ExperimentConfig, InfectedSet, TrialRunner};
//!
//! let config = ExperimentConfig::default().with_population_size(32);
//! let runner = TrialRunner::new(&config)?;
//!
//! let infected: InfectedSet = [5].into_iter().collect();
//! let outcome = runner.run_with_infected(&infected)?;
//! assert_eq!(outcome.confirmed_positive, 1);
//! assert_eq!(outcome.tests_consumed, 11);
//! # Ok::<(), pooltest_core::PoolError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod infection;
pub mod oracle;
pub mod resolver;
pub mod schedule;
pub mod trial;
pub mod types;

pub use config::ExperimentConfig;
pub use error::{PoolError, Result};
pub use infection::generate_infected;
pub use oracle::{PoolOracle, TestOracle, is_positive};
pub use resolver::resolve;
pub use schedule::{TOP_LEVEL, subgroup_size};
pub use trial::TrialRunner;
pub use types::{Group, InfectedSet, Individual, TrialOutcome};
