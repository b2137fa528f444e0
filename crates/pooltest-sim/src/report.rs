//! Experiment report.

use std::fmt;

use pooltest_core::ExperimentConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::ExperimentStats;

/// Summary of a completed experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Parameters the experiment ran with.
    pub config: ExperimentConfig,
    /// Infected individuals per trial.
    pub infected_per_trial: usize,
    /// Aggregate statistics.
    pub stats: ExperimentStats,
    /// Tests consumed by each trial, in run order.
    pub tests_per_trial: Vec<u64>,
}

impl ExperimentReport {
    /// Fewest tests any trial consumed.
    #[must_use]
    pub fn min_tests(&self) -> u64 {
        self.stats.min()
    }

    /// Most tests any trial consumed.
    #[must_use]
    pub const fn max_tests(&self) -> u64 {
        self.stats.max()
    }

    /// Average tests per trial, truncated toward zero.
    #[must_use]
    pub fn average_tests(&self) -> u64 {
        self.stats.average()
    }

    /// Mean tests per individual screened; 1.0 is the cost of testing
    /// everyone separately.
    #[must_use]
    pub fn tests_per_individual(&self) -> f64 {
        if self.config.population_size == 0 {
            0.0
        } else {
            self.stats.mean() / self.config.population_size as f64
        }
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum tests: {}", self.min_tests())?;
        writeln!(f, "Maximum tests: {}", self.max_tests())?;
        write!(f, "Average tests: {}", self.average_tests())
    }
}
