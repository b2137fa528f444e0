//! Running statistics over trial test counts.

use serde::{Deserialize, Serialize};

/// Min/max/sum of tests consumed, accumulated one trial at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentStats {
    trials: u32,
    min: Option<u64>,
    max: u64,
    total: u64,
}

impl ExperimentStats {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trials: 0,
            min: None,
            max: 0,
            total: 0,
        }
    }

    /// Records the test count of one completed trial.
    pub fn record(&mut self, tests: u64) {
        self.trials += 1;
        self.min = Some(self.min.map_or(tests, |min| min.min(tests)));
        self.max = self.max.max(tests);
        self.total += tests;
    }

    /// Trials recorded so far.
    #[must_use]
    pub const fn trials(&self) -> u32 {
        self.trials
    }

    /// Fewest tests any trial consumed (0 before any trial).
    #[must_use]
    pub fn min(&self) -> u64 {
        self.min.unwrap_or(0)
    }

    /// Most tests any trial consumed.
    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Tests consumed across all trials.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Average tests per trial, truncated toward zero.
    #[must_use]
    pub fn average(&self) -> u64 {
        if self.trials == 0 {
            0
        } else {
            self.total / u64::from(self.trials)
        }
    }

    /// Average tests per trial without truncation.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total as f64 / f64::from(self.trials)
        }
    }
}
