//! Experiment configuration.
//!
//! Parameters are validated before any trial runs, with the reference
//! defaults applied to every field a configuration file omits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, Result};
use crate::types::Individual;

/// Default population size.
pub const DEFAULT_POPULATION_SIZE: usize = 1_000_000;
/// Default fraction of the population that is infected.
pub const DEFAULT_INFECTION_PREVALENCE: f64 = 0.001;
/// Default size of a top-level pool.
pub const DEFAULT_TOP_LEVEL_POOL_SIZE: usize = 32;
/// Default number of repeated trials.
pub const DEFAULT_NUM_TRIALS: u32 = 100;

/// Parameters of a pooled-testing experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Total individuals screened per trial.
    pub population_size: usize,

    /// Fraction of the population infected (0.0 to 1.0).
    pub infection_prevalence: f64,

    /// Size of the pools the population is first split into.
    pub top_level_pool_size: usize,

    /// Number of repeated trials.
    pub num_trials: u32,

    /// Seed for the shared random stream. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            infection_prevalence: DEFAULT_INFECTION_PREVALENCE,
            top_level_pool_size: DEFAULT_TOP_LEVEL_POOL_SIZE,
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Sets the population size.
    #[must_use]
    pub const fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the infection prevalence.
    #[must_use]
    pub const fn with_prevalence(mut self, prevalence: f64) -> Self {
        self.infection_prevalence = prevalence;
        self
    }

    /// Sets the top-level pool size.
    #[must_use]
    pub const fn with_top_level_pool_size(mut self, pool_size: usize) -> Self {
        self.top_level_pool_size = pool_size;
        self
    }

    /// Sets the number of trials.
    #[must_use]
    pub const fn with_trials(mut self, num_trials: u32) -> Self {
        self.num_trials = num_trials;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of infected individuals per trial: `floor(population × prevalence)`.
    #[must_use]
    pub fn infection_count(&self) -> usize {
        (self.population_size as f64 * self.infection_prevalence).floor() as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidConfiguration`] if any size is zero, the
    /// population does not fit the identifier type, or the prevalence is not
    /// a finite fraction.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(PoolError::invalid_config("population_size must be positive"));
        }
        if Individual::try_from(self.population_size).is_err() {
            return Err(PoolError::invalid_config(format!(
                "population_size {} exceeds the supported maximum of {}",
                self.population_size,
                Individual::MAX
            )));
        }
        if self.top_level_pool_size == 0 {
            return Err(PoolError::invalid_config(
                "top_level_pool_size must be positive",
            ));
        }
        if self.num_trials == 0 {
            return Err(PoolError::invalid_config("num_trials must be positive"));
        }
        if !self.infection_prevalence.is_finite()
            || !(0.0..=1.0).contains(&self.infection_prevalence)
        {
            return Err(PoolError::invalid_config(format!(
                "infection_prevalence must be within [0, 1], got {}",
                self.infection_prevalence
            )));
        }
        let infected = self.infection_count();
        if infected > self.population_size {
            return Err(PoolError::invalid_config(format!(
                "infection count {infected} exceeds population size {}",
                self.population_size
            )));
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PoolError::config_load(format!("failed to read config: {e}")))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or validated.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| PoolError::config_load(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
