//! Trial runner.
//!
//! One trial screens the whole population: draw the infected set, split
//! the population into consecutive top-level pools, resolve each pool and
//! check that every infected individual was confirmed.

use rand::Rng;

use crate::config::ExperimentConfig;
use crate::error::{PoolError, Result};
use crate::infection::generate_infected;
use crate::oracle::{PoolOracle, TestOracle};
use crate::resolver::resolve;
use crate::schedule::TOP_LEVEL;
use crate::types::{InfectedSet, Individual, TrialOutcome};

/// Runs trials over a fixed population.
///
/// The population listing is built once and reused; all per-trial state
/// (test counter, confirmed positives) lives inside a single call.
#[derive(Debug, Clone)]
pub struct TrialRunner {
    population: Vec<Individual>,
    pool_size: usize,
    infection_count: usize,
}

impl TrialRunner {
    /// Creates a runner for a validated configuration.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidConfiguration`] if the configuration
    /// does not validate.
    pub fn new(config: &ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let upper = Individual::try_from(config.population_size)
            .map_err(|_| PoolError::invalid_config("population_size too large"))?;

        Ok(Self {
            population: (0..upper).collect(),
            pool_size: config.top_level_pool_size,
            infection_count: config.infection_count(),
        })
    }

    /// Individuals screened per trial.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Infected individuals drawn per trial.
    #[must_use]
    pub const fn infection_count(&self) -> usize {
        self.infection_count
    }

    /// Number of top-level pools, counting a short trailing pool.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.population.len().div_ceil(self.pool_size)
    }

    /// Runs one trial with a freshly drawn infected set.
    ///
    /// # Errors
    /// Returns [`PoolError::InvariantViolation`] if the resolver does not
    /// confirm exactly the infected individuals.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialOutcome> {
        let infected = generate_infected(rng, self.population.len(), self.infection_count)?;
        self.run_with_infected(&infected)
    }

    /// Runs one trial against a caller-supplied infected set.
    ///
    /// # Errors
    /// Returns [`PoolError::InvariantViolation`] if the resolver does not
    /// confirm exactly the infected individuals.
    pub fn run_with_infected(&self, infected: &InfectedSet) -> Result<TrialOutcome> {
        let mut oracle = PoolOracle::new(infected);
        let mut confirmed_positive = 0;
        let mut pools = 0;

        for pool in self.population.chunks(self.pool_size) {
            confirmed_positive += resolve(&mut oracle, pool, TOP_LEVEL);
            pools += 1;
        }

        let outcome = TrialOutcome {
            tests_consumed: oracle.tests_consumed(),
            confirmed_positive,
            infected: infected.len(),
            pools,
        };

        if outcome.confirmed_positive != outcome.infected {
            tracing::error!(
                expected = outcome.infected,
                found = outcome.confirmed_positive,
                "pooling failed to isolate every infected individual"
            );
            return Err(PoolError::InvariantViolation {
                expected: outcome.infected,
                found: outcome.confirmed_positive,
            });
        }

        Ok(outcome)
    }
}
