//! Experiment harness.
//!
//! Repeats independent trials over one shared random stream and folds
//! their test counts into [`ExperimentStats`]. Trials run strictly in
//! sequence; the first failing trial aborts the whole experiment.

use pooltest_core::{ExperimentConfig, TrialOutcome, TrialRunner};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::report::ExperimentReport;
use crate::stats::ExperimentStats;

/// Monte Carlo experiment over repeated trials.
#[derive(Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    runner: TrialRunner,
    rng: StdRng,
}

impl Experiment {
    /// Creates an experiment, seeding the random stream from
    /// `config.seed` or, when absent, from the OS.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates an experiment drawing from the given random stream.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_rng(config: ExperimentConfig, rng: StdRng) -> Result<Self> {
        let runner = TrialRunner::new(&config)?;
        Ok(Self {
            config,
            runner,
            rng,
        })
    }

    /// Returns the experiment config.
    #[must_use]
    pub const fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every trial, reporting progress through tracing only.
    ///
    /// # Errors
    /// Returns an error if any trial fails its invariant check.
    pub fn run(&mut self) -> Result<ExperimentReport> {
        self.run_with_progress(|_, _| {})
    }

    /// Runs every trial, calling `progress` with the trial index and
    /// outcome after each one completes.
    ///
    /// # Errors
    /// Returns an error if any trial fails its invariant check; later
    /// trials are not run.
    pub fn run_with_progress<F>(&mut self, mut progress: F) -> Result<ExperimentReport>
    where
        F: FnMut(u32, &TrialOutcome),
    {
        tracing::info!(
            population = self.config.population_size,
            infected = self.runner.infection_count(),
            pool_size = self.config.top_level_pool_size,
            trials = self.config.num_trials,
            seed = ?self.config.seed,
            "starting pooled testing experiment"
        );

        let mut stats = ExperimentStats::new();
        let mut tests_per_trial = Vec::with_capacity(self.config.num_trials as usize);

        for index in 0..self.config.num_trials {
            let outcome = self.runner.run(&mut self.rng)?;
            stats.record(outcome.tests_consumed);
            tests_per_trial.push(outcome.tests_consumed);

            tracing::debug!(
                trial = index,
                tests = outcome.tests_consumed,
                positives = outcome.confirmed_positive,
                "trial completed"
            );
            progress(index, &outcome);
        }

        let report = ExperimentReport {
            config: self.config.clone(),
            infected_per_trial: self.runner.infection_count(),
            stats,
            tests_per_trial,
        };

        tracing::info!(
            min = report.min_tests(),
            max = report.max_tests(),
            average = report.average_tests(),
            tests_per_individual = format!("{:.4}", report.tests_per_individual()),
            "experiment completed"
        );

        Ok(report)
    }
}
