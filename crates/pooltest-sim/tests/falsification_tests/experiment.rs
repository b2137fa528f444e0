//! Falsification Tests: Category D - Experiment Harness (F018-F022)

use pooltest_core::ExperimentConfig;
use pooltest_sim::{Experiment, SimError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config(trials: u32) -> ExperimentConfig {
    ExperimentConfig::default()
        .with_population_size(32_000)
        .with_prevalence(0.001)
        .with_trials(trials)
}

/// F018: One trial at zero prevalence reports min == max == average
#[test]
fn f018_single_clean_trial_flat_statistics() {
    let report = Experiment::new(config(1).with_prevalence(0.0))
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.min_tests(), 1000);
    assert_eq!(report.max_tests(), 1000);
    assert_eq!(report.average_tests(), 1000, "F018 FALSIFIED");
}

/// F019: Summary statistics agree with the per-trial record
#[test]
fn f019_summary_matches_trials() {
    let report = Experiment::with_rng(config(20), StdRng::seed_from_u64(19))
        .unwrap()
        .run()
        .unwrap();

    let tests = &report.tests_per_trial;
    assert_eq!(tests.len(), 20);
    assert_eq!(report.min_tests(), *tests.iter().min().unwrap());
    assert_eq!(report.max_tests(), *tests.iter().max().unwrap());
    assert_eq!(
        report.average_tests(),
        tests.iter().sum::<u64>() / 20,
        "F019 FALSIFIED: average is not truncating division"
    );
}

/// F020: Pooling beats individual testing at low prevalence
#[test]
fn f020_pooling_saves_tests() {
    let report = Experiment::with_rng(config(5), StdRng::seed_from_u64(20))
        .unwrap()
        .run()
        .unwrap();
    assert!(
        report.tests_per_individual() < 0.1,
        "F020 FALSIFIED: {} tests per individual",
        report.tests_per_individual()
    );
}

/// F021: Invalid configuration aborts before any trial runs
#[test]
fn f021_invalid_config_aborts() {
    let mut trials_run = 0;
    let result = Experiment::new(config(3).with_population_size(0))
        .and_then(|mut e| e.run_with_progress(|_, _| trials_run += 1));
    assert!(matches!(result, Err(SimError::Pool(_))));
    assert_eq!(trials_run, 0, "F021 FALSIFIED: trials ran on bad config");
}

/// F022: Progress is reported once per trial, in order
#[test]
fn f022_progress_per_trial() {
    let mut indices = Vec::new();
    Experiment::with_rng(config(4), StdRng::seed_from_u64(22))
        .unwrap()
        .run_with_progress(|index, outcome| {
            assert_eq!(outcome.confirmed_positive, outcome.infected);
            indices.push(index);
        })
        .unwrap();
    assert_eq!(indices, vec![0, 1, 2, 3], "F022 FALSIFIED");
}
