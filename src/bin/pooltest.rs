//! pooltest: simulate adaptive pooled testing over repeated trials.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin pooltest
//! cargo run --release --bin pooltest -- --trials 10 --seed 42 --json
//! ```

use std::process::ExitCode;

use pooltest::cli::{CliOptions, LOG_ENV, USAGE, log_filter};
use pooltest::prelude::*;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report.
    let directives = std::env::var(LOG_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> Result<(), SimError> {
    let base = match &options.config_path {
        Some(path) => ExperimentConfig::load(path)?,
        None => ExperimentConfig::default(),
    };
    let config = options.apply(base);

    let mut experiment = Experiment::new(config)?;
    let report = experiment.run_with_progress(|index, _| {
        if !options.json {
            println!("Trial: {index}");
        }
    })?;

    if options.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
