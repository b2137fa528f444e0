//! Command-line options for the `pooltest` binary.

use std::path::PathBuf;

use pooltest_core::ExperimentConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding log directives.
pub const LOG_ENV: &str = "RUST_LOG";

/// Usage text printed by `--help`.
pub const USAGE: &str = r#"pooltest - adaptive pooled testing simulator

USAGE:
    pooltest [OPTIONS]

OPTIONS:
    --config <PATH>       Load experiment parameters from a TOML file
    --trials <N>          Number of repeated trials (default 100)
    --population <N>      Population size (default 1000000)
    --prevalence <F>      Fraction of the population infected (default 0.001)
    --pool-size <N>       Top-level pool size (default 32)
    --seed <N>            Seed the random stream for a reproducible run
    --json                Print the summary as JSON
    --help, -h            Print this help message

Command-line values override those from --config.
Set RUST_LOG=debug for per-trial diagnostics on stderr."#;

/// Invalid command-line usage.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    /// An option that takes a value was last on the line.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// A value did not parse.
    #[error("invalid value for {flag}: {value}")]
    InvalidValue {
        /// The option.
        flag: String,
        /// The rejected value.
        value: String,
    },

    /// Unrecognized option.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// Configuration file to load first.
    pub config_path: Option<PathBuf>,
    /// `--trials` override.
    pub trials: Option<u32>,
    /// `--population` override.
    pub population: Option<usize>,
    /// `--prevalence` override.
    pub prevalence: Option<f64>,
    /// `--pool-size` override.
    pub pool_size: Option<usize>,
    /// `--seed` override.
    pub seed: Option<u64>,
    /// Emit JSON instead of the plain summary.
    pub json: bool,
    /// Print usage and exit.
    pub help: bool,
}

impl CliOptions {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    /// Returns an error for unknown options or unparsable values.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => options.help = true,
                "--json" => options.json = true,
                "--config" => options.config_path = Some(value(&arg, args.next())?.into()),
                "--trials" => options.trials = Some(parse_value(&arg, args.next())?),
                "--population" => options.population = Some(parse_value(&arg, args.next())?),
                "--prevalence" => options.prevalence = Some(parse_value(&arg, args.next())?),
                "--pool-size" => options.pool_size = Some(parse_value(&arg, args.next())?),
                "--seed" => options.seed = Some(parse_value(&arg, args.next())?),
                _ => return Err(CliError::UnknownOption(arg)),
            }
        }

        Ok(options)
    }

    /// Applies the command-line overrides on top of `base`.
    #[must_use]
    pub fn apply(&self, mut base: ExperimentConfig) -> ExperimentConfig {
        if let Some(trials) = self.trials {
            base.num_trials = trials;
        }
        if let Some(population) = self.population {
            base.population_size = population;
        }
        if let Some(prevalence) = self.prevalence {
            base.infection_prevalence = prevalence;
        }
        if let Some(pool_size) = self.pool_size {
            base.top_level_pool_size = pool_size;
        }
        if self.seed.is_some() {
            base.seed = self.seed;
        }
        base
    }
}

/// Builds the log filter from `RUST_LOG`-style directives.
///
/// `warn` applies only when no valid directive is given; explicit
/// directives such as `debug` are kept as written.
#[must_use]
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn value(flag: &str, next: Option<String>) -> Result<String, CliError> {
    next.ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn parse_value<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, CliError> {
    let raw = value(flag, next)?;
    raw.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}
