mod args;
mod value_enum;

pub use args::Args;
use clap::Parser;
use keyword_census_domain::SourceSelector;
use keyword_census_shared_kernel::{ErrorContext, PresentationError, Result};
use keyword_census_usecase::ErrorPolicy;
pub use value_enum::CliOutputFormat;

use crate::config::{Config, LogLevel};

const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: Option<usize>) -> Result<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Parse CLI arguments and materialise a runtime [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a runtime configuration.
///
/// # Errors
///
/// Returns `Err` for an out-of-range `--jobs` or an unusable `--ext`.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_jobs("--jobs", args.jobs)?;
    let selector = SourceSelector::new(args.ext.clone()).context("--ext")?;

    Ok(Config {
        root: args.path.clone(),
        selector,
        format: args.format.into(),
        policy: if args.keep_going { ErrorPolicy::Skip } else { ErrorPolicy::Strict },
        depth: args.depth,
        jobs: args.jobs.unwrap_or_else(num_cpus::get).max(1),
        log_level: LogLevel::from_flags(args.verbose, args.quiet),
    })
}
