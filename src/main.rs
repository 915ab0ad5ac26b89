// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use keyword_census::{
    app::{self, Outcome},
    cli, logging,
};

/// Exit status when a report was printed but some paths were skipped.
const EXIT_PARTIAL: u8 = 2;

fn main() -> ExitCode {
    let config = match cli::load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_level);
    tracing::debug!(?config, "configuration loaded");

    match app::run(&config) {
        Ok(Outcome::Complete) => ExitCode::SUCCESS,
        Ok(Outcome::Partial { .. }) => ExitCode::from(EXIT_PARTIAL),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
