// src/app.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use keyword_census_infra::LocalSourceTree;
use keyword_census_usecase::AggregateTree;

use crate::{config::Config, presentation};

/// How a run that produced a report ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    /// Some paths were left out under `--keep-going`.
    Partial { skipped: usize },
}

/// Scans `config.root`, prints the report to stdout and reports any skipped paths.
///
/// # Errors
///
/// Fails on an invalid root, on the first unreadable path in strict mode, or
/// when stdout cannot be written.
pub fn run(config: &Config) -> Result<Outcome> {
    let tree = LocalSourceTree::new();
    let output = AggregateTree::new(&tree, &config.selector)
        .with_policy(config.policy)
        .with_jobs(config.jobs)
        .run(&config.root)
        .with_context(|| format!("cannot scan '{}'", config.root.display()))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    presentation::render(&mut out, &output, config.format, config.depth).context("failed to write report")?;
    out.flush().context("failed to write report")?;

    if output.is_complete() {
        return Ok(Outcome::Complete);
    }
    eprintln!("warning: skipped {} unreadable path(s)", output.skipped.len());
    Ok(Outcome::Partial { skipped: output.skipped.len() })
}
