// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "keyword_census",
    version = crate::VERSION,
    about = "Counts public/private/try/catch outside comments and literals, per directory"
)]
pub struct Args {
    /// Root directory to scan
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// File name suffix selecting source files (case-sensitive)
    #[arg(long, default_value = ".java", help_heading = "Selection")]
    pub ext: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Print at most N directory levels below the root (counts still cover the whole tree)
    #[arg(long, value_name = "N", help_heading = "Output")]
    pub depth: Option<usize>,

    /// Skip unreadable files and directories instead of aborting (exit code 2 when any were skipped)
    #[arg(long, help_heading = "Behavior")]
    pub keep_going: bool,

    /// Worker threads for scanning (default: number of CPUs)
    #[arg(short, long, help_heading = "Behavior")]
    pub jobs: Option<usize>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
