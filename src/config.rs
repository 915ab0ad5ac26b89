// src/config.rs
use std::path::PathBuf;

use keyword_census_domain::SourceSelector;
use keyword_census_usecase::ErrorPolicy;

/// How the finished census is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two lines per directory, parents before children.
    #[default]
    Text,
    Json,
}

/// Log verbosity requested on the command line. `RUST_LOG` overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Error,
            (false, 0) => Self::Warn,
            (false, 1) => Self::Info,
            (false, _) => Self::Debug,
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Immutable runtime settings for one census run.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub selector: SourceSelector,
    pub format: OutputFormat,
    pub policy: ErrorPolicy,
    /// Deepest directory level printed; `None` prints the whole tree.
    pub depth: Option<usize>,
    pub jobs: usize,
    pub log_level: LogLevel,
}
