use std::path::PathBuf;

use keyword_census_domain::DirectoryNode;
use serde::{Deserialize, Serialize};

/// A path left out of the totals under [`crate::ErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    #[serde(serialize_with = "keyword_census_shared_kernel::path::serialize_lossy")]
    pub path: PathBuf,
    pub reason: String,
}

/// Everything one census run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusOutput {
    pub root: DirectoryNode,
    pub skipped: Vec<SkippedFile>,
}

impl CensusOutput {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
