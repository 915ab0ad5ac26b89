use std::ffi::OsStr;

use keyword_census_shared_kernel::{DomainError, DomainResult};

pub const DEFAULT_EXTENSION: &str = ".java";

/// Decides which file names take part in a census.
///
/// The suffix is compared byte-for-byte and case-sensitively, so `Main.JAVA`
/// is not a match. A name must be at least as long as the suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSelector {
    extension: String,
}

impl SourceSelector {
    pub fn new(extension: impl Into<String>) -> DomainResult<Self> {
        let extension = extension.into();
        if extension.is_empty() {
            return Err(DomainError::InvalidExtension {
                extension,
                reason: "must not be empty".to_string(),
            });
        }
        if extension.contains(['/', '\\']) {
            return Err(DomainError::InvalidExtension {
                extension,
                reason: "must not contain a path separator".to_string(),
            });
        }
        Ok(Self { extension })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        let suffix = self.extension.as_bytes();
        name.len() >= suffix.len() && name.ends_with(suffix)
    }
}

impl Default for SourceSelector {
    fn default() -> Self {
        Self { extension: DEFAULT_EXTENSION.to_string() }
    }
}
