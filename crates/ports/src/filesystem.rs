// crates/ports/src/filesystem.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use keyword_census_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// What a directory entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
    /// Sockets, broken links and anything else that is neither.
    ///
    /// Links count as what they point to.
    Other,
}

/// DTO representing one entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntryDto {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntryDto {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Port for the read-only filesystem view the census walks.
///
/// Listings come back in whatever order the backend yields; callers sort.
pub trait SourceTree: Send + Sync {
    /// Immediate entries of `dir`, excluding `.` and `..`.
    fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntryDto>>;

    fn is_dir(&self, path: &Path) -> bool;

    /// Identity of the directory at `dir`; paths that reach the same
    /// directory through links share it.
    fn dir_identity(&self, dir: &Path) -> Result<PathBuf>;

    /// Entire contents of the file at `path`.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Size of the file at `path` according to its metadata.
    fn byte_size(&self, path: &Path) -> Result<u64>;
}
