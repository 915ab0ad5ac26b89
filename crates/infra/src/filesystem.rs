// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ignore::{DirEntry, WalkBuilder};
use keyword_census_ports::filesystem::{DirEntryDto, EntryKind, SourceTree};
use keyword_census_shared_kernel::{CensusError, InfrastructureError, Result};
use tracing::debug;

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `SourceTree` port on the local disk.
///
/// Symlinks are followed and classified by their target. A link back to the
/// listed directory itself is still reported as a directory; the caller
/// compares [`SourceTree::dir_identity`] against its ancestors to stop there.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSourceTree;

impl LocalSourceTree {
    pub fn new() -> Self {
        Self
    }
}

impl SourceTree for LocalSourceTree {
    fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntryDto>> {
        let mut builder = WalkBuilder::new(dir);
        // every entry counts: no hidden-file or ignore-file pruning
        builder.standard_filters(false);
        builder.follow_links(true);
        builder.max_depth(Some(1));

        let mut entries = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) if entry.depth() == 0 => {}
                Ok(entry) => entries.push(DirEntryDto::new(entry.file_name(), entry_kind(&entry))),
                Err(err) => entries.push(unresolved_entry(dir, err)?),
            }
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn dir_identity(&self, dir: &Path) -> Result<PathBuf> {
        fs::canonicalize(dir).map_err(|source| fs_error("canonicalize", dir, source))
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        FileReader::read_to_end(path).map_err(|source| unreadable(path, source))
    }

    fn byte_size(&self, path: &Path) -> Result<u64> {
        FileReader::byte_len(path).map_err(|source| unreadable(path, source))
    }
}

fn entry_kind(entry: &DirEntry) -> EntryKind {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => EntryKind::Directory,
        Some(ft) if ft.is_file() => EntryKind::File,
        _ => EntryKind::Other,
    }
}

/// Turns a per-entry walk error into a listing entry, or fails the listing
/// when the error concerns `dir` itself.
///
/// The walker reports a link to one of its ancestors as a loop error; such a
/// link is still a directory. Dangling links become [`EntryKind::Other`].
fn unresolved_entry(dir: &Path, err: ignore::Error) -> Result<DirEntryDto> {
    let name = failed_path(&err).filter(|path| *path != dir).and_then(Path::file_name).map(ToOwned::to_owned);
    let Some(name) = name else {
        return Err(walk_error(dir, err));
    };
    let kind = if is_loop(&err) { EntryKind::Directory } else { EntryKind::Other };
    debug!(dir = %dir.display(), entry = ?name, error = %err, "entry could not be resolved");
    Ok(DirEntryDto::new(name, kind))
}

fn failed_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => failed_path(err),
        _ => None,
    }
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithPath { err, .. } => is_loop(err),
        _ => false,
    }
}

fn walk_error(dir: &Path, err: ignore::Error) -> CensusError {
    let message = err.to_string();
    let source = err.into_io_error().unwrap_or_else(|| io::Error::other(message));
    fs_error("read_dir", dir, source)
}

fn fs_error(operation: &str, path: &Path, source: io::Error) -> CensusError {
    InfrastructureError::FileSystemOperation {
        operation: operation.to_string(),
        path: PathBuf::from(path),
        source,
    }
    .into()
}

fn unreadable(path: &Path, source: io::Error) -> CensusError {
    InfrastructureError::UnreadableFile { path: PathBuf::from(path), source }.into()
}
