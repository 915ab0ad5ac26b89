use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use keyword_census_domain::{DirectoryNode, DirectoryReport, FileReport, SourceSelector};
#[cfg(feature = "parallel")]
use keyword_census_shared_kernel::InfrastructureError;
use keyword_census_shared_kernel::{ApplicationError, ByteSize, CensusError, Result};
use keyword_census_ports::filesystem::{DirEntryDto, EntryKind, SourceTree};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::dto::{CensusOutput, SkippedFile};

/// What to do when a single file or subdirectory cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole run; totals are never computed from partial data.
    #[default]
    Strict,
    /// Leave the path out of every total, log a warning and record it in the output.
    Skip,
}

/// Walks a directory tree and folds per-file keyword reports into per-directory ones.
///
/// Files and subdirectories are visited in sorted name order. Every call owns
/// the reports it produces and hands them back by value, so sibling subtrees
/// can be processed in parallel without shared state.
pub struct AggregateTree<'a> {
    tree: &'a dyn SourceTree,
    selector: &'a SourceSelector,
    policy: ErrorPolicy,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    jobs: usize,
}

struct Visit {
    node: DirectoryNode,
    skipped: Vec<SkippedFile>,
}

impl<'a> AggregateTree<'a> {
    pub fn new(tree: &'a dyn SourceTree, selector: &'a SourceSelector) -> Self {
        Self { tree, selector, policy: ErrorPolicy::Strict, jobs: 1 }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Worker threads used for sibling files and subdirectories; `1` runs sequentially.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Builds the full report tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// `InvalidPath` when `root` is not an existing directory, or the first
    /// unreadable path under [`ErrorPolicy::Strict`].
    pub fn run(&self, root: &Path) -> Result<CensusOutput> {
        if !self.tree.is_dir(root) {
            return Err(ApplicationError::InvalidPath { path: root.to_path_buf() }.into());
        }

        let visit = self.execute(|| self.visit(root, &[]))??;
        info!(
            root = %root.display(),
            extension = self.selector.extension(),
            directories = visit.node.directory_count(),
            files = visit.node.report.files.value(),
            skipped = visit.skipped.len(),
            "census complete"
        );
        Ok(CensusOutput { root: visit.node, skipped: visit.skipped })
    }

    /// Aggregated totals for `root` without keeping the tree.
    ///
    /// # Errors
    ///
    /// Same as [`AggregateTree::run`].
    pub fn aggregate(&self, root: &Path) -> Result<DirectoryReport> {
        self.run(root).map(|output| output.root.report)
    }

    /// Classifies one file, taking its size from metadata.
    ///
    /// # Errors
    ///
    /// Fails when the size or the contents of `path` cannot be read.
    pub fn examine_file(&self, path: &Path) -> Result<FileReport> {
        let size = self.tree.byte_size(path)?;
        let contents = self.tree.read_bytes(path)?;
        debug!(path = %path.display(), size, "classifying file");
        Ok(FileReport::classify(ByteSize::from(size), &contents))
    }

    /// `parents` holds the identities of every directory above `dir`, root first.
    fn visit(&self, dir: &Path, parents: &[PathBuf]) -> Result<Visit> {
        debug!(dir = %dir.display(), depth = parents.len(), "entering directory");
        let mut skipped = Vec::new();

        let identity = match self.tree.dir_identity(dir) {
            Ok(identity) => identity,
            Err(err) => return self.unlisted(dir, parents, err),
        };
        if parents.contains(&identity) {
            warn!(dir = %dir.display(), target = %identity.display(), "not descending into directory link cycle");
            return Ok(Visit { node: leaf(dir), skipped });
        }
        let entries = match self.tree.list_dir(dir) {
            Ok(entries) => entries,
            Err(err) => return self.unlisted(dir, parents, err),
        };
        let (files, subdirs) = self.partition(entries);

        let mut own = DirectoryReport::empty();
        let file_paths: Vec<PathBuf> = files.iter().map(|name| dir.join(name)).collect();
        let file_results = self.map_each(&file_paths, |path| self.examine_file(path));
        for (path, result) in file_paths.iter().zip(file_results) {
            match result {
                Ok(report) => own.add_file(&report),
                Err(err) => self.tolerate(path, err, &mut skipped)?,
            }
        }

        let subdir_paths: Vec<PathBuf> = subdirs.iter().map(|name| dir.join(name)).collect();
        let mut lineage = parents.to_vec();
        lineage.push(identity);
        let mut children = Vec::with_capacity(subdir_paths.len());
        for visit in self.map_each(&subdir_paths, |path| self.visit(path, &lineage)) {
            let visit = visit?;
            skipped.extend(visit.skipped);
            children.push(visit.node);
        }

        Ok(Visit { node: DirectoryNode::assemble(dir.to_path_buf(), own, children), skipped })
    }

    /// An unlistable root is fatal; below it the policy decides.
    fn unlisted(&self, dir: &Path, parents: &[PathBuf], err: CensusError) -> Result<Visit> {
        if parents.is_empty() {
            return Err(err);
        }
        let mut skipped = Vec::new();
        self.tolerate(dir, err, &mut skipped)?;
        Ok(Visit { node: leaf(dir), skipped })
    }

    /// Splits a listing into eligible file names and subdirectory names, both sorted.
    fn partition(&self, entries: Vec<DirEntryDto>) -> (Vec<OsString>, Vec<OsString>) {
        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in entries {
            match entry.kind {
                EntryKind::Directory => subdirs.push(entry.name),
                EntryKind::File if self.selector.matches(&entry.name) => files.push(entry.name),
                EntryKind::File | EntryKind::Other => {}
            }
        }
        files.sort_unstable();
        subdirs.sort_unstable();
        (files, subdirs)
    }

    fn tolerate(&self, path: &Path, err: CensusError, skipped: &mut Vec<SkippedFile>) -> Result<()> {
        if self.policy == ErrorPolicy::Skip && err.is_path_failure() {
            warn!(path = %path.display(), error = %err, "skipping unreadable path");
            skipped.push(SkippedFile { path: path.to_path_buf(), reason: err.to_string() });
            return Ok(());
        }
        Err(err)
    }

    #[cfg(feature = "parallel")]
    fn map_each<R, F>(&self, paths: &[PathBuf], f: F) -> Vec<R>
    where
        R: Send,
        F: Fn(&PathBuf) -> R + Sync + Send,
    {
        if self.jobs > 1 {
            return paths.par_iter().map(f).collect();
        }
        paths.iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_each<R, F>(&self, paths: &[PathBuf], f: F) -> Vec<R>
    where
        F: Fn(&PathBuf) -> R,
    {
        paths.iter().map(f).collect()
    }

    #[cfg(feature = "parallel")]
    fn execute<R, F>(&self, job: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        if self.jobs == 1 {
            return Ok(job());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;
        Ok(pool.install(job))
    }

    #[cfg(not(feature = "parallel"))]
    fn execute<R, F>(&self, job: F) -> Result<R>
    where
        F: FnOnce() -> R,
    {
        Ok(job())
    }
}

fn leaf(dir: &Path) -> DirectoryNode {
    DirectoryNode::assemble(dir.to_path_buf(), DirectoryReport::empty(), Vec::new())
}
