use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::report::DirectoryReport;

/// A directory with its aggregated report and its subdirectories in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    #[serde(serialize_with = "keyword_census_shared_kernel::path::serialize_lossy")]
    pub path: PathBuf,
    pub report: DirectoryReport,
    pub children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Builds a node whose report is `own_files` plus the reports of every child.
    pub fn assemble(path: PathBuf, own_files: DirectoryReport, children: Vec<DirectoryNode>) -> Self {
        let report = own_files + children.iter().map(|child| child.report).sum::<DirectoryReport>();
        Self { path, report, children }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Visits this node and its descendants parents-first, paired with their depth (root = 0).
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![(0, self)] }
    }

    /// Number of directories in this subtree, including this one.
    pub fn directory_count(&self) -> usize {
        self.pre_order().count()
    }
}

/// Iterator returned by [`DirectoryNode::pre_order`].
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a DirectoryNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a DirectoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
