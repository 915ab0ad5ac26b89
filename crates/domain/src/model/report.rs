use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use keyword_census_shared_kernel::{ByteSize, FileCount, KeywordTally};
use serde::{Deserialize, Serialize};

use crate::lexer::scan;

/// Result of classifying a single source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Size taken from filesystem metadata, not from the scanned text.
    pub size: ByteSize,
    pub tally: KeywordTally,
}

impl FileReport {
    pub const fn new(size: ByteSize, tally: KeywordTally) -> Self {
        Self { size, tally }
    }

    /// Classifies `contents` and pairs the tally with the metadata size.
    pub fn classify(size: ByteSize, contents: &[u8]) -> Self {
        Self::new(size, scan(contents))
    }
}

/// Totals for a directory and everything below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub size: ByteSize,
    pub tally: KeywordTally,
    pub files: FileCount,
}

impl DirectoryReport {
    pub const fn empty() -> Self {
        Self { size: ByteSize::zero(), tally: KeywordTally::zero(), files: FileCount::zero() }
    }

    pub fn add_file(&mut self, file: &FileReport) {
        *self += DirectoryReport::from(*file);
    }
}

impl From<FileReport> for DirectoryReport {
    fn from(file: FileReport) -> Self {
        Self { size: file.size, tally: file.tally, files: FileCount::one() }
    }
}

impl Add for DirectoryReport {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            size: self.size + rhs.size,
            tally: self.tally + rhs.tally,
            files: self.files + rhs.files,
        }
    }
}

impl AddAssign for DirectoryReport {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for DirectoryReport {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::empty(), Add::add)
    }
}

impl<'a> Sum<&'a DirectoryReport> for DirectoryReport {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<FileReport> for DirectoryReport {
    fn sum<I: Iterator<Item = FileReport>>(iter: I) -> Self {
        iter.map(DirectoryReport::from).sum()
    }
}
