// crates/shared-kernel/src/value_objects/tally.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// One of the four markers tracked per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Public,
    Private,
    Try,
    Catch,
}

impl Keyword {
    /// Match priority: at a given position only the first hit in this order counts.
    pub const ALL: [Keyword; 4] = [Self::Public, Self::Private, Self::Try, Self::Catch];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Try => "try",
            Self::Catch => "catch",
        }
    }

    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occurrence counts of the four keywords for a file or a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordTally {
    pub public: usize,
    pub private: usize,
    #[serde(rename = "try")]
    pub try_: usize,
    pub catch: usize,
}

impl KeywordTally {
    #[inline]
    pub const fn new(public: usize, private: usize, try_: usize, catch: usize) -> Self {
        Self { public, private, try_, catch }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn get(&self, keyword: Keyword) -> usize {
        match keyword {
            Keyword::Public => self.public,
            Keyword::Private => self.private,
            Keyword::Try => self.try_,
            Keyword::Catch => self.catch,
        }
    }

    /// Counts one more occurrence of `keyword`.
    pub fn record(&mut self, keyword: Keyword) {
        match keyword {
            Keyword::Public => self.public += 1,
            Keyword::Private => self.private += 1,
            Keyword::Try => self.try_ += 1,
            Keyword::Catch => self.catch += 1,
        }
    }

    pub const fn total(&self) -> usize {
        self.public + self.private + self.try_ + self.catch
    }

    pub const fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

impl Add for KeywordTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            public: self.public + rhs.public,
            private: self.private + rhs.private,
            try_: self.try_ + rhs.try_,
            catch: self.catch + rhs.catch,
        }
    }
}

impl AddAssign for KeywordTally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for KeywordTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a KeywordTally> for KeywordTally {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(usize, usize, usize, usize)> for KeywordTally {
    fn from((public, private, try_, catch): (usize, usize, usize, usize)) -> Self {
        Self::new(public, private, try_, catch)
    }
}
