//! # Domain
//!
//! Pure logic of the census, free of any I/O:
//!
//! - [`lexer`]: the comment/literal aware keyword classifier
//! - [`model`]: per-file and per-directory reports and the report tree
//! - [`selection`]: which file names take part in a census

#![allow(clippy::multiple_crate_versions)]

pub mod lexer;
pub mod model;
pub mod selection;

pub use lexer::{ScanState, scan};
pub use model::{DirectoryNode, DirectoryReport, FileReport};
pub use selection::SourceSelector;
