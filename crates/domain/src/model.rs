pub mod report;
pub mod tree;

pub use report::{DirectoryReport, FileReport};
pub use tree::{DirectoryNode, PreOrder};
