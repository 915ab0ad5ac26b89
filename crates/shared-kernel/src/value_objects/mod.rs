// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod tally;

pub use counts::{ByteSize, FileCount};
pub use tally::{Keyword, KeywordTally};
