//! Single-pass keyword classifier for C-family source text.
//!
//! The scanner walks the text once, byte by byte, tracking whether the
//! current position is plain code, a comment or a literal. Keywords are
//! only counted while the state is keyword-eligible.

mod classifier;
mod state;

pub use classifier::{keyword_at, scan, scan_str};
pub use state::{Region, ScanState};
