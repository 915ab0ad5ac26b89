//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: listing directories, reading source files and their sizes
//!
//! The use cases only see these traits, so they can be driven by an
//! in-memory tree in tests and by the local filesystem in the binary.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

pub use filesystem::{DirEntryDto, EntryKind, SourceTree};
