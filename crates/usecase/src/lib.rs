//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate drives the domain classifier over a [`SourceTree`] port:
//!
//! - [`orchestrator`]: recursive aggregation of a directory tree
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.
//!
//! [`SourceTree`]: keyword_census_ports::SourceTree

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{CensusOutput, SkippedFile};
pub use orchestrator::{AggregateTree, ErrorPolicy};
