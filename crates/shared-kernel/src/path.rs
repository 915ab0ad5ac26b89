// crates/shared-kernel/src/path.rs
use std::path::Path;

use serde::Serializer;

/// Writes a path as a string, replacing bytes that are not valid UTF-8.
///
/// Use with `#[serde(serialize_with = "...")]`; plain `PathBuf` serialization
/// fails on such names.
pub fn serialize_lossy<P, S>(path: &P, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
