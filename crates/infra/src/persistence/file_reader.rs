use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Convenience helpers for reading source files with consistent error handling.
///
/// Every handle is opened and dropped inside a single call, so it is
/// released on success and on every error path alike.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory, sized from its metadata up front.
    pub fn read_to_end(path: &Path) -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let hint = file.metadata().map(|m| m.len()).unwrap_or(0);
        let mut buf = Vec::with_capacity(usize::try_from(hint).unwrap_or(0));
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Byte length recorded in the file's metadata, following symlinks.
    pub fn byte_len(path: &Path) -> io::Result<u64> {
        std::fs::metadata(path).map(|m| m.len())
    }
}
