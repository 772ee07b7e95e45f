//! Cross-platform file loading and writing.
//!
//! On Unix a non-empty input is memory-mapped read-only; on Windows, and for
//! empty files (which cannot be mapped), the bytes are read into a heap
//! buffer instead. Both backings sit behind [`InputBuffer`], so call-sites
//! see one `load` operation and one read-only byte view regardless of OS.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::CipherError;

/// A fully loaded input file.
#[derive(Debug)]
pub enum InputBuffer {
    /// Read-only memory mapping (Unix, non-empty files).
    #[cfg(unix)]
    Mapped(memmap2::Mmap),
    /// Owned heap copy of the file contents.
    Heap(Vec<u8>),
}

impl InputBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            #[cfg(unix)]
            InputBuffer::Mapped(map) => map,
            InputBuffer::Heap(buf) => buf,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Load the whole file at `path` into an [`InputBuffer`].
pub fn load(path: &Path) -> Result<InputBuffer, CipherError> {
    let mut file = File::open(path).map_err(|e| CipherError::io(e, path))?;
    let len = file.metadata().map_err(|e| CipherError::io(e, path))?.len();

    #[cfg(unix)]
    if len > 0 {
        // SAFETY: the mapping is read-only and lives only for this run.
        // Concurrent mutation of the input file is outside supported usage,
        // as with any mmap-backed reader.
        let map = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| CipherError::io(e, path))?;
        return Ok(InputBuffer::Mapped(map));
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(len as usize)?;
    file.read_to_end(&mut buf).map_err(|e| CipherError::io(e, path))?;
    Ok(InputBuffer::Heap(buf))
}

/// Create or truncate `path` and write all of `bytes` to it.
pub fn write(path: &Path, bytes: &[u8]) -> Result<(), CipherError> {
    let mut file = File::create(path).map_err(|e| CipherError::io(e, path))?;
    file.write_all(bytes).map_err(|e| CipherError::io(e, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_reads_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.bin");
        std::fs::write(&path, [1u8, 2, 3, 4, 5]).unwrap();

        let buf = load(&path).unwrap();
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5]);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        std::fs::write(&path, []).unwrap();

        let buf = load(&path).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load(Path::new("/no/such/file.bin")).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.bin"));
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, [9u8; 100]).unwrap();

        write(&path, &[1, 2, 3]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }
}
