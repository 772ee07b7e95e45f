use std::path::PathBuf;

/// The primary error type for all operations in the `xorpad` crate.
#[derive(Debug)]
pub enum CipherError {
    /// An invalid or missing command-line parameter (e.g. a zero modulus).
    Argument(String),

    /// An I/O error occurred, typically while reading or writing a file.
    /// Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },

    /// A buffer reservation failed. The keystream and output buffers are
    /// sized to the whole input, so very large files can exhaust memory.
    Allocation(String),

    /// A worker thread could not be spawned.
    Concurrency(String),
}

impl std::fmt::Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherError::Argument(msg) => write!(f, "Invalid argument: {}", msg),
            CipherError::Io { source, path } => write!(f, "I/O error on path '{}': {}", path.display(), source),
            CipherError::Allocation(msg) => write!(f, "Allocation failed: {}", msg),
            CipherError::Concurrency(msg) => write!(f, "Concurrency error: {}", msg),
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CipherError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CipherError {
    /// Attach a path to a bare `std::io::Error`.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CipherError::Io { source, path: path.into() }
    }
}

impl From<std::collections::TryReserveError> for CipherError {
    fn from(err: std::collections::TryReserveError) -> Self {
        CipherError::Allocation(err.to_string())
    }
}
