//! Error types for chunkfile.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or reading a chunked file.
///
/// End-of-stream is not an error: sequential reads report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// The path does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Filesystem metadata for the path could not be queried.
    #[error("could not stat {}: {source}", .path.display())]
    Stat {
        /// The path that was inspected.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The path exists but is a directory, device or other special entity.
    #[error("cannot read by chunks on non file entity: {}", .path.display())]
    NotRegularFile {
        /// The offending path.
        path: PathBuf,
    },

    /// The file could not be opened for reading.
    #[error("could not open {}: {source}", .path.display())]
    Open {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Repositioning the file cursor failed.
    #[error("seek to offset {offset} failed: {source}")]
    Seek {
        /// The absolute offset requested.
        offset: u64,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The underlying read call failed or produced no data where some was required.
    #[error("read failure: {0}")]
    Read(#[from] io::Error),

    /// A chunk index outside `[0, count)` was requested.
    #[error("chunk index {index} out of range (whole chunks: {count})")]
    OutOfRange {
        /// The requested chunk index.
        index: u64,
        /// The number of whole chunks in the file.
        count: u64,
    },

    /// The reader was already disposed.
    #[error("reader has been disposed")]
    Disposed,

    /// An argument was rejected before any I/O took place.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl ChunkError {
    /// Returns true if this error reports use of a disposed reader.
    pub fn is_disposed(&self) -> bool {
        matches!(self, ChunkError::Disposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::Other, "test");
        let err: ChunkError = io_err.into();
        assert!(matches!(err, ChunkError::Read(_)));
    }

    #[test]
    fn test_display() {
        let err = ChunkError::OutOfRange { index: 2, count: 2 };
        assert!(err.to_string().contains("out of range"));

        let err = ChunkError::NotRegularFile {
            path: PathBuf::from("/tmp"),
        };
        assert!(err.to_string().contains("/tmp"));
    }

    #[test]
    fn test_source_is_kept() {
        use std::error::Error as _;

        let err = ChunkError::Stat {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(ChunkError::Disposed.source().is_none());
    }

    #[test]
    fn test_is_disposed() {
        assert!(ChunkError::Disposed.is_disposed());
        assert!(!ChunkError::InvalidArgument { message: "x" }.is_disposed());
    }
}
