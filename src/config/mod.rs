//! Configuration for chunked reading.
//!
//! - [`ReaderConfig`] - Chunk size, start offset and hashing
//! - [`HashConfig`] - Hash computation control
//!
//! # Example
//!
//! ```
//! use chunkfile::{HashConfig, ReaderConfig};
//!
//! let config = ReaderConfig::new(4096)?
//!     .with_start_offset(512)
//!     .with_hash_config(HashConfig::enabled());
//!
//! assert_eq!(config.chunk_size(), 4096);
//! # Ok::<(), chunkfile::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default chunk size (1 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Construction parameters for a [`ChunkedFileReader`](crate::ChunkedFileReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderConfig {
    chunk_size: usize,
    start_offset: u64,
    hash_config: HashConfig,
}

impl ReaderConfig {
    /// Creates a configuration with the given chunk capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidArgument`] if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Result<Self, ChunkError> {
        if chunk_size == 0 {
            return Err(ChunkError::InvalidArgument {
                message: "chunk size must be non-zero",
            });
        }

        Ok(Self {
            chunk_size,
            ..Self::default()
        })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Use [`ReaderConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Sets the absolute byte offset reading starts from.
    pub fn with_start_offset(mut self, offset: u64) -> Self {
        self.start_offset = offset;
        self
    }

    /// Sets the hash configuration.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the start offset.
    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Validates the current configuration.
    ///
    /// The start offset can only be checked against a file size, which
    /// happens when the reader is opened.
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            start_offset: 0,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for chunk hashing.
///
/// Controls whether BLAKE3 hashes are computed for each chunk. Hashing is
/// disabled by default; enabling it has no effect without the `hash-blake3`
/// feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new hash configuration.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables hashing.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_config_default() {
        let config = ReaderConfig::default();
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config.start_offset(), 0);
        assert!(!config.hash_config().enabled);
    }

    #[test]
    fn test_reader_config_builder() {
        let config = ReaderConfig::default()
            .with_chunk_size(8192)
            .with_start_offset(100)
            .with_hash_config(HashConfig::enabled());
        assert_eq!(config.chunk_size(), 8192);
        assert_eq!(config.start_offset(), 100);
        assert!(config.hash_config().enabled);
    }

    #[test]
    fn test_reader_config_invalid_zero() {
        let err = ReaderConfig::new(0).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidArgument { .. }));
    }

    #[test]
    fn test_reader_config_any_positive_size() {
        // Unlike CDC sizes, fixed chunks need not be powers of two.
        assert_eq!(ReaderConfig::new(3).unwrap().chunk_size(), 3);
        assert_eq!(ReaderConfig::new(1).unwrap().chunk_size(), 1);
    }

    #[test]
    fn test_reader_config_validate() {
        let config = ReaderConfig::default().with_chunk_size(0);
        assert!(config.validate().is_err());
        assert!(ReaderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_hash_config() {
        assert!(!HashConfig::default().enabled);
        assert!(HashConfig::enabled().enabled);
        assert!(!HashConfig::disabled().enabled);
        assert!(HashConfig::new(true).enabled);
    }
}
