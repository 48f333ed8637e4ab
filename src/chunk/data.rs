//! The Chunk type - one fixed-capacity slice of a file.

use bytes::Bytes;
use std::fmt;

use super::ChunkHash;

/// One chunk of a file: an owned copy of the bytes read plus where they came from.
///
/// Chunks never share memory with the reader's working buffer, so later reads
/// cannot change data that was already handed out.
///
/// A chunk is immutable once built; its parts are read through accessors.
/// Equality compares the byte content only; two chunks read at different
/// offsets are equal when their bytes are.
///
/// # Example
///
/// ```
/// use chunkfile::Chunk;
///
/// let chunk = Chunk::new(&b"hello world"[..], 4096);
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.range(), 4096..4107);
/// ```
///
/// Fields cannot be changed from outside the crate:
///
/// ```compile_fail
/// let mut chunk = chunkfile::Chunk::new(&b"abc"[..], 0);
/// chunk.offset = 8;
/// ```
#[derive(Debug, Clone)]
pub struct Chunk {
    data: Bytes,
    offset: u64,
    hash: Option<ChunkHash>,
}

impl Chunk {
    /// Creates a new chunk read at `offset`.
    pub fn new(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
            hash: None,
        }
    }

    pub(crate) fn from_parts(data: Bytes, offset: u64, hash: Option<ChunkHash>) -> Self {
        Self { data, offset, hash }
    }

    /// Sets the hash.
    pub fn set_hash(mut self, hash: ChunkHash) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Returns the number of valid bytes in the chunk.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the start offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the hash, if computed.
    pub fn hash(&self) -> Option<ChunkHash> {
        self.hash
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range of file offsets.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Chunk {}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {}", self.len(), self.offset)?;
        if let Some(hash) = self.hash {
            write!(f, ", hash={}", hash)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let chunk = Chunk::new(&b"hello"[..], 0);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
        assert!(chunk.hash().is_none());
    }

    #[test]
    fn test_empty() {
        let chunk = Chunk::new(&b""[..], 10);
        assert!(chunk.is_empty());
        assert_eq!(chunk.range(), 10..10);
    }

    #[test]
    fn test_set_hash() {
        let hash = ChunkHash::new([7u8; 32]);
        let chunk = Chunk::new(&b"hello"[..], 0).set_hash(hash);
        assert_eq!(chunk.hash(), Some(hash));
    }

    #[test]
    fn test_range() {
        let chunk = Chunk::new(&b"hello"[..], 100);
        assert_eq!(chunk.end(), 105);
        assert_eq!(chunk.range(), 100..105);
    }

    #[test]
    fn test_equality_ignores_offset() {
        let a = Chunk::new(&b"abcd"[..], 0);
        let b = Chunk::new(&b"abcd"[..], 8);
        let c = Chunk::new(&b"abc"[..], 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(&b"hello"[..], 100);
        let s = format!("{}", chunk);
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 100"));
    }
}
