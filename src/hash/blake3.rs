//! BLAKE3-based chunk hashing.

use crate::chunk::ChunkHash;

/// Reusable BLAKE3 state for hashing one chunk after another.
#[derive(Debug, Clone)]
pub(crate) struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    pub(crate) fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Hashes `data` and leaves the state ready for the next chunk.
    pub(crate) fn hash_chunk(&mut self, data: &[u8]) -> ChunkHash {
        self.state.update(data);
        let hash = ChunkHash::new(self.state.finalize().into());
        self.state.reset();
        hash
    }

    /// One-shot digest of `data`.
    #[cfg(test)]
    pub(crate) fn digest(data: &[u8]) -> ChunkHash {
        ChunkHash::new(blake3::hash(data).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest() {
        let hash = Blake3Hasher::digest(b"hello world");
        assert_eq!(hash, Blake3Hasher::digest(b"hello world"));
        assert_ne!(hash, Blake3Hasher::digest(b"hello world!"));
    }

    #[test]
    fn test_hash_chunk_resets_between_chunks() {
        let mut hasher = Blake3Hasher::new();
        let first = hasher.hash_chunk(b"some data");
        let second = hasher.hash_chunk(b"hello world");

        assert_eq!(first, Blake3Hasher::digest(b"some data"));
        assert_eq!(second, Blake3Hasher::digest(b"hello world"));
    }
}
