//! Strong hash support for chunk identity.
//!
//! [`ChunkHasher`] is what the reader holds. With the `hash-blake3` feature
//! it wraps a BLAKE3 state when hashing is enabled; without the feature it
//! never produces a hash.

use crate::chunk::ChunkHash;
use crate::config::HashConfig;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-blake3")]
pub(crate) use self::blake3::Blake3Hasher;

#[cfg(feature = "hash-blake3")]
#[derive(Debug)]
pub(crate) struct ChunkHasher {
    hasher: Option<Blake3Hasher>,
}

#[cfg(not(feature = "hash-blake3"))]
#[derive(Debug)]
pub(crate) struct ChunkHasher;

#[cfg(feature = "hash-blake3")]
impl ChunkHasher {
    pub(crate) fn new(config: &HashConfig) -> Self {
        Self {
            hasher: config.enabled.then(Blake3Hasher::new),
        }
    }

    pub(crate) fn hash_chunk(&mut self, data: &[u8]) -> Option<ChunkHash> {
        self.hasher.as_mut().map(|h| h.hash_chunk(data))
    }
}

#[cfg(not(feature = "hash-blake3"))]
impl ChunkHasher {
    pub(crate) fn new(_config: &HashConfig) -> Self {
        Self
    }

    pub(crate) fn hash_chunk(&mut self, _data: &[u8]) -> Option<ChunkHash> {
        None
    }
}
