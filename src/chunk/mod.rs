//! Chunk types.
//!
//! - [`Chunk`] - Owned chunk bytes with file offset and optional hash
//! - [`ChunkHash`] - 32-byte content hash

mod data;
mod hash;

pub use data::Chunk;
pub use hash::ChunkHash;
