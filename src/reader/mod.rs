//! Chunked file reading.
//!
//! - [`ChunkedFileReader`] - Owns the file handle; sequential and random access
//! - [`ChunkIter`] - Fused iterator over the reader's remaining chunks
//! - [`ReaderState`] - Lifecycle state of a reader
//! - [`Progress`] - Position snapshot handed to `for_each` visitors

mod file;
mod iter;

pub use file::ChunkedFileReader;
pub use iter::ChunkIter;

/// Lifecycle state of a [`ChunkedFileReader`].
///
/// ```text
/// Open --next() sees EOF--> Exhausted
/// Exhausted --read_at()/seek_to()--> Open
/// Open | Exhausted --dispose()--> Disposed (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderState {
    /// Sequential reads may still produce chunks.
    Open,
    /// Sequential reading reached end-of-stream. Random access still works.
    Exhausted,
    /// The handle is closed and the buffer zeroed. Every read fails.
    Disposed,
}

/// Where a reader stands right after producing a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progress {
    /// Absolute offset of the file cursor.
    pub position: u64,
    /// Bytes between the cursor and the end of the file.
    pub remaining: u64,
    /// Chunks produced so far.
    pub emitted: u64,
}
