//! chunkfile
//!
//! Bounded-memory, fixed-size chunked reading of large regular files.
//!
//! `chunkfile` reads a file as a sequence of chunks of a configured capacity,
//! holding only one chunk-sized working buffer in memory. It is meant as a
//! small primitive under:
//!
//! - hashing large files
//! - hex/text dumping
//! - transformation pipelines that work chunk by chunk
//!
//! The crate intentionally:
//! - does NOT read from pipes, sockets or other non-seekable sources
//! - does NOT write
//! - does NOT produce chunks concurrently
//! - does NOT follow files that grow or shrink while being read
//!
//! Every chunk but the last holds exactly `chunk_size` bytes. Chunks are
//! owned copies, so they stay valid after later reads and after the reader
//! is disposed.
//!
//! # Sequential
//!
//! ```no_run
//! use chunkfile::{ChunkedFileReader, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let mut reader = ChunkedFileReader::open("data.bin", 4096)?;
//!
//!     for chunk in reader.chunks() {
//!         let chunk = chunk?;
//!         println!("chunk {} bytes @ {}", chunk.len(), chunk.offset());
//!     }
//!     reader.dispose()
//! }
//! ```
//!
//! # Random access
//!
//! ```no_run
//! use chunkfile::{ChunkedFileReader, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let mut reader = ChunkedFileReader::open("data.bin", 4096)?;
//!
//!     for index in (0..reader.whole_chunk_count()).rev() {
//!         let chunk = reader.read_at(index)?;
//!         assert_eq!(chunk.len(), 4096);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod reader;

mod buffer; // internal working buffer
mod hash; // internal blake3 impl

//
// Public surface (intentionally tiny)
//

pub use chunk::{Chunk, ChunkHash};
pub use config::{DEFAULT_CHUNK_SIZE, HashConfig, ReaderConfig};
pub use error::ChunkError;
pub use reader::{ChunkIter, ChunkedFileReader, Progress, ReaderState};
