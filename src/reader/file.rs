//! `ChunkedFileReader` - fixed-size chunked access to one regular file.
//!
//! The reader owns an open handle and a single working buffer of the chunk
//! capacity. Each read fills that buffer and hands out a copy, so memory use
//! stays bounded by one chunk no matter how large the file is.
//!
//! # Example
//!
//! ```no_run
//! use chunkfile::{ChunkedFileReader, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let mut reader = ChunkedFileReader::open("data.bin", 4096)?;
//!
//!     while let Some(chunk) = reader.next_chunk()? {
//!         println!("{} bytes, {} remaining", chunk.len(), reader.remaining_bytes());
//!     }
//!
//!     let second = reader.read_at(1)?;
//!     println!("chunk 1 starts at {}", second.offset());
//!
//!     reader.dispose()
//! }
//! ```

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use super::{ChunkIter, Progress, ReaderState};
use crate::buffer::WorkBuffer;
use crate::chunk::Chunk;
use crate::config::ReaderConfig;
use crate::error::ChunkError;
use crate::hash::ChunkHasher;

/// Reads a regular file as a sequence of fixed-capacity chunks.
///
/// Every chunk holds exactly `chunk_size` bytes except the last one, which
/// holds whatever remains. [`position`](Self::position) is the offset the
/// next sequential read starts from: after a chunk read at offset `o` with
/// `n` bytes, it is `o + n`. Every read seeks the handle there first.
///
/// The reader is single-threaded by construction (`&mut self` on every read).
/// Independent readers over the same path each get their own handle.
pub struct ChunkedFileReader {
    path: PathBuf,
    file: Option<File>,
    buffer: WorkBuffer,
    hasher: ChunkHasher,
    chunk_size: usize,
    file_size: u64,
    position: u64,
    emitted: u64,
    state: ReaderState,
}

impl ChunkedFileReader {
    /// Opens `path` for chunked reading from the start of the file.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::InvalidArgument`] if `chunk_size` is zero
    /// - [`ChunkError::NotFound`] / [`ChunkError::Stat`] if the path cannot be inspected
    /// - [`ChunkError::NotRegularFile`] for directories, devices and the like
    /// - [`ChunkError::Open`] if the file cannot be opened for reading
    pub fn open(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self, ChunkError> {
        Self::with_config(path, ReaderConfig::new(chunk_size)?)
    }

    /// Opens `path` and positions the cursor at `start_offset`.
    ///
    /// Fails with [`ChunkError::InvalidArgument`] if `start_offset` is past
    /// the end of the file, otherwise like [`open`](Self::open).
    pub fn open_at(
        path: impl AsRef<Path>,
        chunk_size: usize,
        start_offset: u64,
    ) -> Result<Self, ChunkError> {
        Self::with_config(
            path,
            ReaderConfig::new(chunk_size)?.with_start_offset(start_offset),
        )
    }

    /// Opens `path` with a full [`ReaderConfig`].
    ///
    /// Either a fully initialized reader is returned or nothing is: a handle
    /// opened before a later step fails is closed on the way out.
    pub fn with_config(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ChunkError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ChunkError::Stat {
                path: path.to_path_buf(),
                source,
            },
        })?;
        if !metadata.is_file() {
            return Err(ChunkError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }

        let file_size = metadata.len();
        let start = config.start_offset();
        if start > file_size {
            return Err(ChunkError::InvalidArgument {
                message: "start offset is past the end of the file",
            });
        }

        let mut file = File::open(path).map_err(|source| ChunkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        file.seek(SeekFrom::Start(start))
            .map_err(|source| ChunkError::Seek {
                offset: start,
                source,
            })?;

        log::debug!(
            "opened {} ({} bytes) in chunks of {} from offset {}",
            path.display(),
            file_size,
            config.chunk_size(),
            start
        );

        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            buffer: WorkBuffer::with_capacity(config.chunk_size()),
            hasher: ChunkHasher::new(config.hash_config()),
            chunk_size: config.chunk_size(),
            file_size,
            position: start,
            emitted: 0,
            state: ReaderState::Open,
        })
    }

    /// Reads the next chunk from the cursor.
    ///
    /// Returns `Ok(None)` at end-of-stream; further calls keep returning
    /// `Ok(None)` until the reader is repositioned. A failed read leaves the
    /// position and emitted count unchanged.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>, ChunkError> {
        self.ensure_open()?;

        let chunk = self.read_chunk_from(self.position)?;
        if chunk.is_none() && self.state == ReaderState::Open {
            log::debug!("end of stream for {} at {}", self.path.display(), self.position);
            self.state = ReaderState::Exhausted;
        }
        Ok(chunk)
    }

    /// Reads whole chunk `index`, i.e. the bytes at `index * chunk_size`.
    ///
    /// Valid indices are `0..whole_chunk_count()`; a trailing partial chunk is
    /// only reachable sequentially or through [`read_at_offset`](Self::read_at_offset).
    /// The returned bytes are identical to the `index`-th chunk of a
    /// sequential pass from offset 0. Sequential reading continues after it.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::OutOfRange`] if `index >= whole_chunk_count()`; nothing changes
    /// - [`ChunkError::Read`] if the read fails or finds no data
    /// - [`ChunkError::Disposed`] after [`dispose`](Self::dispose)
    pub fn read_at(&mut self, index: u64) -> Result<Chunk, ChunkError> {
        self.ensure_open()?;

        let count = self.whole_chunk_count();
        if index >= count {
            return Err(ChunkError::OutOfRange { index, count });
        }
        self.read_one_at(index * self.chunk_size as u64)
    }

    /// Reads up to one chunk starting at an arbitrary absolute byte offset.
    ///
    /// Fails with [`ChunkError::InvalidArgument`] if `offset` is not inside
    /// the file.
    pub fn read_at_offset(&mut self, offset: u64) -> Result<Chunk, ChunkError> {
        self.ensure_open()?;

        if offset >= self.file_size {
            return Err(ChunkError::InvalidArgument {
                message: "offset is at or past the end of the file",
            });
        }
        self.read_one_at(offset)
    }

    /// Moves the cursor to the absolute byte `offset`.
    ///
    /// Sequential reading resumes from there, also after end-of-stream.
    /// `offset == file_size()` is allowed and leaves nothing to read.
    pub fn seek_to(&mut self, offset: u64) -> Result<(), ChunkError> {
        self.ensure_open()?;

        if offset > self.file_size {
            return Err(ChunkError::InvalidArgument {
                message: "seek offset is past the end of the file",
            });
        }
        if let Some(file) = self.file.as_mut() {
            file.seek(SeekFrom::Start(offset))
                .map_err(|source| ChunkError::Seek { offset, source })?;
        }
        log::debug!("{}: repositioned {} -> {}", self.path.display(), self.position, offset);
        self.position = offset;
        self.state = ReaderState::Open;
        Ok(())
    }

    /// Calls `visit` once per remaining chunk, in file order, until end-of-stream.
    ///
    /// `visit` also receives the reader's [`Progress`] right after that chunk
    /// was read. Returns the number of chunks visited; the first read error
    /// stops the walk and is returned.
    pub fn for_each<F>(&mut self, mut visit: F) -> Result<u64, ChunkError>
    where
        F: FnMut(Chunk, Progress),
    {
        let mut visited = 0;
        while let Some(chunk) = self.next_chunk()? {
            visited += 1;
            visit(chunk, self.progress());
        }
        Ok(visited)
    }

    /// Returns an iterator over the remaining chunks.
    ///
    /// The iterator stops at end-of-stream or after yielding the first error.
    pub fn chunks(&mut self) -> ChunkIter<'_> {
        ChunkIter::new(self)
    }

    /// Closes the file handle and zeroes the working buffer.
    ///
    /// The first call succeeds; any later call fails with
    /// [`ChunkError::Disposed`], as does every read. Dropping a reader
    /// without disposing it releases the same resources.
    pub fn dispose(&mut self) -> Result<(), ChunkError> {
        let file = self.file.take().ok_or(ChunkError::Disposed)?;
        drop(file);
        self.buffer.wipe();
        self.state = ReaderState::Disposed;
        log::debug!(
            "disposed reader for {} after {} chunks",
            self.path.display(),
            self.emitted
        );
        Ok(())
    }

    /// Absolute offset of the cursor.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes left between the cursor and the end of the file.
    pub fn remaining_bytes(&self) -> u64 {
        self.file_size.saturating_sub(self.position)
    }

    /// Number of full-capacity chunks, `floor(file_size / chunk_size)`.
    pub fn whole_chunk_count(&self) -> u64 {
        self.file_size / self.chunk_size as u64
    }

    /// Number of chunks a full sequential pass yields, `ceil(file_size / chunk_size)`.
    pub fn chunk_count(&self) -> u64 {
        self.file_size.div_ceil(self.chunk_size as u64)
    }

    /// Chunks produced so far, sequentially or by random access.
    pub fn emitted_count(&self) -> u64 {
        self.emitted
    }

    /// Size of the file when the reader was opened.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// The chunk capacity in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The path the reader was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Returns true once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.state == ReaderState::Disposed
    }

    /// Snapshot of position, remaining bytes and emitted count.
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.position,
            remaining: self.remaining_bytes(),
            emitted: self.emitted,
        }
    }

    fn ensure_open(&self) -> Result<(), ChunkError> {
        if self.state == ReaderState::Disposed {
            return Err(ChunkError::Disposed);
        }
        Ok(())
    }

    fn read_one_at(&mut self, offset: u64) -> Result<Chunk, ChunkError> {
        let chunk = self.read_chunk_from(offset)?.ok_or_else(|| {
            ChunkError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no data at offset {offset}"),
            ))
        })?;
        self.state = ReaderState::Open;
        Ok(chunk)
    }

    /// Fills the working buffer from `offset` and copies it out.
    ///
    /// The cursor is always sought to `offset` first, so it never has to be
    /// trusted across calls. Position and emitted count only change when a
    /// chunk is produced.
    fn read_chunk_from(&mut self, offset: u64) -> Result<Option<Chunk>, ChunkError> {
        let file = self.file.as_mut().ok_or(ChunkError::Disposed)?;
        file.seek(SeekFrom::Start(offset))
            .map_err(|source| ChunkError::Seek { offset, source })?;

        let n = match self.buffer.fill_from(file)? {
            0 => return Ok(None),
            n => n,
        };

        let data = Bytes::copy_from_slice(self.buffer.filled());
        let hash = self.hasher.hash_chunk(&data);
        self.position = offset + n as u64;
        self.emitted += 1;
        log::trace!("chunk #{} at {}: {} bytes", self.emitted, offset, n);

        Ok(Some(Chunk::from_parts(data, offset, hash)))
    }
}

impl<'a> IntoIterator for &'a mut ChunkedFileReader {
    type Item = Result<Chunk, ChunkError>;
    type IntoIter = ChunkIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks()
    }
}

impl fmt::Debug for ChunkedFileReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedFileReader")
            .field("path", &self.path)
            .field("chunk_size", &self.chunk_size)
            .field("file_size", &self.file_size)
            .field("position", &self.position)
            .field("emitted", &self.emitted)
            .field("state", &self.state)
            .finish()
    }
}
