//! Iterator adapter over a [`ChunkedFileReader`].

use std::iter::FusedIterator;

use super::{ChunkedFileReader, Progress};
use crate::chunk::Chunk;
use crate::error::ChunkError;

/// A fused iterator that yields the remaining chunks of a reader.
///
/// It borrows the reader mutably, so position queries between items go
/// through [`reader`](ChunkIter::reader) or [`progress`](ChunkIter::progress).
///
/// # Example
///
/// ```no_run
/// use chunkfile::ChunkedFileReader;
///
/// let mut reader = ChunkedFileReader::open("data.bin", 1024)?;
/// let mut chunks = reader.chunks();
///
/// while let Some(chunk) = chunks.next() {
///     let chunk = chunk?;
///     println!("{} bytes, {} left", chunk.len(), chunks.progress().remaining);
/// }
/// # Ok::<(), chunkfile::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct ChunkIter<'a> {
    reader: &'a mut ChunkedFileReader,
    finished: bool,
}

impl<'a> ChunkIter<'a> {
    pub(super) fn new(reader: &'a mut ChunkedFileReader) -> Self {
        Self {
            reader,
            finished: false,
        }
    }

    /// The reader being iterated.
    pub fn reader(&self) -> &ChunkedFileReader {
        &*self.reader
    }

    /// The reader's position snapshot.
    pub fn progress(&self) -> Progress {
        self.reader.progress()
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        (0, None)
    }
}

impl FusedIterator for ChunkIter<'_> {}
