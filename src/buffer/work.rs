//! Fixed-capacity scratch buffer that is wiped on release.

use std::io::{self, Read};

use zeroize::Zeroize;

/// The reader's reusable working buffer.
///
/// Holds at most `capacity` bytes. Callers only ever see copies of
/// [`filled`](WorkBuffer::filled); the storage itself is zeroed by
/// [`wipe`](WorkBuffer::wipe) and again on drop.
pub(crate) struct WorkBuffer {
    data: Vec<u8>,
    filled: usize,
}

impl WorkBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            filled: 0,
        }
    }

    /// Reads from `reader` until the buffer is full or the reader hits EOF.
    ///
    /// Returns the number of valid bytes. A short count means EOF was reached.
    /// On error the buffer is left empty.
    pub(crate) fn fill_from<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        self.filled = 0;
        while self.filled < self.data.len() {
            match reader.read(&mut self.data[self.filled..]) {
                Ok(0) => break,
                Ok(n) => self.filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.filled = 0;
                    return Err(e);
                }
            }
        }
        Ok(self.filled)
    }

    /// The bytes produced by the last fill.
    pub(crate) fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Zeroes the whole buffer, including bytes past the last fill.
    pub(crate) fn wipe(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.filled = 0;
    }
}

impl Drop for WorkBuffer {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
