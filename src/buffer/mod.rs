//! Internal working buffer.
//!
//! The reader owns exactly one [`WorkBuffer`] sized to the chunk capacity and
//! reuses it for every read. It is an implementation detail and not part of
//! the public API.

mod work;

pub(crate) use work::WorkBuffer;
