//! Character source abstraction for the input layer.
//!
//! This module provides the [CharSource] trait, the seam between the
//! buffering machinery and whatever actually produces characters: a decoded
//! byte stream, an in-memory string, or a caller-provided implementation.

use crate::input::error::InputError;

/// A sequential, forward-only supplier of characters read in chunks.
///
/// [ChunkBuffer](crate::input::chunk_buffer::ChunkBuffer) pulls one chunk at
/// a time through this trait and never looks back, so implementations need
/// no seeking support. Character-set decoding is the source's concern; the
/// layers above only ever see `char`s.
pub trait CharSource {
    /// Reads the next chunk of characters into `out`.
    ///
    /// # Arguments
    /// * `out` - Destination slice; up to `out.len()` characters are written
    ///   starting at index 0
    ///
    /// # Returns
    /// The number of characters written. Zero signals end of input; once
    /// zero has been returned, every later call must return zero as well.
    ///
    /// # Errors
    /// Propagates I/O or decoding failures from the underlying stream.
    fn read_chars(&mut self, out: &mut [char]) -> Result<usize, InputError>;
}
