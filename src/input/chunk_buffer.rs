//! Chunk buffering over a character source.
//!
//! This module provides [ChunkBuffer], which owns the active chunk of
//! characters plus one lookahead chunk. The double buffer is what makes
//! [peek](ChunkBuffer::peek) safe across a chunk boundary: a two-character
//! line separator split between two chunks is still visible in one call.
//!
//! Both buffers are fixed arrays allocated once and reused across refills,
//! keeping the per-character hot path allocation-free.

use crate::input::char_source::CharSource;
use crate::input::error::InputError;

// =#========================================================================#=
// CHUNK BUFFER
// =#========================================================================$=
/// Double-buffered read cursor over a [CharSource].
///
/// The front buffer holds the chunk currently being consumed; the back
/// buffer is filled lazily when a peek reaches past the front chunk's end.
/// Once the cursor leaves the front chunk the back chunk is promoted by
/// swapping the two arrays, so no characters are ever copied between them.
pub(crate) struct ChunkBuffer<S: CharSource> {
    source: S,

    /// Active chunk
    front: Box<[char]>,
    /// Valid length of `front`
    front_len: usize,
    /// Read cursor within `front`; never exposed to callers
    pos: usize,

    /// Lookahead chunk, filled on demand by cross-boundary peeks
    back: Box<[char]>,
    /// Valid length of `back`; zero when nothing is prefetched
    back_len: usize,

    /// Whether the source has reported end of input
    exhausted: bool,
}

impl<S: CharSource> ChunkBuffer<S> {
    /// Creates a chunk buffer pulling chunks of `chunk_len` characters.
    ///
    /// # Arguments
    /// * `source` - The character source to drain
    /// * `chunk_len` - Characters per chunk; clamped to at least 1
    pub(crate) fn new(source: S, chunk_len: usize) -> Self {
        let chunk_len = chunk_len.max(1);
        Self {
            source,
            front: vec![char::default(); chunk_len].into_boxed_slice(),
            front_len: 0,
            pos: 0,
            back: vec![char::default(); chunk_len].into_boxed_slice(),
            back_len: 0,
            exhausted: false,
        }
    }

    /// Returns the character at `cursor + offset` without consuming anything.
    ///
    /// Transparently refills the front chunk and, when the offset reaches
    /// past its end, prefetches one extra chunk into the back buffer.
    ///
    /// # Returns
    /// `Ok(None)` once the requested position lies beyond the end of input.
    pub(crate) fn peek(&mut self, offset: usize) -> Result<Option<char>, InputError> {
        if self.pos >= self.front_len && !self.refill()? {
            return Ok(None);
        }

        let idx = self.pos + offset;
        if idx < self.front_len {
            return Ok(Some(self.front[idx]));
        }

        // Crosses the chunk boundary: prefetch the next chunk
        let back_idx = idx - self.front_len;
        debug_assert!(back_idx < self.back.len(), "peek offset exceeds lookahead chunk");
        if self.back_len == 0 && !self.exhausted {
            self.back_len = self.source.read_chars(&mut self.back)?;
            if self.back_len == 0 {
                self.exhausted = true;
            }
        }
        if back_idx < self.back_len {
            Ok(Some(self.back[back_idx]))
        } else {
            Ok(None)
        }
    }

    /// Consumes and returns the next character.
    ///
    /// # Returns
    /// `Ok(None)` once the input is exhausted; every later call keeps
    /// reporting exhaustion rather than erroring.
    #[inline]
    pub(crate) fn next(&mut self) -> Result<Option<char>, InputError> {
        match self.peek(0)? {
            Some(ch) => {
                self.pos += 1;
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }

    /// Advances the cursor by `n` characters, refilling as needed.
    ///
    /// Stops silently at end of input.
    pub(crate) fn consume(&mut self, n: usize) -> Result<(), InputError> {
        for _ in 0..n {
            if self.next()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Returns the unread remainder of the current chunk, filling it first
    /// if empty. Used once at start-up to give the separator detection
    /// strategy a sample; consumes nothing.
    pub(crate) fn buffered(&mut self) -> Result<&[char], InputError> {
        if self.pos >= self.front_len && !self.refill()? {
            return Ok(&[]);
        }
        Ok(&self.front[self.pos..self.front_len])
    }

    /// Makes the front chunk hold unread data again after the cursor ran off
    /// its end: promotes the prefetched back chunk if present, otherwise
    /// pulls a fresh chunk from the source.
    ///
    /// # Returns
    /// `true` if unread data is available, `false` on end of input.
    fn refill(&mut self) -> Result<bool, InputError> {
        self.pos = 0;
        if self.back_len > 0 {
            std::mem::swap(&mut self.front, &mut self.back);
            self.front_len = self.back_len;
            self.back_len = 0;
            return Ok(true);
        }
        if self.exhausted {
            self.front_len = 0;
            return Ok(false);
        }
        self.front_len = self.source.read_chars(&mut self.front)?;
        if self.front_len == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        Ok(true)
    }
}
