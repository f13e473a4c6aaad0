//! Line-ending detection and normalization over the chunk buffer.
//!
//! This module provides [NewlineNormalizer], the hot-path component turning
//! raw characters into logical ones. It recognizes the configured line
//! separator sequence, including a two-character sequence split across a
//! chunk boundary, and reports what it found through [Emitted] so the facade
//! can decide what to hand the caller and which counters to bump.

use crate::format::LineSeparator;
use crate::input::char_source::CharSource;
use crate::input::chunk_buffer::ChunkBuffer;
use crate::input::error::InputError;

// =#========================================================================#=
// EMITTED
// =#========================================================================$=
/// One step of the normalizer: what the next logical character is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emitted {
    /// A character that is not part of a line separator.
    Char(char),

    /// A full separator sequence was consumed and collapsed; the facade
    /// emits the normalized newline and counts one line.
    Newline,

    /// One raw character of a recognized separator, passed through verbatim
    /// because normalization is off. `last` is true on the final character
    /// of the sequence, which is when the line counter must tick so a
    /// two-character separator never double-counts.
    SeparatorPart { ch: char, last: bool },

    /// End of input. Repeats on every later call.
    End,
}

// =#========================================================================#=
// NEWLINE NORMALIZER
// =#========================================================================$=
/// Consumes raw characters from a [ChunkBuffer] and emits logical ones.
///
/// When `normalize` is on (the default), every occurrence of the configured
/// separator collapses into a single [Emitted::Newline]. When off, separator
/// characters stream through one by one as [Emitted::SeparatorPart], so the
/// parser can reproduce literal field content unchanged.
pub(crate) struct NewlineNormalizer<S: CharSource> {
    buffer: ChunkBuffer<S>,
    separator: LineSeparator,
    normalize: bool,

    /// Set after the first character of a matched two-character separator
    /// was passed through verbatim: the second character is still in the
    /// buffer and must be emitted (and the line counted) on the next call.
    tail_pending: bool,
}

impl<S: CharSource> NewlineNormalizer<S> {
    pub(crate) fn new(buffer: ChunkBuffer<S>, separator: LineSeparator, normalize: bool) -> Self {
        Self {
            buffer,
            separator,
            normalize,
            tail_pending: false,
        }
    }

    /// Flips between collapsing and verbatim mode. Takes effect on the next
    /// character produced, never retroactively.
    pub(crate) fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Produces the next logical character.
    ///
    /// # Errors
    /// Propagates I/O failures from the chunk buffer.
    pub(crate) fn next(&mut self) -> Result<Emitted, InputError> {
        if self.tail_pending {
            self.tail_pending = false;
            // The tail was already seen by peek, so it must still be there
            return match self.buffer.next()? {
                Some(ch) => Ok(Emitted::SeparatorPart { ch, last: true }),
                None => Ok(Emitted::End),
            };
        }

        let Some(ch) = self.buffer.next()? else {
            return Ok(Emitted::End);
        };

        if ch != self.separator.first() || !self.rest_matches()? {
            return Ok(Emitted::Char(ch));
        }

        if self.normalize {
            // Collapse the whole sequence into one logical newline
            self.buffer.consume(self.separator.len() - 1)?;
            return Ok(Emitted::Newline);
        }

        // Verbatim mode: return the first character now, leave the rest in
        // the buffer for the immediately following call(s)
        if self.separator.second().is_some() {
            self.tail_pending = true;
            Ok(Emitted::SeparatorPart { ch, last: false })
        } else {
            Ok(Emitted::SeparatorPart { ch, last: true })
        }
    }

    /// Consumes and returns the next raw character, with no separator
    /// recognition at all. Comment collection uses this so comment text
    /// preserves the original characters.
    pub(crate) fn next_raw(&mut self) -> Result<Option<char>, InputError> {
        self.buffer.next()
    }

    /// Consumes the full separator sequence if the cursor sits exactly on
    /// one, crossing a chunk boundary where needed.
    ///
    /// # Returns
    /// `true` if the sequence was present and consumed.
    pub(crate) fn try_consume_separator(&mut self) -> Result<bool, InputError> {
        if self.buffer.peek(0)? != Some(self.separator.first()) {
            return Ok(false);
        }
        if let Some(second) = self.separator.second() {
            if self.buffer.peek(1)? != Some(second) {
                return Ok(false);
            }
        }
        self.buffer.consume(self.separator.len())?;
        Ok(true)
    }

    /// Whether the characters after an already-consumed first separator
    /// character complete the sequence.
    fn rest_matches(&mut self) -> Result<bool, InputError> {
        match self.separator.second() {
            None => Ok(true),
            Some(second) => Ok(self.buffer.peek(0)? == Some(second)),
        }
    }
}
