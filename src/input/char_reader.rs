//! The public character reader facade.
//!
//! This module provides [CharReader], the surface the tokenizer above talks
//! to. It composes the chunk buffer, the newline normalizer and the position
//! tracker behind a small state machine: created idle, activated by
//! [start](CharReader::start), released by [stop](CharReader::stop) or by
//! running off the end of the input.

use std::fs::File;
use std::path::Path;

use crate::format::{Format, LineSeparator};
use crate::input::char_source::CharSource;
use crate::input::chunk_buffer::ChunkBuffer;
use crate::input::detect::SeparatorDetector;
use crate::input::error::InputError;
use crate::input::in_memory_char_source::InMemoryCharSource;
use crate::input::normalizer::{Emitted, NewlineNormalizer};
use crate::input::position::PositionTracker;
use crate::input::utf8_char_source::Utf8CharSource;

// =#========================================================================#=
// READER STATE
// =#========================================================================€=
/// Lifecycle of a [CharReader].
///
/// `Idle → Active` on `start()`; `Active → Stopped` on `stop()` or on
/// exhausting the source. Only `Active` accepts reading operations; a
/// stopped reader drains gracefully and can be started again with a fresh
/// source.
enum ReaderState<S: CharSource> {
    /// Created but never started
    Idle,
    /// Reading; owns the whole pipeline and, through it, the source
    Active(NewlineNormalizer<S>),
    /// Released; the source has been dropped
    Stopped,
}

// =#========================================================================#=
// CHAR READER
// =#========================================================================$=
/// Buffered, newline-normalizing character reader for delimited-text parsers.
///
/// Every character of the input passes through [next_char](Self::next_char),
/// which collapses the configured [LineSeparator] sequence into the single
/// normalized newline of the [Format] while keeping [char_count](Self::char_count)
/// and [line_count](Self::line_count) in sync. The separator is recognized
/// even when it is split across two chunks of the underlying source.
///
/// # Configuration Options
/// * **Chunk length**: [`with_chunk_len()`](Self::with_chunk_len)
///   — characters pulled from the source per refill
/// * **Separator detection**: [`with_separator_detection()`](Self::with_separator_detection)
///   — run a [SeparatorDetector] once at `start()` instead of trusting the
///   configured separator
///
/// # Example
/// ```
/// use charflow::{CharReader, Format, LineSeparator};
/// use charflow::input::InMemoryCharSource;
///
/// let format = Format::default().with_line_separator(LineSeparator::CRLF);
/// let mut reader = CharReader::new(format);
/// reader.start(InMemoryCharSource::from_str("a,b\r\nc"))?;
///
/// let mut line = String::new();
/// while let Some(ch) = reader.next_char()? {
///     line.push(ch);
/// }
/// assert_eq!(line, "a,b\nc");
/// assert_eq!(reader.line_count(), 1);
/// assert_eq!(reader.char_count(), 5);
/// # Ok::<(), charflow::InputError>(())
/// ```
pub struct CharReader<S: CharSource> {
    format: Format,
    chunk_len: usize,
    detector: Option<Box<dyn SeparatorDetector>>,

    /// Separator in use: the configured one, or the one a detection pass
    /// established at the last `start()`
    separator: LineSeparator,

    /// Whether line endings collapse to the normalized newline; when false,
    /// separator characters stream through verbatim
    normalize: bool,

    tracker: PositionTracker,
    state: ReaderState<S>,
}

impl CharReader<InMemoryCharSource> {
    /// Creates and starts a reader over a string with default [Format].
    ///
    /// # Errors
    /// Never fails for in-memory input in practice; kept fallible for
    /// uniformity with [start](Self::start).
    pub fn for_str(input: &str) -> Result<Self, InputError> {
        let mut reader = Self::new(Format::default());
        reader.start(InMemoryCharSource::from_str(input))?;
        Ok(reader)
    }
}

impl CharReader<Utf8CharSource<File>> {
    /// Creates and starts a reader over a UTF-8 file with default [Format].
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn for_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let mut reader = Self::new(Format::default());
        reader.start(Utf8CharSource::from_file(path)?)?;
        Ok(reader)
    }
}

impl<S: CharSource> CharReader<S> {
    /// Default number of characters pulled from the source per chunk.
    pub const DEFAULT_CHUNK_LEN: usize = 65536;

    /// Creates an idle reader with the given format.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            chunk_len: Self::DEFAULT_CHUNK_LEN,
            detector: None,
            separator: format.line_separator(),
            normalize: true,
            tracker: PositionTracker::default(),
            state: ReaderState::Idle,
        }
    }

    /// Sets the number of characters read from the source per chunk.
    ///
    /// Clamped to at least 1. Takes effect at the next `start()`.
    pub fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len.max(1);
        self
    }

    /// Enables line separator detection with the given strategy.
    ///
    /// The detector runs once per `start()`, against the first buffered
    /// chunk, before any character is produced. An inconclusive detection
    /// keeps the configured separator.
    pub fn with_separator_detection<D: SeparatorDetector + 'static>(mut self, detector: D) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Starts reading from `source`.
    ///
    /// Resets both counters to zero, re-runs separator detection if enabled
    /// and allocates the chunk buffers. A stopped reader may be started
    /// again with a new source.
    ///
    /// # Errors
    /// * [InputError::AlreadyActive] if the reader is currently active
    /// * [InputError::Io] if filling the detection sample fails; the source
    ///   is dropped on that path
    pub fn start(&mut self, source: S) -> Result<(), InputError> {
        if matches!(self.state, ReaderState::Active(_)) {
            return Err(InputError::AlreadyActive);
        }

        self.tracker.reset();
        self.separator = self.format.line_separator();

        let mut buffer = ChunkBuffer::new(source, self.chunk_len);
        if let Some(detector) = &self.detector {
            if let Some(detected) = detector.detect(buffer.buffered()?) {
                self.separator = detected;
            }
        }

        self.state = ReaderState::Active(NewlineNormalizer::new(
            buffer,
            self.separator,
            self.normalize,
        ));
        Ok(())
    }

    /// Stops the reader and releases the underlying source.
    ///
    /// Idempotent and infallible: safe to call on an idle reader, after an
    /// error, or any number of times. Subsequent [next_char](Self::next_char)
    /// calls report end of input so pipelines can drain gracefully.
    pub fn stop(&mut self) {
        self.state = ReaderState::Stopped;
    }

    /// Returns the next logical character of the input.
    ///
    /// A full line separator sequence collapses into the normalized newline
    /// while normalization is enabled, and streams through verbatim
    /// otherwise. Characters are returned strictly in input order.
    ///
    /// # Returns
    /// `Ok(None)` once the input is exhausted or the reader was stopped.
    ///
    /// # Errors
    /// * [InputError::NotActive] if the reader was never started
    /// * [InputError::Io] / [InputError::InvalidUtf8] propagated from the source
    pub fn next_char(&mut self) -> Result<Option<char>, InputError> {
        let normalizer = match &mut self.state {
            ReaderState::Active(normalizer) => normalizer,
            ReaderState::Stopped => return Ok(None),
            ReaderState::Idle => return Err(InputError::NotActive),
        };

        let emitted = normalizer.next()?;
        match emitted {
            Emitted::Char(ch) => {
                self.tracker.record_char();
                Ok(Some(ch))
            }
            Emitted::Newline => {
                self.tracker.record_line();
                self.tracker.record_char();
                Ok(Some(self.format.normalized_newline()))
            }
            Emitted::SeparatorPart { ch, last } => {
                if last {
                    self.tracker.record_line();
                }
                self.tracker.record_char();
                Ok(Some(ch))
            }
            Emitted::End => {
                self.state = ReaderState::Stopped;
                Ok(None)
            }
        }
    }

    /// Number of characters returned by [next_char](Self::next_char) since
    /// the last `start()`. The end-of-input marker and characters discarded
    /// by [skip_lines](Self::skip_lines) are not counted.
    pub fn char_count(&self) -> u64 {
        self.tracker.char_count()
    }

    /// Number of line separator sequences fully consumed since the last
    /// `start()`, regardless of normalization mode.
    pub fn line_count(&self) -> u64 {
        self.tracker.line_count()
    }

    /// Discards input until `count` more line separators have been consumed.
    ///
    /// Best-effort: stops early without error when the input runs out first.
    /// Skipped characters do not touch [char_count](Self::char_count), but
    /// every consumed separator still ticks [line_count](Self::line_count).
    /// `count == 0` is a no-op.
    ///
    /// # Errors
    /// * [InputError::NotActive] if the reader was never started
    /// * I/O failures propagated from the source
    pub fn skip_lines(&mut self, count: u64) -> Result<(), InputError> {
        if count == 0 {
            return Ok(());
        }
        let normalizer = match &mut self.state {
            ReaderState::Active(normalizer) => normalizer,
            ReaderState::Stopped => return Ok(()),
            ReaderState::Idle => return Err(InputError::NotActive),
        };

        let target = self.tracker.line_count() + count;
        let mut ended = false;
        loop {
            match normalizer.next()? {
                Emitted::End => {
                    ended = true;
                    break;
                }
                Emitted::Newline | Emitted::SeparatorPart { last: true, .. } => {
                    self.tracker.record_line();
                    if self.tracker.line_count() >= target {
                        break;
                    }
                }
                Emitted::Char(_) | Emitted::SeparatorPart { last: false, .. } => {}
            }
        }
        if ended {
            self.state = ReaderState::Stopped;
        }
        Ok(())
    }

    /// Collects the rest of the current comment line as raw text.
    ///
    /// Assumes the caller already recognized and consumed the comment prefix
    /// character. Characters are taken verbatim, bypassing normalization, up
    /// to the next full line separator; the separator is consumed and
    /// counted in [line_count](Self::line_count) but not included in the
    /// returned text. Returns the partial text collected so far when the
    /// input ends first, and an empty string for an empty comment.
    ///
    /// # Errors
    /// * [InputError::NotActive] if the reader was never started
    /// * I/O failures propagated from the source
    pub fn read_comment(&mut self) -> Result<String, InputError> {
        let normalizer = match &mut self.state {
            ReaderState::Active(normalizer) => normalizer,
            ReaderState::Stopped => return Ok(String::new()),
            ReaderState::Idle => return Err(InputError::NotActive),
        };

        let mut text = String::new();
        let mut ended = false;
        loop {
            if normalizer.try_consume_separator()? {
                self.tracker.record_line();
                break;
            }
            match normalizer.next_raw()? {
                Some(ch) => text.push(ch),
                None => {
                    ended = true;
                    break;
                }
            }
        }
        if ended {
            self.state = ReaderState::Stopped;
        }
        Ok(text)
    }

    /// Switches line-ending normalization on or off.
    ///
    /// Pass `false` while the parser reproduces literal ("escaped") field
    /// content, so separator characters come through unchanged. Takes effect
    /// on the next character produced, never retroactively; line counting
    /// stays correct in both modes. May be called in any state.
    pub fn enable_normalize_line_endings(&mut self, normalize: bool) {
        self.normalize = normalize;
        if let ReaderState::Active(normalizer) = &mut self.state {
            normalizer.set_normalize(normalize);
        }
    }

    /// The line separator currently in use: the configured one, or the one
    /// established by the detection pass at the last `start()`. Fixed while
    /// reading; repeated calls have no side effects.
    pub fn line_separator(&self) -> LineSeparator {
        self.separator
    }
}
