//! Charflow is the character input layer beneath a delimited-text parser.
//!
//! This crate presents parsing logic with a single normalized stream of
//! characters, abstracting over:
//! - chunked reads from an underlying byte or character source,
//! - heterogeneous line-ending conventions (`"\n"`, `"\r\n"`, `"\r"`),
//!   collapsed into one logical newline character,
//! - a parser-controlled verbatim mode where line endings pass through
//!   unchanged while literal field content is reproduced,
//! - character and line counting for diagnostics,
//! - bulk line skipping and comment-line extraction.
//!
//! It sits on the per-character hot path: every character of every parsed
//! file goes through [CharReader::next_char]. The input is never copied into
//! memory as a whole; two fixed chunk buffers are reused across refills, and
//! a two-character separator split exactly at a chunk boundary still
//! collapses into a single newline.
//!
//! Core pieces:
//! - [CharReader]: the facade with the `start`/`stop` lifecycle, counters,
//!   [skip_lines](CharReader::skip_lines) and
//!   [read_comment](CharReader::read_comment).
//! - [Format] and [LineSeparator]: configuration of the separator sequence
//!   and the normalized newline character.
//! - [CharSource](input::CharSource): the seam to the underlying input, with
//!   [Utf8CharSource](input::Utf8CharSource) for streaming files and
//!   [InMemoryCharSource](input::InMemoryCharSource) for owned strings.
//! - [SeparatorDetector](input::SeparatorDetector): optional start-up
//!   detection of the separator convention actually used by the input.
//!
//! Not in scope: tokenization and field splitting (the caller's job),
//! seekable access, and concurrent reads of one reader instance.
//!
//! # Usage
//!
//! Read a string with Windows line endings normalized to `'\n'`:
//! ```
//! use charflow::{CharReader, Format, LineSeparator};
//! use charflow::input::InMemoryCharSource;
//!
//! let format = Format::default().with_line_separator(LineSeparator::CRLF);
//! let mut reader = CharReader::new(format);
//! reader.start(InMemoryCharSource::from_str("a,b\r\nc,d"))?;
//!
//! let mut normalized = String::new();
//! while let Some(ch) = reader.next_char()? {
//!     normalized.push(ch);
//! }
//! assert_eq!(normalized, "a,b\nc,d");
//! assert_eq!(reader.line_count(), 1);
//! # Ok::<(), charflow::InputError>(())
//! ```
//!
//! Let the reader figure out the convention itself:
//! ```
//! use charflow::{CharReader, CountingSeparatorDetector, Format, LineSeparator};
//! use charflow::input::InMemoryCharSource;
//!
//! let mut reader =
//!     CharReader::new(Format::default()).with_separator_detection(CountingSeparatorDetector);
//! reader.start(InMemoryCharSource::from_str("x\r\ny\r\n"))?;
//! assert_eq!(reader.line_separator(), LineSeparator::CRLF);
//! # Ok::<(), charflow::InputError>(())
//! ```

pub mod format;
pub mod input;

pub use format::{Format, LineSeparator};
pub use input::{CharReader, CountingSeparatorDetector, InputError, SeparatorDetector};
