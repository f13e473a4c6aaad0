//! Error types for the character input layer.
//!
//! This module provides [InputError], covering configuration mistakes and
//! I/O failures. Reaching the end of the input is not an error: all reading
//! operations report it as `Ok(None)` or by returning partial results.

use thiserror::Error;

/// Error raised by the character input layer.
///
/// Two classes of failure exist: configuration errors (`AlreadyActive`,
/// `NotActive`, `InvalidSeparator`) which are fatal to the offending call,
/// and I/O failures (`Io`, `InvalidUtf8`) propagated unretried from the
/// underlying source. Retry policy, if any, belongs to the source.
#[derive(Debug, Error)]
pub enum InputError {
    /// `start()` was called while the reader was already active.
    #[error("reader is already started; call stop() before starting again")]
    AlreadyActive,

    /// A reading operation was called before `start()`.
    #[error("reader has not been started")]
    NotActive,

    /// A line separator was configured with zero or more than two characters.
    #[error("line separator must be one or two characters, got {0:?}")]
    InvalidSeparator(String),

    /// The byte stream handed to [Utf8CharSource](crate::input::Utf8CharSource)
    /// is not valid UTF-8.
    #[error("input is not valid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the offending sequence from the start of the stream.
        offset: u64,
    },

    /// The underlying source failed while reading a chunk.
    #[error("I/O failure while reading input")]
    Io(#[from] std::io::Error),
}
