//! Input format configuration.
//!
//! This module provides [Format] and [LineSeparator], the configuration
//! objects consumed by [CharReader](crate::input::CharReader). A [Format]
//! states which raw character sequence ends a line and which single
//! character all line endings collapse to when normalization is enabled.

use crate::input::error::InputError;
use std::fmt;

// =#========================================================================#=
// LINE SEPARATOR
// =#========================================================================$=
/// An ordered sequence of one or two characters that ends a line.
///
/// Covers the three common conventions: `"\n"` (Unix), `"\r\n"` (Windows)
/// and `"\r"` (classic Mac OS), but any 1–2 character sequence is accepted.
/// Once a reader has been started the separator in use is fixed until the
/// next `start()`.
///
/// # Examples
/// ```
/// use charflow::LineSeparator;
///
/// let sep = LineSeparator::try_from("\r\n").unwrap();
/// assert_eq!(sep, LineSeparator::CRLF);
/// assert_eq!(sep.len(), 2);
/// assert_eq!(sep.to_string(), "\r\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSeparator {
    first: char,
    second: Option<char>,
}

impl LineSeparator {
    /// Unix convention, `"\n"`.
    pub const LF: LineSeparator = LineSeparator { first: '\n', second: None };

    /// Windows convention, `"\r\n"`.
    pub const CRLF: LineSeparator = LineSeparator { first: '\r', second: Some('\n') };

    /// Classic Mac OS convention, `"\r"`.
    pub const CR: LineSeparator = LineSeparator { first: '\r', second: None };

    /// Creates a single-character line separator.
    pub fn single(first: char) -> Self {
        Self { first, second: None }
    }

    /// Creates a two-character line separator.
    pub fn pair(first: char, second: char) -> Self {
        Self { first, second: Some(second) }
    }

    /// The first (or only) character of the sequence.
    #[inline(always)]
    pub fn first(&self) -> char {
        self.first
    }

    /// The second character of the sequence, if any.
    #[inline(always)]
    pub fn second(&self) -> Option<char> {
        self.second
    }

    /// Number of characters in the sequence (1 or 2).
    #[inline]
    pub fn len(&self) -> usize {
        if self.second.is_some() { 2 } else { 1 }
    }
}

impl TryFrom<&str> for LineSeparator {
    type Error = InputError;

    /// Parses a line separator from a string of one or two characters.
    ///
    /// # Errors
    /// Returns [InputError::InvalidSeparator] if the string is empty or
    /// longer than two characters.
    fn try_from(value: &str) -> Result<Self, InputError> {
        let mut chars = value.chars();
        let (first, second) = (chars.next(), chars.next());
        if chars.next().is_some() {
            return Err(InputError::InvalidSeparator(value.to_string()));
        }
        match (first, second) {
            (Some(first), second) => Ok(Self { first, second }),
            (None, _) => Err(InputError::InvalidSeparator(value.to_string())),
        }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some(second) = self.second {
            write!(f, "{second}")?;
        }
        Ok(())
    }
}

impl Default for LineSeparator {
    fn default() -> Self {
        Self::LF
    }
}

// =#========================================================================#=
// FORMAT
// =#========================================================================$=
/// Configuration of the character input layer.
///
/// A [Format] is handed to [CharReader::new](crate::input::CharReader::new)
/// and states the configured [LineSeparator] plus the single character every
/// recognized separator collapses to while normalization is enabled.
///
/// Defaults to `"\n"` for both, which is a no-op normalization on Unix-style
/// input.
///
/// # Examples
/// ```
/// use charflow::{Format, LineSeparator};
///
/// let format = Format::default()
///     .with_line_separator(LineSeparator::CRLF)
///     .with_normalized_newline('\n');
/// assert_eq!(format.line_separator(), LineSeparator::CRLF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    line_separator: LineSeparator,
    normalized_newline: char,
}

impl Format {
    /// Sets the line separator sequence recognized in the raw input.
    pub fn with_line_separator(mut self, line_separator: LineSeparator) -> Self {
        self.line_separator = line_separator;
        self
    }

    /// Sets the single character that recognized line separators collapse to.
    pub fn with_normalized_newline(mut self, normalized_newline: char) -> Self {
        self.normalized_newline = normalized_newline;
        self
    }

    /// The configured line separator sequence.
    #[inline]
    pub fn line_separator(&self) -> LineSeparator {
        self.line_separator
    }

    /// The configured normalized newline character.
    #[inline]
    pub fn normalized_newline(&self) -> char {
        self.normalized_newline
    }
}

impl Default for Format {
    fn default() -> Self {
        Self {
            line_separator: LineSeparator::LF,
            normalized_newline: '\n',
        }
    }
}
