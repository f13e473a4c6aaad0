//! Streaming UTF-8 implementation of the character source.
//!
//! This module provides [Utf8CharSource], which decodes characters on the
//! fly from any [Read] implementor. Use this for large files where loading
//! everything into memory would be impractical.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str;

use crate::input::char_source::CharSource;
use crate::input::error::InputError;

// =#========================================================================#=
// UTF-8 CHAR SOURCE
// =#========================================================================$=
/// A character source decoding UTF-8 from a byte stream.
///
/// Bytes are pulled into a fixed internal buffer and decoded chunk by chunk.
/// A multi-byte sequence split at the end of the byte buffer is carried over
/// to the next refill, so chunking is invisible to callers.
pub struct Utf8CharSource<R: Read> {
    /// Underlying byte stream
    inner: R,

    /// Fixed byte buffer refilled from the stream
    bytes: Box<[u8]>,

    /// Start of the not-yet-decoded window within `bytes`
    start: usize,

    /// End of the valid window within `bytes`
    end: usize,

    /// Total bytes decoded so far, reported as the offset in decoding errors
    decoded: u64,

    /// Whether the stream reported end of input
    eof: bool,
}

impl Utf8CharSource<File> {
    /// Creates a UTF-8 character source reading from a file.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Utf8CharSource<File>> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> Utf8CharSource<R> {
    /// Default capacity of the internal byte buffer.
    const BYTE_BUFFER_CAPACITY: usize = 8192;

    /// Creates a UTF-8 character source over any byte reader.
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, Self::BYTE_BUFFER_CAPACITY)
    }

    /// Creates a UTF-8 character source with a custom byte buffer capacity.
    ///
    /// # Arguments
    /// * `inner` - The byte stream to decode
    /// * `capacity` - Byte buffer size; clamped to at least 4 so any single
    ///   character fits
    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            bytes: vec![0u8; capacity.max(4)].into_boxed_slice(),
            start: 0,
            end: 0,
            decoded: 0,
            eof: false,
        }
    }

    /// Moves an incomplete trailing sequence to the buffer front and refills
    /// the remainder of the buffer from the stream.
    ///
    /// # Errors
    /// Returns [InputError::InvalidUtf8] if the stream ends in the middle of
    /// a multi-byte sequence, [InputError::Io] on read failure.
    fn carry_fragment(&mut self) -> Result<(), InputError> {
        let fragment = self.end - self.start;
        self.bytes.copy_within(self.start..self.end, 0);
        self.start = 0;
        self.end = fragment;

        let read = self.inner.read(&mut self.bytes[fragment..])?;
        if read == 0 {
            // Truncated stream: the fragment can never complete
            self.eof = true;
            return Err(InputError::InvalidUtf8 { offset: self.decoded });
        }
        self.end += read;
        Ok(())
    }
}

impl<R: Read> CharSource for Utf8CharSource<R> {
    fn read_chars(&mut self, out: &mut [char]) -> Result<usize, InputError> {
        let mut written = 0;

        while written < out.len() {
            if self.start >= self.end {
                if self.eof {
                    break;
                }
                self.start = 0;
                self.end = self.inner.read(&mut self.bytes)?;
                if self.end == 0 {
                    self.eof = true;
                    break;
                }
            }

            let window = &self.bytes[self.start..self.end];
            let (valid, incomplete) = match str::from_utf8(window) {
                Ok(_) => (window.len(), false),
                Err(e) => (e.valid_up_to(), e.error_len().is_none()),
            };

            if valid == 0 {
                if !incomplete {
                    return Err(InputError::InvalidUtf8 { offset: self.decoded });
                }
                // Multi-byte sequence split at the buffer boundary
                self.carry_fragment()?;
                continue;
            }

            let chunk = str::from_utf8(&window[..valid])
                .map_err(|_| InputError::InvalidUtf8 { offset: self.decoded })?;
            for ch in chunk.chars() {
                if written == out.len() {
                    break;
                }
                out[written] = ch;
                written += 1;
                self.start += ch.len_utf8();
                self.decoded += ch.len_utf8() as u64;
            }
        }

        Ok(written)
    }
}

// =#========================================================================#=
// TESTS - UTF-8 CHAR SOURCE
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all<R: Read>(mut source: Utf8CharSource<R>) -> Result<String, InputError> {
        let mut out = [char::default(); 7];
        let mut collected = String::new();
        loop {
            let n = source.read_chars(&mut out)?;
            if n == 0 {
                return Ok(collected);
            }
            collected.extend(&out[..n]);
        }
    }

    #[test]
    fn test_decodes_ascii() {
        let source = Utf8CharSource::new(Cursor::new("plain old csv input"));
        assert_eq!(read_all(source).unwrap(), "plain old csv input");
    }

    #[test]
    fn test_decodes_multibyte_split_at_buffer_boundary() {
        // 5-byte capacity forces the 3-byte 'ツ' to straddle refills
        let input = "abcdツefg";
        let source = Utf8CharSource::with_capacity(Cursor::new(input), 5);
        assert_eq!(read_all(source).unwrap(), input);
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let source = Utf8CharSource::new(Cursor::new(vec![b'o', b'k', 0xFF, b'x']));
        match read_all(source) {
            Err(InputError::InvalidUtf8 { offset }) => assert_eq!(offset, 2),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_truncated_sequence() {
        // First two bytes of 'ツ' only
        let source = Utf8CharSource::new(Cursor::new(vec![0xE3, 0x83]));
        assert!(matches!(
            read_all(source),
            Err(InputError::InvalidUtf8 { offset: 0 })
        ));
    }

    #[test]
    fn test_zero_after_eof() {
        let mut source = Utf8CharSource::new(Cursor::new("x"));
        let mut out = [char::default(); 4];
        assert_eq!(source.read_chars(&mut out).unwrap(), 1);
        assert_eq!(source.read_chars(&mut out).unwrap(), 0);
        assert_eq!(source.read_chars(&mut out).unwrap(), 0);
    }
}
