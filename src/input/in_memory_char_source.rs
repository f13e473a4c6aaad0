//! In-memory implementation of the character source.

use crate::input::char_source::CharSource;
use crate::input::error::InputError;

// =#========================================================================#=
// IN MEMORY CHAR SOURCE
// =#========================================================================$=
/// A character source that owns its data.
///
/// This is the most efficient source for inputs that already sit in memory,
/// such as test fixtures or small files read upfront.
pub struct InMemoryCharSource {
    /// The owned characters being served
    input: Vec<char>,
    /// Current position within `input`
    pos: usize,
}

impl InMemoryCharSource {
    /// Creates an in-memory character source from a string slice.
    pub fn from_str(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Creates an in-memory character source from an owned string.
    pub fn from_string(input: String) -> Self {
        Self::from_str(&input)
    }
}

impl CharSource for InMemoryCharSource {
    #[inline]
    fn read_chars(&mut self, out: &mut [char]) -> Result<usize, InputError> {
        let available = self.input.len() - self.pos;
        let n = available.min(out.len());
        out[..n].copy_from_slice(&self.input[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
