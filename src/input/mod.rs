//! The character input layer: sources, buffering, normalization, facade.

pub mod char_reader;
pub mod char_source;
pub(crate) mod chunk_buffer;
pub mod detect;
pub mod error;
pub mod in_memory_char_source;
pub(crate) mod normalizer;
pub(crate) mod position;
pub mod utf8_char_source;

pub use char_reader::CharReader;
pub use char_source::CharSource;
pub use detect::{CountingSeparatorDetector, SeparatorDetector};
pub use error::InputError;
pub use in_memory_char_source::InMemoryCharSource;
pub use utf8_char_source::Utf8CharSource;
