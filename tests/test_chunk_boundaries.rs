//! Boundary-safety tests: separator sequences and multi-byte characters
//! split exactly at chunk or byte-buffer boundaries must be invisible to
//! callers.

use std::io::Cursor;

use charflow::input::{InMemoryCharSource, Utf8CharSource};
use charflow::{CharReader, Format, LineSeparator};

fn drain<S: charflow::input::CharSource>(reader: &mut CharReader<S>) -> String {
    let mut collected = String::new();
    while let Some(ch) = reader.next_char().unwrap() {
        collected.push(ch);
    }
    collected
}

#[test]
fn test_crlf_split_at_every_chunk_boundary() {
    let input = "aa\r\nbb\r\ncc\r\n";
    for chunk_len in 1..=8 {
        let format = Format::default().with_line_separator(LineSeparator::CRLF);
        let mut reader = CharReader::new(format).with_chunk_len(chunk_len);
        reader.start(InMemoryCharSource::from_str(input)).unwrap();

        assert_eq!(drain(&mut reader), "aa\nbb\ncc\n", "chunk_len {chunk_len}");
        assert_eq!(reader.line_count(), 3, "chunk_len {chunk_len}");
        assert_eq!(reader.char_count(), 9, "chunk_len {chunk_len}");
    }
}

#[test]
fn test_crlf_split_at_boundary_in_verbatim_mode() {
    // Chunk length 3 puts the seam between '\r' and '\n' of the first break
    let format = Format::default().with_line_separator(LineSeparator::CRLF);
    let mut reader = CharReader::new(format).with_chunk_len(3);
    reader.start(InMemoryCharSource::from_str("ab\r\ncd")).unwrap();
    reader.enable_normalize_line_endings(false);

    assert_eq!(drain(&mut reader), "ab\r\ncd");
    assert_eq!(reader.line_count(), 1);
}

#[test]
fn test_skip_lines_across_boundaries() {
    let format = Format::default().with_line_separator(LineSeparator::CRLF);
    let mut reader = CharReader::new(format).with_chunk_len(2);
    reader
        .start(InMemoryCharSource::from_str("one\r\ntwo\r\nthree"))
        .unwrap();

    reader.skip_lines(2).unwrap();
    assert_eq!(drain(&mut reader), "three");
}

#[test]
fn test_read_comment_separator_across_boundary() {
    let format = Format::default().with_line_separator(LineSeparator::CRLF);
    let mut reader = CharReader::new(format).with_chunk_len(4);
    reader
        .start(InMemoryCharSource::from_str("#ab\r\nrest"))
        .unwrap();

    reader.next_char().unwrap();
    assert_eq!(reader.read_comment().unwrap(), "ab");
    assert_eq!(reader.line_count(), 1);
    assert_eq!(reader.next_char().unwrap(), Some('r'));
}

#[test]
fn test_utf8_source_through_reader() {
    // Small byte capacity forces multi-byte characters across refills
    let input = "tūī,\r\nkākā,\r\nkea";
    let source = Utf8CharSource::with_capacity(Cursor::new(input.as_bytes().to_vec()), 5);
    let format = Format::default().with_line_separator(LineSeparator::CRLF);
    let mut reader = CharReader::new(format).with_chunk_len(4);
    reader.start(source).unwrap();

    assert_eq!(drain(&mut reader), "tūī,\nkākā,\nkea");
    assert_eq!(reader.line_count(), 2);
}

#[test]
fn test_separator_as_very_first_and_last_chars() {
    let format = Format::default().with_line_separator(LineSeparator::CRLF);
    let mut reader = CharReader::new(format).with_chunk_len(1);
    reader.start(InMemoryCharSource::from_str("\r\nmid\r\n")).unwrap();

    assert_eq!(drain(&mut reader), "\nmid\n");
    assert_eq!(reader.line_count(), 2);
}

#[test]
fn test_lone_cr_at_end_of_chunk_and_input() {
    // '\r' is the last character of the input and of its chunk; with a
    // strict "\r\n" separator it must come through as a plain character
    let format = Format::default().with_line_separator(LineSeparator::CRLF);
    let mut reader = CharReader::new(format).with_chunk_len(2);
    reader.start(InMemoryCharSource::from_str("a\r")).unwrap();

    assert_eq!(drain(&mut reader), "a\r");
    assert_eq!(reader.line_count(), 0);
}
