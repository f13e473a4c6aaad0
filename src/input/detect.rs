//! Line separator detection strategies.
//!
//! When detection is enabled on a [CharReader](crate::input::CharReader),
//! the strategy runs exactly once per `start()`, before the first character
//! is produced, against a sample of the buffered input. The separator it
//! picks is the one in use for the rest of that run.

use crate::format::LineSeparator;

/// Strategy deciding which line separator an input uses.
///
/// Implementations inspect a sample (at most one chunk) and either pick a
/// separator or report the sample as inconclusive, in which case the reader
/// keeps its configured separator.
pub trait SeparatorDetector {
    /// Picks a line separator from a sample of the input.
    ///
    /// # Arguments
    /// * `sample` - Up to one chunk of characters from the start of the input
    ///
    /// # Returns
    /// `Some(separator)` on a decision, `None` when inconclusive.
    fn detect(&self, sample: &[char]) -> Option<LineSeparator>;
}

// =#========================================================================#=
// COUNTING SEPARATOR DETECTOR
// =#========================================================================$=
/// Detector picking the most frequent line-break convention in the sample.
///
/// Counts `\r\n` pairs, lone `\n` and lone `\r` occurrences and picks the
/// majority. Ties prefer `\r\n`, then `\n`. A sample with no line break at
/// all is inconclusive.
#[derive(Debug, Default)]
pub struct CountingSeparatorDetector;

impl SeparatorDetector for CountingSeparatorDetector {
    fn detect(&self, sample: &[char]) -> Option<LineSeparator> {
        let mut crlf = 0usize;
        let mut lf = 0usize;
        let mut cr = 0usize;

        let mut i = 0;
        while i < sample.len() {
            match sample[i] {
                '\r' if sample.get(i + 1) == Some(&'\n') => {
                    crlf += 1;
                    i += 2;
                    continue;
                }
                '\r' => cr += 1,
                '\n' => lf += 1,
                _ => {}
            }
            i += 1;
        }

        if crlf == 0 && lf == 0 && cr == 0 {
            return None;
        }
        if crlf >= lf && crlf >= cr {
            Some(LineSeparator::CRLF)
        } else if lf >= cr {
            Some(LineSeparator::LF)
        } else {
            Some(LineSeparator::CR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(input: &str) -> Option<LineSeparator> {
        let sample: Vec<char> = input.chars().collect();
        CountingSeparatorDetector.detect(&sample)
    }

    #[test]
    fn test_detects_majority_convention() {
        assert_eq!(detect("a\r\nb\r\nc\nd"), Some(LineSeparator::CRLF));
        assert_eq!(detect("a\nb\nc\rd"), Some(LineSeparator::LF));
        assert_eq!(detect("a\rb\rc\nd"), Some(LineSeparator::CR));
    }

    #[test]
    fn test_crlf_not_counted_as_lone_chars() {
        // One \r\n plus one lone \n: tie, resolved in favor of \r\n
        assert_eq!(detect("a\r\nb\nc"), Some(LineSeparator::CRLF));
    }

    #[test]
    fn test_inconclusive_sample() {
        assert_eq!(detect("no line breaks here"), None);
        assert_eq!(detect(""), None);
    }
}
