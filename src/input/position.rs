//! Character and line position tracking.

/// Monotonic counters for characters returned and line separators consumed.
///
/// Owned exclusively by one [CharReader](crate::input::CharReader) instance;
/// the single-threaded access contract means no synchronization is needed.
/// Reset only by a fresh `start()`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PositionTracker {
    chars: u64,
    lines: u64,
}

impl PositionTracker {
    /// Records one character returned to the caller. A normalized newline
    /// counts as exactly one character even when it stands for a
    /// two-character raw sequence.
    #[inline(always)]
    pub(crate) fn record_char(&mut self) {
        self.chars += 1;
    }

    /// Records one fully consumed line separator sequence.
    #[inline(always)]
    pub(crate) fn record_line(&mut self) {
        self.lines += 1;
    }

    #[inline]
    pub(crate) fn char_count(&self) -> u64 {
        self.chars
    }

    #[inline]
    pub(crate) fn line_count(&self) -> u64 {
        self.lines
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
