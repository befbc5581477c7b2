// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Bound, Range, RangeBounds};

use crate::{Error, TextStorage};

/// A validated UTF-16 code unit range into a text buffer.
///
/// This is a convenience wrapper around `Range<usize>` that carries invariants useful for
/// attributed text APIs:
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
///
/// There are two ways to obtain one. [`TextRange::new`] validates and reports a violation as an
/// [`Error`]. [`TextRange::clamped`] never fails: it accepts any [`RangeBounds`], truncates the end
/// to the text length and collapses the range to empty when the start lies past the end. The
/// clamping form is what lets callers write "from index 5 to the end" as `5..` or `5..usize::MAX`
/// without knowing the length up front.
///
/// ## Important
///
/// `TextRange` does not currently encode which specific text buffer it was validated against. It
/// is the caller's responsibility to only reuse a `TextRange` with the same underlying text
/// content it was validated for.
///
/// ## Example
///
/// ```
/// use attributed_text::{AttributedText, TextRange, Utf16Text};
///
/// let mut text = AttributedText::new(Utf16Text::new("Hello!"));
/// let range = TextRange::clamped(text.text(), 3..usize::MAX);
/// assert_eq!(range.as_range(), 3..6);
/// text.apply_attribute(range, ());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new<T: TextStorage>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// Returns a `TextRange` covering the whole text.
    #[inline]
    pub fn full<T: TextStorage>(text: &T) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    /// Returns the `TextRange` obtained by clamping `bounds` to the text.
    ///
    /// The end is truncated to the text length; a start at or beyond the (clamped) end yields an
    /// empty range positioned at the end. Unbounded ends mean "from the start" and "to the end".
    pub fn clamped<T: TextStorage, R: RangeBounds<usize>>(text: &T, bounds: R) -> Self {
        Self::clamp_to_len(text.len(), bounds)
    }

    /// Same as [`TextRange::clamped`], given just the length of the text.
    pub fn clamp_to_len<R: RangeBounds<usize>>(len: usize, bounds: R) -> Self {
        let start = match bounds.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match bounds.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };
        let end = end.min(len);
        let start = start.min(end);
        Self { start, end }
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for internal callers that already maintain range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start code unit offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end code unit offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of code units covered.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no code units.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range moved right by `offset` code units.
    #[must_use]
    #[inline]
    pub const fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[inline]
pub(crate) fn validate_range<T: TextStorage>(text: &T, range: &Range<usize>) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, text_len));
    }
    if range.start > text_len || range.end > text_len {
        return Err(Error::invalid_bounds(range.start, range.end, text_len));
    }
    Ok(())
}
