// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::ops::Range;

/// A block of text that will be wrapped by an [`AttributedText`].
///
/// All lengths and offsets are counted in UTF-16 code units, so that ranges computed against one
/// snapshot of the text stay meaningful after the text is appended to another.
///
/// [`AttributedText`]: crate::AttributedText
pub trait TextStorage {
    /// The length of the underlying text, in UTF-16 code units.
    fn len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the underlying text as a `&str`.
    fn as_str(&self) -> &str;
}

/// Shared, immutable text with a cached UTF-16 length.
///
/// Cloning is cheap: the content lives behind an [`Arc`], so many values derived from the same
/// source share one allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16Text {
    text: Arc<str>,
    units: usize,
}

impl Utf16Text {
    /// Wraps `text`, counting its code units once.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let units = text.encode_utf16().count();
        Self { text, units }
    }

    /// Returns a new text holding `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        if other.text.is_empty() {
            return self.clone();
        }
        if self.text.is_empty() {
            return other.clone();
        }
        let mut joined = String::with_capacity(self.text.len() + other.text.len());
        joined.push_str(&self.text);
        joined.push_str(&other.text);
        Self {
            text: Arc::from(joined),
            units: self.units + other.units,
        }
    }

    /// Converts a UTF-16 code unit offset into a byte offset.
    ///
    /// Offsets that land inside a surrogate pair round down to the start of the character.
    /// Offsets past the end map to the byte length.
    pub fn unit_to_byte(&self, unit: usize) -> usize {
        unit_to_byte(&self.text, unit)
    }

    /// Converts a byte offset into a UTF-16 code unit offset.
    ///
    /// Offsets inside a multibyte character round down to the start of the character.
    pub fn byte_to_unit(&self, byte: usize) -> usize {
        byte_to_unit(&self.text, byte)
    }

    /// Returns the code unit span of the first occurrence of `needle`.
    ///
    /// Matching is case-sensitive and literal. An empty needle never matches.
    pub fn find(&self, needle: &str) -> Option<Range<usize>> {
        if needle.is_empty() {
            return None;
        }
        let byte = self.text.find(needle)?;
        let start = self.byte_to_unit(byte);
        Some(start..start + needle.encode_utf16().count())
    }

    /// Returns the text covered by a code unit range, rounding both ends down to characters.
    pub fn slice_units(&self, range: Range<usize>) -> &str {
        let start = self.unit_to_byte(range.start);
        let end = self.unit_to_byte(range.end).max(start);
        &self.text[start..end]
    }
}

impl TextStorage for Utf16Text {
    fn len(&self) -> usize {
        self.units
    }

    fn as_str(&self) -> &str {
        &self.text
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        self.encode_utf16().count()
    }

    fn as_str(&self) -> &str {
        self
    }
}

impl TextStorage for String {
    fn len(&self) -> usize {
        self.encode_utf16().count()
    }

    fn as_str(&self) -> &str {
        self
    }
}

impl From<&str> for Utf16Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Utf16Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Arc<str>> for Utf16Text {
    fn from(value: Arc<str>) -> Self {
        Self::new(value)
    }
}

pub(crate) fn unit_to_byte(text: &str, unit: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > unit {
            return byte;
        }
        units = next;
    }
    text.len()
}

pub(crate) fn byte_to_unit(text: &str, byte: usize) -> usize {
    let mut units = 0;
    for (offset, ch) in text.char_indices() {
        if offset + ch.len_utf8() > byte {
            break;
        }
        units += ch.len_utf16();
    }
    units
}
