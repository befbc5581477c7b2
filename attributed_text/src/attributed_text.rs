// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Error, TextRange, TextStorage, Utf16Text};

/// A block of text with attributes applied to ranges within the text.
///
/// Ranges are half-open and counted in UTF-16 code units. Attributes are kept in the order they
/// were applied; overlapping ranges are allowed and it is up to the consumer to decide how later
/// assignments combine with earlier ones (see [`AttributeSegments`](crate::AttributeSegments)).
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<T: Debug + TextStorage, Attr: Debug> {
    text: T,
    attributes: Vec<(Range<usize>, Attr)>,
}

impl<T: Debug + TextStorage + Default, Attr: Debug> Default for AttributedText<T, Attr> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug + TextStorage, Attr: Debug> AttributedText<T, Attr> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            attributes: Vec::default(),
        }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the underlying text as `&str`.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Apply an `attribute` to a validated [`TextRange`].
    pub fn apply_attribute(&mut self, range: TextRange, attribute: Attr) {
        debug_assert!(
            range.end() <= self.text.len(),
            "TextRange {:?} used with a shorter text (len {})",
            range,
            self.text.len()
        );
        self.attributes.push((range.as_range(), attribute));
    }

    /// Apply an `attribute` to a code unit `range`, validating it first.
    pub fn apply_attribute_units(
        &mut self,
        range: Range<usize>,
        attribute: Attr,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.attributes.push((range, attribute));
        Ok(())
    }

    /// Iterate over all attributes and the ranges they apply to.
    ///
    /// Attributes are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.attributes.iter().map(|(range, attr)| (range, attr))
    }

    /// Returns the attribute at position `idx` in application order, with its range.
    pub fn attribute_at_idx(&self, idx: usize) -> Option<(&Range<usize>, &Attr)> {
        self.attributes.get(idx).map(|(range, attr)| (range, attr))
    }

    /// Get an iterator over the attributes that apply at the given code unit `index`.
    ///
    /// This doesn't handle conflicting attributes, it just reports everything in application order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes.iter().filter_map(move |(attr_span, attr)| {
            if attr_span.contains(&index) {
                Some(attr)
            } else {
                None
            }
        })
    }

    /// Get an iterator over the attributes that apply to the given `range`.
    ///
    /// This doesn't handle conflicting attributes, it just reports everything.
    pub fn attributes_for_range(&self, range: Range<usize>) -> impl Iterator<Item = &Attr> {
        self.attributes.iter().filter_map(move |(attr_span, attr)| {
            if (attr_span.start < range.end) && (attr_span.end > range.start) {
                Some(attr)
            } else {
                None
            }
        })
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Remove all applied attribute spans.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }
}

impl<Attr: Debug + Clone> AttributedText<Utf16Text, Attr> {
    /// Returns a new value holding `self` followed by `other`.
    ///
    /// The attributes of `other` keep their relative positions: each of its ranges is shifted
    /// right by the length of `self`, and they are ordered after all of `self`'s attributes.
    pub fn concat(&self, other: &Self) -> Self {
        let offset = self.len();
        let mut attributes = Vec::with_capacity(self.attributes.len() + other.attributes.len());
        attributes.extend(self.attributes.iter().cloned());
        attributes.extend(
            other
                .attributes
                .iter()
                .map(|(range, attr)| (range.start + offset..range.end + offset, attr.clone())),
        );
        Self {
            text: self.text.concat(&other.text),
            attributes,
        }
    }

    /// Appends `other` to `self` in place, shifting its attribute ranges by the current length.
    pub fn append(&mut self, other: &Self) {
        let offset = self.len();
        self.text = self.text.concat(&other.text);
        self.attributes.extend(
            other
                .attributes
                .iter()
                .map(|(range, attr)| (range.start + offset..range.end + offset, attr.clone())),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedText, ErrorKind, TextRange, Utf16Text};
    use alloc::format;
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAttribute {
        Keep,
        Remove,
    }

    #[test]
    fn attributes_at() {
        let mut at = AttributedText::new(Utf16Text::new("Hello!"));

        assert!(at.apply_attribute_units(1..3, TestAttribute::Keep).is_ok());
        assert!(at.apply_attribute_units(2..5, TestAttribute::Remove).is_ok());

        assert!(at.attributes_at(0).collect::<Vec<_>>().is_empty());
        assert_eq!(
            at.attributes_at(2).collect::<Vec<_>>(),
            [&TestAttribute::Keep, &TestAttribute::Remove]
        );
        assert_eq!(
            at.attributes_for_range(3..4).collect::<Vec<_>>(),
            [&TestAttribute::Remove]
        );
    }

    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    #[test]
    fn bad_range_for_apply_attribute() {
        let mut at = AttributedText::new(Utf16Text::new("Hello!"));

        assert!(at.apply_attribute_units(0..3, TestAttribute::Keep).is_ok());
        assert!(at.apply_attribute_units(0..6, TestAttribute::Keep).is_ok());
        match at.apply_attribute_units(4..3, TestAttribute::Keep) {
            Err(e) => {
                assert_eq!(e.kind(), ErrorKind::InvalidRange);
                let msg = format!("{}", e);
                assert!(msg.contains("4..3"));
                assert!(msg.contains("invalid range"));
                assert!(msg.contains("start > end"));
            }
            _ => panic!("expected InvalidRange"),
        }
        match at.apply_attribute_units(7..8, TestAttribute::Keep) {
            Err(e) => {
                assert_eq!(e.kind(), ErrorKind::InvalidBounds);
                assert_eq!(e.start(), 7);
                assert_eq!(e.end(), 8);
                assert_eq!(e.len(), 6);
                let msg = format!("{}", e);
                assert!(msg.contains("range 7..8"));
                assert!(msg.contains("len 6"));
            }
            _ => panic!("expected InvalidBounds"),
        }
        assert_eq!(at.attributes_len(), 2);
    }

    #[test]
    fn ranges_count_code_units() {
        // Four code units: 'é' is one, the flag's first regional indicator is two, '!' is one.
        let mut at = AttributedText::new(Utf16Text::new("é🇯!"));
        assert_eq!(at.len(), 4);
        assert!(at.apply_attribute_units(3..4, TestAttribute::Keep).is_ok());
        assert!(at.apply_attribute_units(4..5, TestAttribute::Keep).is_err());
    }

    #[test]
    fn concat_shifts_right_attributes() {
        let mut left = AttributedText::new(Utf16Text::new("String"));
        left.apply_attribute(TextRange::clamped(left.text(), 5..), TestAttribute::Keep);
        let mut right = AttributedText::new(Utf16Text::new("Stylizer"));
        right.apply_attribute(TextRange::clamped(right.text(), 1..4), TestAttribute::Remove);

        let joined = left.concat(&right);
        assert_eq!(joined.as_str(), "StringStylizer");
        assert_eq!(joined.len(), 14);
        let spans: Vec<_> = joined
            .attributes_iter()
            .map(|(r, a)| (r.clone(), a.clone()))
            .collect();
        assert_eq!(
            spans,
            [(5..6, TestAttribute::Keep), (7..10, TestAttribute::Remove)]
        );

        let mut appended = left.clone();
        appended.append(&right);
        assert_eq!(appended, joined);
    }

    #[test]
    fn concat_with_empty_is_identity() {
        let mut styled = AttributedText::new(Utf16Text::new("abc"));
        styled.apply_attribute(TextRange::clamped(styled.text(), ..), TestAttribute::Keep);
        let empty = AttributedText::<Utf16Text, TestAttribute>::default();

        assert_eq!(empty.concat(&styled), styled);
        assert_eq!(styled.concat(&empty), styled);
    }

    #[test]
    fn clear_attributes_keeps_text() {
        let mut at = AttributedText::new(Utf16Text::new("abc"));
        at.apply_attribute(TextRange::clamped(at.text(), ..), TestAttribute::Keep);
        at.clear_attributes();
        assert_eq!(at.attributes_len(), 0);
        assert_eq!(at.as_str(), "abc");
    }
}
