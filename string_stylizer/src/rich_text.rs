// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use attributed_text::{AttributeSegmentsWorkspace, AttributedText, TextRange, Utf16Text};

use crate::attachment::OBJECT_REPLACEMENT;
use crate::{Attribute, Attributes, ImageAttachment};

/// Finished styled text: the text plus its attribute assignments in the order they were made.
///
/// Assignments may overlap. Reading attributes back resolves each key to the value from the
/// latest assignment covering the position, so a later assignment only overrides the keys it
/// sets.
///
/// Values are never changed by the builder once produced; concatenation returns a new value.
///
/// ```
/// use string_stylizer::{RichText, Stylize};
/// use string_stylizer::color::rgb;
///
/// let left = "Hello, ".stylize().color(rgb(0x336699)).finalize();
/// let right = RichText::plain("world");
/// let text = left.concat(&right);
///
/// assert_eq!(text.as_str(), "Hello, world");
/// assert_eq!(text.len(), 12);
/// assert_eq!(text.attributes_at(3).foreground_color(), Some(rgb(0x336699)));
/// assert!(text.attributes_at(8).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    inner: AttributedText<Utf16Text, Attributes>,
}

/// A maximal run of code units that resolve to the same attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun {
    /// Code unit range of the run.
    pub range: Range<usize>,
    /// Attributes in effect over the whole run.
    pub attributes: Attributes,
}

impl RichText {
    /// Creates unstyled rich text.
    pub fn plain(text: impl Into<Utf16Text>) -> Self {
        Self {
            inner: AttributedText::new(text.into()),
        }
    }

    /// Creates the one-unit placeholder text for an inline image.
    pub fn attachment(image: ImageAttachment) -> Self {
        let mut placeholder = String::new();
        placeholder.push(OBJECT_REPLACEMENT);
        let mut text = Self::plain(placeholder);
        let range = TextRange::full(text.inner.text());
        text.inner.apply_attribute(
            range,
            Attributes::new().with(Attribute::Attachment(image)),
        );
        text
    }

    /// The length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The text content.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The underlying text storage.
    pub fn text(&self) -> &Utf16Text {
        self.inner.text()
    }

    /// Iterates over the committed assignments in the order they were made.
    pub fn assignments(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &Attributes)> {
        self.inner
            .attributes_iter()
            .map(|(range, attrs)| (range.clone(), attrs))
    }

    /// The number of committed assignments.
    pub fn assignments_len(&self) -> usize {
        self.inner.attributes_len()
    }

    /// Resolves the attributes in effect at code unit `unit`.
    ///
    /// Positions outside the text have no attributes.
    pub fn attributes_at(&self, unit: usize) -> Attributes {
        let mut resolved = Attributes::new();
        for attrs in self.inner.attributes_at(unit) {
            resolved.merge_from(attrs);
        }
        resolved
    }

    /// Splits the text into maximal runs of identical resolved attributes.
    ///
    /// The runs are contiguous and together cover the whole text. Empty text has no runs.
    pub fn runs(&self) -> Vec<AttributeRun> {
        let mut workspace = AttributeSegmentsWorkspace::new();
        self.runs_in(&mut workspace)
    }

    /// Same as [`RichText::runs`], reusing the allocations of `workspace`.
    pub fn runs_in(&self, workspace: &mut AttributeSegmentsWorkspace) -> Vec<AttributeRun> {
        let mut runs: Vec<AttributeRun> = Vec::new();
        let mut segments = workspace.segments(&self.inner);
        while let Some(range) = segments.next() {
            let mut attributes = Attributes::new();
            for (_, attrs) in segments.active_spans().iter() {
                attributes.merge_from(attrs);
            }
            match runs.last_mut() {
                Some(last) if last.range.end == range.start && last.attributes == attributes => {
                    last.range.end = range.end;
                }
                _ => runs.push(AttributeRun { range, attributes }),
            }
        }
        runs
    }

    /// Returns `self` followed by `other`.
    ///
    /// The assignments of `other` are shifted right by `self.len()`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.concat(&other.inner),
        }
    }

    /// Appends `other` in place; see [`RichText::concat`].
    pub fn append(&mut self, other: &Self) {
        self.inner.append(&other.inner);
    }

    /// Returns `self` followed by the placeholder for `image`.
    #[must_use]
    pub fn concat_attachment(&self, image: ImageAttachment) -> Self {
        self.concat(&Self::attachment(image))
    }

    /// Commits `attributes` over `range`.
    ///
    /// Empty sets and empty ranges leave the text unchanged.
    pub(crate) fn commit(&mut self, range: TextRange, attributes: Attributes) {
        if attributes.is_empty() {
            log::trace!("nothing pending for {range:?}");
            return;
        }
        if range.is_empty() {
            log::debug!(
                "dropping {} pending attributes for empty range {range:?}",
                attributes.len()
            );
            return;
        }
        self.inner.apply_attribute(range, attributes);
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for RichText {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;
    use alloc::vec;

    fn with(text: &str, spans: &[(Range<usize>, Attribute)]) -> RichText {
        let mut rich = RichText::plain(text);
        for (range, attr) in spans {
            let range = TextRange::new(rich.text(), range.clone()).unwrap();
            rich.commit(range, Attributes::new().with(attr.clone()));
        }
        rich
    }

    #[test]
    fn later_assignments_override_only_their_keys() {
        let mut rich = RichText::plain("abcdef");
        rich.commit(
            TextRange::new(rich.text(), 0..6).unwrap(),
            Attributes::new()
                .with(Attribute::ForegroundColor(rgb(0x111111)))
                .with(Attribute::Kern(1.0)),
        );
        rich.commit(
            TextRange::new(rich.text(), 2..4).unwrap(),
            Attributes::new().with(Attribute::ForegroundColor(rgb(0x222222))),
        );

        let inner = rich.attributes_at(3);
        assert_eq!(inner.foreground_color(), Some(rgb(0x222222)));
        assert_eq!(inner.kern(), Some(1.0));

        let outer = rich.attributes_at(5);
        assert_eq!(outer.foreground_color(), Some(rgb(0x111111)));
        assert_eq!(outer.kern(), Some(1.0));

        assert!(rich.attributes_at(6).is_empty());
    }

    #[test]
    fn runs_cover_the_text_and_coalesce() {
        let rich = with(
            "abcdef",
            &[
                (0..2, Attribute::Kern(1.0)),
                (2..4, Attribute::Kern(1.0)),
                (4..5, Attribute::Ligature(0)),
            ],
        );
        let runs = rich.runs();
        let ranges: Vec<_> = runs.iter().map(|run| run.range.clone()).collect();
        assert_eq!(ranges, vec![0..4, 4..5, 5..6]);
        assert_eq!(runs[0].attributes.kern(), Some(1.0));
        assert_eq!(runs[1].attributes.ligature(), Some(0));
        assert!(runs[2].attributes.is_empty());

        assert!(RichText::plain("").runs().is_empty());
    }

    #[test]
    fn empty_commits_are_dropped() {
        let mut rich = RichText::plain("abc");
        rich.commit(TextRange::new(rich.text(), 0..3).unwrap(), Attributes::new());
        rich.commit(
            TextRange::new(rich.text(), 1..1).unwrap(),
            Attributes::new().with(Attribute::Kern(2.0)),
        );
        assert_eq!(rich.assignments_len(), 0);
    }

    #[test]
    fn concat_shifts_the_right_hand_side() {
        let left = with("ab", &[(0..1, Attribute::Kern(1.0))]);
        let right = with("cde", &[(1..3, Attribute::Kern(2.0))]);
        let joined = left.concat(&right);

        assert_eq!(joined.as_str(), "abcde");
        let assignments: Vec<_> = joined.assignments().map(|(range, _)| range).collect();
        assert_eq!(assignments, vec![0..1, 3..5]);
        assert_eq!(joined.attributes_at(2).kern(), None);
        assert_eq!(joined.attributes_at(4).kern(), Some(2.0));

        let mut appended = left.clone();
        appended.append(&right);
        assert_eq!(appended, joined);
    }

    #[test]
    fn attachment_can_be_appended() {
        let image = ImageAttachment::with_dimensions(3, 16.0, 16.0);
        let rich = RichText::plain("icon: ").concat_attachment(image);
        assert_eq!(rich.len(), 7);
        assert_eq!(rich.attributes_at(6).attachment(), Some(&image));
        assert!(rich.attributes_at(5).is_empty());
    }
}
