// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-based segmentation for [`AttributedText`].
//!
//! Given an [`AttributedText`] with overlapping attribute spans, this module produces
//! non-overlapping, contiguous code unit segments and provides a view of the spans active over
//! each segment, in the order they were applied.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::AttributedText;
use crate::TextStorage;

/// Reusable allocation workspace for attribute segmentation.
///
/// Reusing a workspace amortizes setup allocations when resolving many pieces of text.
#[derive(Clone, Debug, Default)]
pub struct AttributeSegmentsWorkspace {
    /// Sorted, deduplicated segment boundaries, always including `0` and the text length.
    boundaries: Vec<usize>,
    /// For each boundary, the span ids that start there (flattened, see `start_offsets`).
    start_events: Vec<usize>,
    start_offsets: Vec<usize>,
    /// For each boundary, the span ids that end there (flattened, see `end_offsets`).
    end_events: Vec<usize>,
    end_offsets: Vec<usize>,
    /// Span ids active over the current segment, kept sorted so application order is preserved.
    active: Vec<usize>,
}

impl AttributeSegmentsWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an iterator using this workspace's retained allocations.
    pub fn segments<'w, 'a, T: Debug + TextStorage, Attr: Debug>(
        &'w mut self,
        attributed: &'a AttributedText<T, Attr>,
    ) -> AttributeSegments<'w, 'a, T, Attr> {
        self.rebuild(attributed);
        AttributeSegments {
            attributed,
            workspace: self,
            index: 0,
        }
    }

    fn rebuild<T: Debug + TextStorage, Attr: Debug>(
        &mut self,
        attributed: &AttributedText<T, Attr>,
    ) {
        let len = attributed.len();
        let span_count = attributed.attributes_len();

        self.boundaries.clear();
        self.boundaries.reserve(2 + span_count.saturating_mul(2));
        self.boundaries.push(0);
        self.boundaries.push(len);
        for (range, _) in attributed.attributes_iter() {
            self.boundaries.push(range.start.min(len));
            self.boundaries.push(range.end.min(len));
        }
        self.boundaries.sort_unstable();
        self.boundaries.dedup();

        let boundary_count = self.boundaries.len();
        self.start_offsets.clear();
        self.start_offsets.resize(boundary_count + 1, 0);
        self.end_offsets.clear();
        self.end_offsets.resize(boundary_count + 1, 0);

        // First pass counts events per boundary (shifted by one so the prefix sum below turns
        // counts into offsets), second pass fills the flat event buffers.
        let mut located = Vec::with_capacity(span_count);
        for (id, (range, _)) in attributed.attributes_iter().enumerate() {
            let start = range.start.min(len);
            let end = range.end.min(len);
            if start >= end {
                continue;
            }
            let (Ok(start_boundary), Ok(end_boundary)) = (
                self.boundaries.binary_search(&start),
                self.boundaries.binary_search(&end),
            ) else {
                continue;
            };
            self.start_offsets[start_boundary + 1] += 1;
            self.end_offsets[end_boundary + 1] += 1;
            located.push((id, start_boundary, end_boundary));
        }
        for i in 0..boundary_count {
            self.start_offsets[i + 1] += self.start_offsets[i];
            self.end_offsets[i + 1] += self.end_offsets[i];
        }

        self.start_events.clear();
        self.start_events.resize(self.start_offsets[boundary_count], 0);
        self.end_events.clear();
        self.end_events.resize(self.end_offsets[boundary_count], 0);
        let mut start_cursor = self.start_offsets.clone();
        let mut end_cursor = self.end_offsets.clone();
        for (id, start_boundary, end_boundary) in located {
            self.start_events[start_cursor[start_boundary]] = id;
            start_cursor[start_boundary] += 1;
            self.end_events[end_cursor[end_boundary]] = id;
            end_cursor[end_boundary] += 1;
        }

        self.active.clear();
    }
}

/// Iterator over contiguous attribute segments produced from an [`AttributedText`].
///
/// Each yielded item is a non-empty, non-overlapping code unit range; together they cover the
/// whole text. The active spans for the yielded range are exposed through
/// [`AttributeSegments::active_spans`].
///
/// # Examples
///
/// ```
/// use attributed_text::{AttributeSegmentsWorkspace, AttributedText, TextRange, Utf16Text};
///
/// #[derive(Debug, PartialEq, Eq)]
/// enum Color {
///     Red,
///     Blue,
/// }
///
/// let mut text = AttributedText::new(Utf16Text::new("hello"));
/// text.apply_attribute(TextRange::clamped(text.text(), 0..2), Color::Red);
/// text.apply_attribute(TextRange::clamped(text.text(), 1..5), Color::Blue);
///
/// let mut workspace = AttributeSegmentsWorkspace::new();
/// let mut segments = workspace.segments(&text);
///
/// assert_eq!(segments.next(), Some(0..1));
/// let colors: Vec<_> = segments.active_spans().iter().map(|(_, c)| c).collect();
/// assert_eq!(colors, vec![&Color::Red]);
///
/// assert_eq!(segments.next(), Some(1..2));
/// let colors: Vec<_> = segments.active_spans().iter().map(|(_, c)| c).collect();
/// assert_eq!(colors, vec![&Color::Red, &Color::Blue]);
/// ```
///
/// Zero-length attribute ranges are excluded from the active span set, but their boundaries are
/// still included in segmentation, so they can split output ranges.
#[derive(Debug)]
pub struct AttributeSegments<'w, 'a, T: Debug + TextStorage, Attr: Debug> {
    attributed: &'a AttributedText<T, Attr>,
    workspace: &'w mut AttributeSegmentsWorkspace,
    index: usize,
}

impl<'a, T: Debug + TextStorage, Attr: Debug> AttributeSegments<'_, 'a, T, Attr> {
    fn enter_boundary(&mut self, boundary: usize) {
        let ws = &mut *self.workspace;
        for &id in &ws.end_events[ws.end_offsets[boundary]..ws.end_offsets[boundary + 1]] {
            if let Ok(ix) = ws.active.binary_search(&id) {
                ws.active.remove(ix);
            }
        }
        for &id in &ws.start_events[ws.start_offsets[boundary]..ws.start_offsets[boundary + 1]] {
            if let Err(ix) = ws.active.binary_search(&id) {
                ws.active.insert(ix, id);
            }
        }
    }

    /// Returns the spans active for the most recently yielded segment.
    ///
    /// Before the first successful [`Iterator::next`] call, and after exhaustion, this returns an
    /// empty view.
    pub fn active_spans(&self) -> ActiveSpans<'_, 'a, T, Attr> {
        ActiveSpans {
            active_ids: &self.workspace.active,
            attributed: self.attributed,
        }
    }

    fn remaining(&self) -> usize {
        self.workspace
            .boundaries
            .len()
            .saturating_sub(self.index + 1)
    }
}

impl<T: Debug + TextStorage, Attr: Debug> Iterator for AttributeSegments<'_, '_, T, Attr> {
    type Item = Range<usize>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 < self.workspace.boundaries.len() {
            self.enter_boundary(self.index);
            let start = self.workspace.boundaries[self.index];
            let end = self.workspace.boundaries[self.index + 1];
            self.index += 1;
            debug_assert!(start < end, "boundaries are sorted + deduped");
            return Some(start..end);
        }
        self.workspace.active.clear();
        None
    }
}

impl<T: Debug + TextStorage, Attr: Debug> ExactSizeIterator for AttributeSegments<'_, '_, T, Attr> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

/// A view of the attribute spans active over a particular segment.
///
/// Iterates in application order; use `.iter().rev()` for last-writer-first order.
#[derive(Clone, Debug)]
pub struct ActiveSpans<'s, 'a, T: Debug + TextStorage, Attr: Debug> {
    active_ids: &'s [usize],
    attributed: &'a AttributedText<T, Attr>,
}

/// Iterator over active spans in application order.
#[derive(Clone, Debug)]
pub struct ActiveSpansIter<'s, 'a, T: Debug + TextStorage, Attr: Debug> {
    ids: core::slice::Iter<'s, usize>,
    attributed: &'a AttributedText<T, Attr>,
}

impl<'a, T: Debug + TextStorage, Attr: Debug> Iterator for ActiveSpansIter<'_, 'a, T, Attr> {
    type Item = (&'a Range<usize>, &'a Attr);

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next()?;
        self.attributed.attribute_at_idx(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<T: Debug + TextStorage, Attr: Debug> ExactSizeIterator for ActiveSpansIter<'_, '_, T, Attr> {}

impl<T: Debug + TextStorage, Attr: Debug> DoubleEndedIterator for ActiveSpansIter<'_, '_, T, Attr> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next_back()?;
        self.attributed.attribute_at_idx(id)
    }
}

impl<'a, T: Debug + TextStorage, Attr: Debug> ActiveSpans<'_, 'a, T, Attr> {
    /// Iterate over the active spans in application order.
    pub fn iter(&self) -> ActiveSpansIter<'_, 'a, T, Attr> {
        ActiveSpansIter {
            ids: self.active_ids.iter(),
            attributed: self.attributed,
        }
    }

    /// Returns `true` if no attribute spans are active in this segment.
    pub fn is_empty(&self) -> bool {
        self.active_ids.is_empty()
    }

    /// Returns the number of active attribute spans.
    pub fn len(&self) -> usize {
        self.active_ids.len()
    }
}

impl<'active, 'a, T: Debug + TextStorage, Attr: Debug> IntoIterator
    for &'active ActiveSpans<'_, 'a, T, Attr>
{
    type Item = (&'a Range<usize>, &'a Attr);
    type IntoIter = ActiveSpansIter<'active, 'a, T, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
