// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph-level layout settings carried by the paragraph style attribute.

/// Horizontal alignment of lines within a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Align to the leading edge for the paragraph's writing direction.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Center lines.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to both edges, except the last line.
    Justified,
}

/// How lines that are too long to fit are broken or truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrapping,
    /// Wrap at character boundaries.
    CharWrapping,
    /// Cut off lines that do not fit.
    Clipping,
    /// Elide the start of the line with an ellipsis.
    TruncatingHead,
    /// Elide the end of the line with an ellipsis.
    TruncatingTail,
    /// Elide the middle of the line with an ellipsis.
    TruncatingMiddle,
}

/// Base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WritingDirection {
    /// Determine the direction from the content.
    #[default]
    Natural,
    /// Left to right.
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

/// Paragraph settings.
///
/// This is a plain value: copying it out of an attribute set, changing a field and writing it
/// back never affects any other builder that shares the original.
///
/// Zero for a line height bound means "unbounded", and zero for the line height multiple means
/// "use the font's natural line height".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub alignment: TextAlignment,
    /// Indent of the first line from the leading margin.
    pub first_line_head_indent: f32,
    /// Indent of lines other than the first from the leading margin.
    pub head_indent: f32,
    /// Trailing indent. Positive values are measured from the leading margin, zero or negative
    /// values from the trailing margin.
    pub tail_indent: f32,
    /// Line breaking behavior.
    pub line_break_mode: LineBreakMode,
    /// Minimum line height.
    pub minimum_line_height: f32,
    /// Maximum line height.
    pub maximum_line_height: f32,
    /// Multiplier applied to the natural line height.
    pub line_height_multiple: f32,
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space before the paragraph.
    pub paragraph_spacing_before: f32,
    /// Base writing direction.
    pub base_writing_direction: WritingDirection,
}

impl ParagraphStyle {
    /// Creates a paragraph style with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the indents that are `Some`, leaving the others unchanged.
    #[must_use]
    pub fn indent(
        mut self,
        first_line_head: Option<f32>,
        tail: Option<f32>,
        other_head: Option<f32>,
    ) -> Self {
        if let Some(first_line_head) = first_line_head {
            self.first_line_head_indent = first_line_head;
        }
        if let Some(tail) = tail {
            self.tail_indent = tail;
        }
        if let Some(other_head) = other_head {
            self.head_indent = other_head;
        }
        self
    }

    /// Sets the line break mode.
    #[must_use]
    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    /// Sets the line height bounds and multiple that are `Some`, leaving the others unchanged.
    #[must_use]
    pub fn line_height(
        mut self,
        maximum: Option<f32>,
        minimum: Option<f32>,
        multiple: Option<f32>,
    ) -> Self {
        if let Some(maximum) = maximum {
            self.maximum_line_height = maximum;
        }
        if let Some(minimum) = minimum {
            self.minimum_line_height = minimum;
        }
        if let Some(multiple) = multiple {
            self.line_height_multiple = multiple;
        }
        self
    }

    /// Sets the line spacing (`after`) and paragraph spacing before (`before`) that are `Some`.
    #[must_use]
    pub fn line_spacing(mut self, after: Option<f32>, before: Option<f32>) -> Self {
        if let Some(after) = after {
            self.line_spacing = after;
        }
        if let Some(before) = before {
            self.paragraph_spacing_before = before;
        }
        self
    }

    /// Sets the base writing direction.
    #[must_use]
    pub fn base_writing_direction(mut self, direction: WritingDirection) -> Self {
        self.base_writing_direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_setters_only_touch_given_fields() {
        let style = ParagraphStyle::new()
            .indent(Some(10.0), None, Some(4.0))
            .indent(None, Some(-8.0), None);
        assert_eq!(style.first_line_head_indent, 10.0);
        assert_eq!(style.head_indent, 4.0);
        assert_eq!(style.tail_indent, -8.0);

        let style = style
            .line_height(Some(30.0), None, None)
            .line_height(None, Some(12.0), Some(1.5));
        assert_eq!(style.maximum_line_height, 30.0);
        assert_eq!(style.minimum_line_height, 12.0);
        assert_eq!(style.line_height_multiple, 1.5);

        let style = style.line_spacing(None, Some(6.0));
        assert_eq!(style.line_spacing, 0.0);
        assert_eq!(style.paragraph_spacing_before, 6.0);
    }

    #[test]
    fn defaults_are_natural() {
        let style = ParagraphStyle::default();
        assert_eq!(style.alignment, TextAlignment::Natural);
        assert_eq!(style.line_break_mode, LineBreakMode::WordWrapping);
        assert_eq!(style.base_writing_direction, WritingDirection::Natural);
    }
}
