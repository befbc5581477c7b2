// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Underline, strikethrough and shadow values.

use peniko::Color;
use peniko::kurbo::Vec2;

bitflags::bitflags! {
    /// Line style flags for underline and strikethrough decorations.
    ///
    /// The raw values match the common platform encoding, so a stored value can be handed to a
    /// renderer unchanged. A style is one thickness flag, optionally combined with one pattern
    /// flag and [`LineStyle::BY_WORD`].
    ///
    /// ```
    /// use string_stylizer::LineStyle;
    ///
    /// let style = LineStyle::DOUBLE | LineStyle::PATTERN_DOT;
    /// assert_eq!(style.bits(), 0x109);
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LineStyle: u32 {
        /// A single thin line.
        const SINGLE = 0x01;
        /// A single thick line.
        const THICK = 0x02;
        /// Two thin lines.
        const DOUBLE = 0x09;
        /// A dotted pattern.
        const PATTERN_DOT = 0x0100;
        /// A dashed pattern.
        const PATTERN_DASH = 0x0200;
        /// An alternating dash and dot pattern.
        const PATTERN_DASH_DOT = 0x0300;
        /// An alternating dash and two dots pattern.
        const PATTERN_DASH_DOT_DOT = 0x0400;
        /// Draw only under words, skipping whitespace.
        const BY_WORD = 0x8000;
    }
}

impl LineStyle {
    /// Combines `styles` with bitwise OR, defaulting to [`LineStyle::SINGLE`] when there are none.
    pub fn combine(styles: impl IntoIterator<Item = Self>) -> Self {
        let mut styles = styles.into_iter().peekable();
        if styles.peek().is_none() {
            return Self::SINGLE;
        }
        styles.fold(Self::empty(), |acc, style| acc | style)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// A text shadow.
///
/// A freshly created shadow matches the usual platform default: offset `(0, -3)`, no blur and no
/// explicit color (renderers then use black at one third opacity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow from the glyphs, in points.
    pub offset: Vec2,
    /// Shadow color, or `None` for the renderer's default.
    pub color: Option<Color>,
    /// Blur radius in points.
    pub blur_radius: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, -3.0),
            color: None,
            blur_radius: 0.0,
        }
    }
}

impl Shadow {
    /// Creates a shadow with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<Vec2>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Sets the color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the blur radius.
    #[must_use]
    pub fn blur_radius(mut self, radius: f64) -> Self {
        self.blur_radius = radius;
        self
    }
}
