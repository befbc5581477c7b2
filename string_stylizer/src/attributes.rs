// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed attribute vocabulary and the attribute set keyed by it.

use alloc::sync::Arc;

use peniko::Color;
use smallvec::SmallVec;

use crate::{Font, ImageAttachment, LineStyle, ParagraphStyle, Shadow};

/// Names every attribute a [`Attributes`] set can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// Glyph color.
    ForegroundColor,
    /// Color painted behind the glyphs.
    BackgroundColor,
    /// Font family and point size.
    Font,
    /// Underline line style.
    UnderlineStyle,
    /// Underline color; the foreground color is used when unset.
    UnderlineColor,
    /// Strikethrough line style.
    StrikethroughStyle,
    /// Strikethrough color; the foreground color is used when unset.
    StrikethroughColor,
    /// Glyph outline width, as a percentage of the font size.
    StrokeWidth,
    /// Glyph outline color.
    StrokeColor,
    /// Text shadow.
    Shadow,
    /// Extra spacing between characters, in points.
    Kern,
    /// Ligature level: `0` none, `1` default, `2` all.
    Ligature,
    /// Link target.
    Link,
    /// Vertical offset from the baseline, in points.
    BaselineOffset,
    /// Paragraph settings.
    ParagraphStyle,
    /// Inline image placeholder.
    Attachment,
}

impl AttributeKey {
    /// The number of distinct keys.
    pub const COUNT: usize = 16;

    /// A dense index in `0..COUNT`, for fixed-size per-key tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A single attribute value, tagged with the key it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// See [`AttributeKey::ForegroundColor`].
    ForegroundColor(Color),
    /// See [`AttributeKey::BackgroundColor`].
    BackgroundColor(Color),
    /// See [`AttributeKey::Font`].
    Font(Font),
    /// See [`AttributeKey::UnderlineStyle`].
    UnderlineStyle(LineStyle),
    /// See [`AttributeKey::UnderlineColor`].
    UnderlineColor(Color),
    /// See [`AttributeKey::StrikethroughStyle`].
    StrikethroughStyle(LineStyle),
    /// See [`AttributeKey::StrikethroughColor`].
    StrikethroughColor(Color),
    /// See [`AttributeKey::StrokeWidth`].
    StrokeWidth(f32),
    /// See [`AttributeKey::StrokeColor`].
    StrokeColor(Color),
    /// See [`AttributeKey::Shadow`].
    Shadow(Shadow),
    /// See [`AttributeKey::Kern`].
    Kern(f32),
    /// See [`AttributeKey::Ligature`].
    Ligature(u8),
    /// See [`AttributeKey::Link`].
    Link(Arc<str>),
    /// See [`AttributeKey::BaselineOffset`].
    BaselineOffset(f32),
    /// See [`AttributeKey::ParagraphStyle`].
    ParagraphStyle(ParagraphStyle),
    /// See [`AttributeKey::Attachment`].
    Attachment(ImageAttachment),
}

impl Attribute {
    /// The key this value is stored under.
    pub const fn key(&self) -> AttributeKey {
        match self {
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::Font(_) => AttributeKey::Font,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::StrikethroughColor(_) => AttributeKey::StrikethroughColor,
            Self::StrokeWidth(_) => AttributeKey::StrokeWidth,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::Shadow(_) => AttributeKey::Shadow,
            Self::Kern(_) => AttributeKey::Kern,
            Self::Ligature(_) => AttributeKey::Ligature,
            Self::Link(_) => AttributeKey::Link,
            Self::BaselineOffset(_) => AttributeKey::BaselineOffset,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::Attachment(_) => AttributeKey::Attachment,
        }
    }
}

/// A set of attributes with unique keys.
///
/// Setting a key that is already present replaces its value (last write wins). Insertion order is
/// not observable: two sets compare equal when they hold the same key/value pairs.
///
/// ```
/// use string_stylizer::{Attribute, AttributeKey, Attributes};
/// use string_stylizer::color::rgb;
///
/// let mut attrs = Attributes::new();
/// attrs.set(Attribute::ForegroundColor(rgb(0xff0000)));
/// attrs.set(Attribute::Kern(2.0));
/// attrs.set(Attribute::ForegroundColor(rgb(0x00ff00)));
///
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.foreground_color(), Some(rgb(0x00ff00)));
/// assert!(attrs.contains(AttributeKey::Kern));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Attributes {
    entries: SmallVec<[Attribute; 4]>,
}

impl Attributes {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of keys set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.entries.iter().find(|attr| attr.key() == key)
    }

    /// Returns `true` if `key` is set.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.get(key).is_some()
    }

    /// Stores `attribute`, replacing any value under the same key.
    pub fn set(&mut self, attribute: Attribute) {
        let key = attribute.key();
        match self.entries.iter_mut().find(|attr| attr.key() == key) {
            Some(slot) => *slot = attribute,
            None => self.entries.push(attribute),
        }
    }

    /// Returns the set with `attribute` stored.
    #[must_use]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.set(attribute);
        self
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<Attribute> {
        let ix = self.entries.iter().position(|attr| attr.key() == key)?;
        Some(self.entries.remove(ix))
    }

    /// Stores every attribute of `other`, overwriting keys present in both.
    ///
    /// Keys only present in `self` are kept.
    pub fn merge_from(&mut self, other: &Self) {
        for attr in &other.entries {
            self.set(attr.clone());
        }
    }

    /// Iterates over the stored attributes.
    pub fn iter(&self) -> core::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Iterates over the keys that are set.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.entries.iter().map(Attribute::key)
    }

    /// The foreground color, if set.
    pub fn foreground_color(&self) -> Option<Color> {
        match self.get(AttributeKey::ForegroundColor)? {
            Attribute::ForegroundColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The background color, if set.
    pub fn background_color(&self) -> Option<Color> {
        match self.get(AttributeKey::BackgroundColor)? {
            Attribute::BackgroundColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The font, if set.
    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font)? {
            Attribute::Font(font) => Some(font),
            _ => None,
        }
    }

    /// The underline style, if set.
    pub fn underline_style(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::UnderlineStyle)? {
            Attribute::UnderlineStyle(style) => Some(*style),
            _ => None,
        }
    }

    /// The underline color, if set.
    pub fn underline_color(&self) -> Option<Color> {
        match self.get(AttributeKey::UnderlineColor)? {
            Attribute::UnderlineColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The strikethrough style, if set.
    pub fn strikethrough_style(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::StrikethroughStyle)? {
            Attribute::StrikethroughStyle(style) => Some(*style),
            _ => None,
        }
    }

    /// The strikethrough color, if set.
    pub fn strikethrough_color(&self) -> Option<Color> {
        match self.get(AttributeKey::StrikethroughColor)? {
            Attribute::StrikethroughColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The stroke width, if set.
    pub fn stroke_width(&self) -> Option<f32> {
        match self.get(AttributeKey::StrokeWidth)? {
            Attribute::StrokeWidth(width) => Some(*width),
            _ => None,
        }
    }

    /// The stroke color, if set.
    pub fn stroke_color(&self) -> Option<Color> {
        match self.get(AttributeKey::StrokeColor)? {
            Attribute::StrokeColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The shadow, if set.
    pub fn shadow(&self) -> Option<&Shadow> {
        match self.get(AttributeKey::Shadow)? {
            Attribute::Shadow(shadow) => Some(shadow),
            _ => None,
        }
    }

    /// The kerning, if set.
    pub fn kern(&self) -> Option<f32> {
        match self.get(AttributeKey::Kern)? {
            Attribute::Kern(kern) => Some(*kern),
            _ => None,
        }
    }

    /// The ligature level, if set.
    pub fn ligature(&self) -> Option<u8> {
        match self.get(AttributeKey::Ligature)? {
            Attribute::Ligature(level) => Some(*level),
            _ => None,
        }
    }

    /// The link target, if set.
    pub fn link(&self) -> Option<&str> {
        match self.get(AttributeKey::Link)? {
            Attribute::Link(link) => Some(&**link),
            _ => None,
        }
    }

    /// The baseline offset, if set.
    pub fn baseline_offset(&self) -> Option<f32> {
        match self.get(AttributeKey::BaselineOffset)? {
            Attribute::BaselineOffset(offset) => Some(*offset),
            _ => None,
        }
    }

    /// The paragraph style, if set.
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle)? {
            Attribute::ParagraphStyle(style) => Some(style),
            _ => None,
        }
    }

    /// The image attachment, if set.
    pub fn attachment(&self) -> Option<&ImageAttachment> {
        match self.get(AttributeKey::Attachment)? {
            Attribute::Attachment(attachment) => Some(attachment),
            _ => None,
        }
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|attr| other.get(attr.key()) == Some(attr))
    }
}

impl Extend<Attribute> for Attributes {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attr in iter {
            self.set(attr);
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
