// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fluent builder.

use alloc::sync::Arc;
use core::marker::PhantomData;
use core::ops::{Bound, Range, RangeBounds};

use attributed_text::{TextRange, Utf16Text};
use peniko::Color;
use peniko::kurbo::Vec2;

use crate::{
    Attribute, AttributeKey, Attributes, Font, FontFamily, LineBreakMode, LineStyle,
    ParagraphStyle, RichText, Shadow, StylizerConfig, TextAlignment, WritingDirection,
};

mod sealed {
    #[allow(unnameable_types, reason = "keeps `State` closed to other crates")]
    pub trait Sealed {}
}

/// A builder state. Implemented only by [`Styling`] and [`NarrowDown`].
pub trait State: sealed::Sealed {}

/// The state after at least one style call: the builder can be narrowed or finalized.
#[derive(Clone, Copy, Debug)]
pub enum Styling {}

/// The state right after narrowing: a style call must come next.
#[derive(Clone, Copy, Debug)]
pub enum NarrowDown {}

impl sealed::Sealed for Styling {}
impl sealed::Sealed for NarrowDown {}
impl State for Styling {}
impl State for NarrowDown {}

/// Builds a [`RichText`] by chaining style calls over a pending range.
///
/// Style calls collect attributes for the pending range. [`range`](Stylizer::range) and
/// [`search`](Stylizer::search) commit them and move the pending range; [`finalize`]
/// commits the last pending set and returns the text. Every call consumes the builder and
/// returns a new one, so branching off a chain means cloning it first.
///
/// ```
/// use string_stylizer::{FontName, Stylize};
/// use string_stylizer::color::rgb;
///
/// let text = "StringStylizer"
///     .stylize()
///     .color(rgb(0x0000ff))
///     .range(6..)
///     .size(20.0)
///     .font_name(FontName::HelveticaNeueBold)
///     .finalize();
///
/// assert_eq!(text.attributes_at(0).foreground_color(), Some(rgb(0x0000ff)));
/// let font = text.attributes_at(6).font().cloned().unwrap();
/// assert_eq!(font.family.name(), Some("HelveticaNeue-Bold"));
/// assert_eq!(font.size, 20.0);
/// ```
///
/// Narrowing twice in a row, or finalizing right after narrowing, does not compile:
///
/// ```compile_fail
/// use string_stylizer::Stylize;
///
/// let text = "abc".stylize().range(1..).finalize();
/// ```
///
/// [`finalize`]: Stylizer::finalize
#[derive(Clone, Debug)]
pub struct Stylizer<S: State = Styling> {
    committed: RichText,
    pending: Attributes,
    range: TextRange,
    config: Arc<StylizerConfig>,
    _state: PhantomData<S>,
}

impl Stylizer<Styling> {
    /// Starts styling `text` with the default configuration. The pending range is the whole text.
    pub fn new(text: impl Into<Utf16Text>) -> Self {
        Self::with_config(text, StylizerConfig::default())
    }

    /// Starts styling `text` with `config`.
    pub fn with_config(
        text: impl Into<Utf16Text>,
        config: impl Into<Arc<StylizerConfig>>,
    ) -> Self {
        Self::from_rich_text(RichText::plain(text), config)
    }

    /// Continues styling an already finished text. Its assignments are kept.
    pub fn from_rich_text(text: RichText, config: impl Into<Arc<StylizerConfig>>) -> Self {
        let range = TextRange::full(text.text());
        Self {
            committed: text,
            pending: Attributes::new(),
            range,
            config: config.into(),
            _state: PhantomData,
        }
    }

    /// Commits the pending attributes and targets `bounds` next.
    ///
    /// The end is clamped to the text length, so `n..` and `n..usize::MAX` both mean "from `n`
    /// to the end". A start at or past the clamped end gives an empty range, which styles
    /// nothing.
    pub fn range(self, bounds: impl RangeBounds<usize>) -> Stylizer<NarrowDown> {
        let (committed, config) = self.bake();
        let len = committed.len();
        let range = TextRange::clamp_to_len(len, (bounds.start_bound(), bounds.end_bound()));
        let requested_end = match bounds.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };
        if requested_end > len {
            log::trace!("range end {requested_end} clamped to {len}");
        }
        if range.is_empty() && len > 0 {
            log::debug!("range collapsed to empty {range:?} (len {len})");
        }
        Stylizer::<NarrowDown>::narrowed(committed, range, config)
    }

    /// Commits the pending attributes and targets the whole text next.
    pub fn range_all(self) -> Stylizer<NarrowDown> {
        self.range(..)
    }

    /// Commits the pending attributes and targets the first occurrence of `needle`.
    ///
    /// Matching is literal and case-sensitive. When `needle` is empty or does not occur, the
    /// new range is the empty range at the end of the text, so the following style calls have
    /// no effect.
    pub fn search(self, needle: &str) -> Stylizer<NarrowDown> {
        let (committed, config) = self.bake();
        let range = match committed.text().find(needle) {
            Some(found) => TextRange::new_unchecked(found.start, found.end),
            None => {
                log::debug!("{needle:?} not found; targeting the end of the text");
                let len = committed.len();
                TextRange::new_unchecked(len, len)
            }
        };
        Stylizer::<NarrowDown>::narrowed(committed, range, config)
    }

    /// Commits the pending attributes and returns the finished text.
    pub fn finalize(self) -> RichText {
        self.bake().0
    }

    /// Alias of [`Stylizer::finalize`].
    pub fn attr(self) -> RichText {
        self.finalize()
    }
}

impl Stylizer<NarrowDown> {
    fn narrowed(committed: RichText, range: TextRange, config: Arc<StylizerConfig>) -> Self {
        Self {
            committed,
            pending: Attributes::new(),
            range,
            config,
            _state: PhantomData,
        }
    }
}

impl<S: State> Stylizer<S> {
    /// The length of the text in UTF-16 code units.
    pub fn count(&self) -> usize {
        self.committed.len()
    }

    /// The text being styled.
    pub fn as_str(&self) -> &str {
        self.committed.as_str()
    }

    /// The code unit range the pending attributes will be committed over.
    pub fn pending_range(&self) -> Range<usize> {
        self.range.as_range()
    }

    /// The attributes collected for the pending range.
    pub fn pending(&self) -> &Attributes {
        &self.pending
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &StylizerConfig {
        &self.config
    }

    /// Sets an arbitrary attribute.
    pub fn attribute(self, attribute: Attribute) -> Stylizer<Styling> {
        self.update(|pending, _| pending.set(attribute))
    }

    /// Sets the foreground color.
    pub fn color(self, color: Color) -> Stylizer<Styling> {
        self.attribute(Attribute::ForegroundColor(color))
    }

    /// Sets the background color.
    pub fn background(self, color: Color) -> Stylizer<Styling> {
        self.attribute(Attribute::BackgroundColor(color))
    }

    /// Sets the whole font.
    ///
    /// A named family that cannot be resolved is replaced by the configured fallback family.
    pub fn font(self, font: Font) -> Stylizer<Styling> {
        self.update(|pending, config| {
            let family = config.resolve_family(font.family);
            pending.set(Attribute::Font(Font::new(family, font.size)));
        })
    }

    /// Sets the font family, keeping a previously set size.
    ///
    /// Without a previous size the configured default size is used. A family that cannot be
    /// resolved is replaced by the configured fallback family.
    pub fn font_name(self, family: impl Into<FontFamily>) -> Stylizer<Styling> {
        let family = family.into();
        self.update(|pending, config| {
            let size = pending
                .font()
                .map_or(config.default_font_size, |font| font.size);
            let family = config.resolve_family(family);
            pending.set(Attribute::Font(Font::new(family, size)));
        })
    }

    /// Sets the font size, keeping a previously set family.
    ///
    /// Without a previous family the system font is used.
    pub fn size(self, size: f32) -> Stylizer<Styling> {
        self.update(|pending, _| {
            let font = match pending.font() {
                Some(font) => font.clone().with_size(size),
                None => Font::system(size),
            };
            pending.set(Attribute::Font(font));
        })
    }

    /// Sets the extra spacing between characters, in points.
    pub fn kern(self, kern: f32) -> Stylizer<Styling> {
        self.attribute(Attribute::Kern(kern))
    }

    /// Underlines with the bitwise OR of `styles`, or a single line when `styles` is empty.
    ///
    /// Any underline color set earlier in this pending set is removed, so the line takes the
    /// foreground color.
    pub fn underline(self, styles: impl IntoIterator<Item = LineStyle>) -> Stylizer<Styling> {
        let style = LineStyle::combine(styles);
        self.update(|pending, _| {
            pending.set(Attribute::UnderlineStyle(style));
            pending.remove(AttributeKey::UnderlineColor);
        })
    }

    /// Underlines with `styles` in `color`.
    pub fn underline_colored(
        self,
        styles: impl IntoIterator<Item = LineStyle>,
        color: Color,
    ) -> Stylizer<Styling> {
        let style = LineStyle::combine(styles);
        self.update(|pending, _| {
            pending.set(Attribute::UnderlineStyle(style));
            pending.set(Attribute::UnderlineColor(color));
        })
    }

    /// Strikes through with the bitwise OR of `styles`, or a single line when `styles` is empty.
    ///
    /// Any strikethrough color set earlier in this pending set is removed.
    pub fn strikethrough(self, styles: impl IntoIterator<Item = LineStyle>) -> Stylizer<Styling> {
        let style = LineStyle::combine(styles);
        self.update(|pending, _| {
            pending.set(Attribute::StrikethroughStyle(style));
            pending.remove(AttributeKey::StrikethroughColor);
        })
    }

    /// Strikes through with `styles` in `color`.
    pub fn strikethrough_colored(
        self,
        styles: impl IntoIterator<Item = LineStyle>,
        color: Color,
    ) -> Stylizer<Styling> {
        let style = LineStyle::combine(styles);
        self.update(|pending, _| {
            pending.set(Attribute::StrikethroughStyle(style));
            pending.set(Attribute::StrikethroughColor(color));
        })
    }

    /// Outlines the glyphs in `color`, `width` percent of the font size wide.
    pub fn stroke(self, color: Color, width: f32) -> Stylizer<Styling> {
        self.update(|pending, _| {
            pending.set(Attribute::StrokeWidth(width));
            pending.set(Attribute::StrokeColor(color));
        })
    }

    /// Sets the shadow.
    pub fn shadow(self, shadow: Shadow) -> Stylizer<Styling> {
        self.attribute(Attribute::Shadow(shadow))
    }

    /// Sets a shadow built from the default shadow, overriding the parts that are `Some`.
    pub fn shadow_with(
        self,
        offset: Option<Vec2>,
        color: Option<Color>,
        blur_radius: Option<f64>,
    ) -> Stylizer<Styling> {
        let mut shadow = Shadow::new();
        if let Some(offset) = offset {
            shadow.offset = offset;
        }
        shadow.color = color;
        if let Some(blur_radius) = blur_radius {
            shadow.blur_radius = blur_radius;
        }
        self.shadow(shadow)
    }

    /// Sets the ligature level: `0` none, `1` default, `2` all.
    pub fn ligature(self, level: u8) -> Stylizer<Styling> {
        self.attribute(Attribute::Ligature(level))
    }

    /// Makes the range a link to `target`.
    pub fn link(self, target: impl Into<Arc<str>>) -> Stylizer<Styling> {
        self.attribute(Attribute::Link(target.into()))
    }

    /// Shifts the glyphs vertically from the baseline, in points.
    pub fn baseline_offset(self, offset: f32) -> Stylizer<Styling> {
        self.attribute(Attribute::BaselineOffset(offset))
    }

    /// Replaces the paragraph style.
    pub fn paragraph(self, style: ParagraphStyle) -> Stylizer<Styling> {
        self.attribute(Attribute::ParagraphStyle(style))
    }

    /// Sets the paragraph alignment, keeping the other paragraph settings.
    pub fn paragraph_alignment(self, alignment: TextAlignment) -> Stylizer<Styling> {
        self.update_paragraph(|style| style.alignment(alignment))
    }

    /// Sets the paragraph indents that are `Some`, keeping the other paragraph settings.
    pub fn paragraph_indent(
        self,
        first_line_head: Option<f32>,
        tail: Option<f32>,
        other_head: Option<f32>,
    ) -> Stylizer<Styling> {
        self.update_paragraph(|style| style.indent(first_line_head, tail, other_head))
    }

    /// Sets the line break mode, keeping the other paragraph settings.
    pub fn paragraph_line_break(self, mode: LineBreakMode) -> Stylizer<Styling> {
        self.update_paragraph(|style| style.line_break_mode(mode))
    }

    /// Sets the line height bounds and multiple that are `Some`, keeping the other paragraph
    /// settings.
    pub fn paragraph_line_height(
        self,
        maximum: Option<f32>,
        minimum: Option<f32>,
        multiple: Option<f32>,
    ) -> Stylizer<Styling> {
        self.update_paragraph(|style| style.line_height(maximum, minimum, multiple))
    }

    /// Sets the spacing after lines and before the paragraph, keeping the other paragraph
    /// settings.
    pub fn paragraph_line_spacing(
        self,
        after: Option<f32>,
        before: Option<f32>,
    ) -> Stylizer<Styling> {
        self.update_paragraph(|style| style.line_spacing(after, before))
    }

    /// Sets the base writing direction, keeping the other paragraph settings.
    pub fn paragraph_base_writing_direction(
        self,
        direction: WritingDirection,
    ) -> Stylizer<Styling> {
        self.update_paragraph(|style| style.base_writing_direction(direction))
    }

    fn update_paragraph(
        self,
        f: impl FnOnce(ParagraphStyle) -> ParagraphStyle,
    ) -> Stylizer<Styling> {
        self.update(|pending, _| {
            let current = pending.paragraph_style().copied().unwrap_or_default();
            pending.set(Attribute::ParagraphStyle(f(current)));
        })
    }

    fn update(self, f: impl FnOnce(&mut Attributes, &StylizerConfig)) -> Stylizer<Styling> {
        let Self {
            committed,
            mut pending,
            range,
            config,
            _state,
        } = self;
        f(&mut pending, &config);
        Stylizer {
            committed,
            pending,
            range,
            config,
            _state: PhantomData,
        }
    }

    /// Commits the pending set, returning the text and the shared configuration.
    fn bake(self) -> (RichText, Arc<StylizerConfig>) {
        let mut committed = self.committed;
        committed.commit(self.range, self.pending);
        (committed, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontName;
    use crate::color::rgb;
    use peniko::color::palette::css;

    #[test]
    fn style_calls_overwrite_within_one_pending_set() {
        let builder = Stylizer::new("abc").color(css::RED).color(css::BLUE).kern(1.0);
        assert_eq!(builder.pending().len(), 2);
        assert_eq!(builder.pending().foreground_color(), Some(css::BLUE));
        assert_eq!(builder.pending_range(), 0..3);
    }

    #[test]
    fn font_halves_are_kept() {
        let builder = Stylizer::new("abc").size(20.0).font_name("Georgia");
        let font = builder.pending().font().cloned().unwrap();
        assert_eq!(font, Font::new("Georgia", 20.0));

        let builder = Stylizer::new("abc").font_name(FontName::Courier).size(9.0);
        let font = builder.pending().font().cloned().unwrap();
        assert_eq!(font, Font::new("Courier", 9.0));

        let builder = Stylizer::new("abc").size(11.0);
        assert_eq!(builder.pending().font(), Some(&Font::system(11.0)));
    }

    #[test]
    fn family_without_size_uses_the_configured_default() {
        let config = StylizerConfig::new().with_default_font_size(10.0);
        let builder = Stylizer::with_config("abc", config).font_name("Menlo-Regular");
        assert_eq!(
            builder.pending().font(),
            Some(&Font::new("Menlo-Regular", 10.0))
        );
    }

    #[test]
    fn unresolvable_family_falls_back_keeping_size() {
        let config = StylizerConfig::new().with_catalog(crate::FontCatalog::well_known());
        let builder = Stylizer::with_config("abc", config)
            .size(17.0)
            .font_name("NotARealFont");
        assert_eq!(builder.pending().font(), Some(&Font::system(17.0)));

        let builder = Stylizer::new("abc").font(Font::new(" ", 8.0));
        assert_eq!(builder.pending().font(), Some(&Font::system(8.0)));
    }

    #[test]
    fn decorations_default_to_single_and_drop_stale_colors() {
        let builder = Stylizer::new("abc")
            .underline_colored([LineStyle::DOUBLE], rgb(0xff0000))
            .underline([]);
        assert_eq!(builder.pending().underline_style(), Some(LineStyle::SINGLE));
        assert_eq!(builder.pending().underline_color(), None);

        let builder = Stylizer::new("abc").strikethrough([LineStyle::THICK, LineStyle::BY_WORD]);
        assert_eq!(
            builder.pending().strikethrough_style(),
            Some(LineStyle::THICK | LineStyle::BY_WORD)
        );
        assert!(!builder.pending().contains(AttributeKey::StrikethroughColor));
    }

    #[test]
    fn stroke_sets_width_and_color() {
        let builder = Stylizer::new("abc").stroke(css::GREEN, 2.0);
        assert_eq!(builder.pending().stroke_width(), Some(2.0));
        assert_eq!(builder.pending().stroke_color(), Some(css::GREEN));
    }

    #[test]
    fn shadow_with_starts_from_the_default() {
        let builder = Stylizer::new("abc").shadow_with(None, Some(css::RED), Some(2.0));
        let shadow = builder.pending().shadow().copied().unwrap();
        assert_eq!(shadow.offset, Vec2::new(0.0, -3.0));
        assert_eq!(shadow.color, Some(css::RED));
        assert_eq!(shadow.blur_radius, 2.0);
    }

    #[test]
    fn paragraph_settings_accumulate() {
        let builder = Stylizer::new("abc")
            .paragraph_alignment(TextAlignment::Center)
            .paragraph_indent(Some(12.0), None, None)
            .paragraph_line_break(LineBreakMode::TruncatingTail)
            .paragraph_line_height(None, Some(20.0), None)
            .paragraph_line_spacing(Some(4.0), None)
            .paragraph_base_writing_direction(WritingDirection::RightToLeft);
        let style = builder.pending().paragraph_style().copied().unwrap();
        assert_eq!(style.alignment, TextAlignment::Center);
        assert_eq!(style.first_line_head_indent, 12.0);
        assert_eq!(style.line_break_mode, LineBreakMode::TruncatingTail);
        assert_eq!(style.minimum_line_height, 20.0);
        assert_eq!(style.line_spacing, 4.0);
        assert_eq!(style.base_writing_direction, WritingDirection::RightToLeft);

        let replaced = builder.paragraph(ParagraphStyle::new());
        assert_eq!(
            replaced.pending().paragraph_style(),
            Some(&ParagraphStyle::default())
        );
    }

    #[test]
    fn paragraph_branches_do_not_alias() {
        let base = Stylizer::new("abc").paragraph_alignment(TextAlignment::Right);
        let left = base.clone().paragraph_indent(Some(5.0), None, None);
        let right = base.clone().paragraph_alignment(TextAlignment::Left);

        let base_style = base.pending().paragraph_style().copied().unwrap();
        assert_eq!(base_style.alignment, TextAlignment::Right);
        assert_eq!(base_style.first_line_head_indent, 0.0);

        let left_style = left.pending().paragraph_style().copied().unwrap();
        assert_eq!(left_style.alignment, TextAlignment::Right);
        assert_eq!(left_style.first_line_head_indent, 5.0);

        let right_style = right.pending().paragraph_style().copied().unwrap();
        assert_eq!(right_style.alignment, TextAlignment::Left);
        assert_eq!(right_style.first_line_head_indent, 0.0);
    }

    #[test]
    fn narrowing_resets_the_pending_set() {
        let narrowed = Stylizer::new("abcdef").color(css::RED).range(2..4);
        assert!(narrowed.pending().is_empty());
        assert_eq!(narrowed.pending_range(), 2..4);
        assert_eq!(narrowed.count(), 6);
    }

    #[test]
    fn range_bounds_are_clamped() {
        let text = "abcdef";
        assert_eq!(Stylizer::new(text).range(2..).pending_range(), 2..6);
        assert_eq!(Stylizer::new(text).range(2..usize::MAX).pending_range(), 2..6);
        assert_eq!(Stylizer::new(text).range(..=3).pending_range(), 0..4);
        assert_eq!(Stylizer::new(text).range(9..12).pending_range(), 6..6);
        assert_eq!(Stylizer::new(text).range(4..2).pending_range(), 2..2);
        assert_eq!(Stylizer::new(text).range_all().pending_range(), 0..6);
    }

    #[test]
    fn search_miss_targets_the_end() {
        let narrowed = Stylizer::new("abcdef").search("xyz");
        assert_eq!(narrowed.pending_range(), 6..6);
        let narrowed = Stylizer::new("abcdef").search("");
        assert_eq!(narrowed.pending_range(), 6..6);

        let text = Stylizer::new("abcdef").search("xyz").color(css::RED).finalize();
        assert_eq!(text.assignments_len(), 0);
    }

    #[test]
    fn config_is_carried_through_the_chain() {
        let config = Arc::new(StylizerConfig::new().with_default_font_size(30.0));
        let builder = Stylizer::with_config("abc", Arc::clone(&config))
            .color(css::RED)
            .range(1..)
            .font_name("Georgia");
        assert_eq!(builder.config().default_font_size, 30.0);
        assert_eq!(builder.pending().font(), Some(&Font::new("Georgia", 30.0)));
    }
}
