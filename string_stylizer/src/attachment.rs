// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Size;

use crate::RichText;

/// The placeholder character an attachment occupies in the text.
///
/// It is a single UTF-16 code unit, so an attachment always has length one.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// An inline image reserved in the text by a single placeholder character.
///
/// The image itself is not stored: `id` is an opaque handle the renderer maps back to the image,
/// and `size` is the box reserved for it during layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAttachment {
    /// Caller-assigned identifier of the image.
    pub id: u64,
    /// Display size of the image, in points.
    pub size: Size,
}

impl ImageAttachment {
    /// Creates an attachment with an explicit display size.
    pub fn new(id: u64, size: impl Into<Size>) -> Self {
        Self {
            id,
            size: size.into(),
        }
    }

    /// Creates an attachment displayed at `width` by `height` points.
    pub fn with_dimensions(id: u64, width: f64, height: f64) -> Self {
        Self::new(id, Size::new(width, height))
    }

    /// Returns the one-character rich text holding this attachment.
    pub fn into_rich_text(self) -> RichText {
        RichText::attachment(self)
    }

    /// Returns this attachment followed by `rest`.
    pub fn then(self, rest: &RichText) -> RichText {
        self.into_rich_text().concat(rest)
    }
}

impl From<ImageAttachment> for RichText {
    fn from(value: ImageAttachment) -> Self {
        value.into_rich_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeKey;

    #[test]
    fn attachment_is_one_code_unit() {
        assert_eq!(OBJECT_REPLACEMENT.len_utf16(), 1);

        let image = ImageAttachment::with_dimensions(7, 20.0, 10.0);
        let text = image.into_rich_text();
        assert_eq!(text.len(), 1);
        assert_eq!(text.as_str(), "\u{FFFC}");

        let attrs = text.attributes_at(0);
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains(AttributeKey::Attachment));
        assert_eq!(attrs.attachment(), Some(&image));
    }

    #[test]
    fn size_conversions() {
        let image = ImageAttachment::new(1, (3.0, 4.0));
        assert_eq!(image.size, Size::new(3.0, 4.0));
        assert_eq!(RichText::from(image), image.into_rich_text());

        let leading = image.then(&RichText::plain("ab"));
        assert_eq!(leading.as_str(), "\u{FFFC}ab");
        assert_eq!(leading.attributes_at(0).attachment(), Some(&image));
        assert!(leading.attributes_at(1).is_empty());
    }
}
