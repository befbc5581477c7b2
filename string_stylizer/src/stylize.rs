// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::ops::RangeBounds;

use crate::{NarrowDown, RichText, Stylizer, StylizerConfig};

/// Entry points that start a [`Stylizer`] from text.
///
/// Absent text (`None`) is styled as empty text.
///
/// ```
/// use string_stylizer::Stylize;
/// use peniko::color::palette::css;
///
/// let greeting = "Hello".stylize().color(css::RED).finalize();
/// assert_eq!(greeting.len(), 5);
///
/// let missing: Option<&str> = None;
/// assert!(missing.stylize().color(css::RED).finalize().is_empty());
/// ```
pub trait Stylize {
    /// Starts a builder over the whole text using `config`.
    fn stylize_with(&self, config: impl Into<Arc<StylizerConfig>>) -> Stylizer;

    /// Starts a builder over the whole text using the default configuration.
    fn stylize(&self) -> Stylizer {
        self.stylize_with(StylizerConfig::default())
    }

    /// Starts a builder whose pending range is `bounds`, clamped to the text.
    fn stylize_range(&self, bounds: impl RangeBounds<usize>) -> Stylizer<NarrowDown> {
        self.stylize().range(bounds)
    }
}

impl Stylize for str {
    fn stylize_with(&self, config: impl Into<Arc<StylizerConfig>>) -> Stylizer {
        Stylizer::with_config(self, config)
    }
}

impl Stylize for String {
    fn stylize_with(&self, config: impl Into<Arc<StylizerConfig>>) -> Stylizer {
        self.as_str().stylize_with(config)
    }
}

impl Stylize for Option<&str> {
    fn stylize_with(&self, config: impl Into<Arc<StylizerConfig>>) -> Stylizer {
        self.unwrap_or_default().stylize_with(config)
    }
}

impl Stylize for Option<String> {
    fn stylize_with(&self, config: impl Into<Arc<StylizerConfig>>) -> Stylizer {
        self.as_deref().unwrap_or_default().stylize_with(config)
    }
}

impl Stylize for RichText {
    /// Continues styling this text, keeping its assignments.
    fn stylize_with(&self, config: impl Into<Arc<StylizerConfig>>) -> Stylizer {
        Stylizer::from_rich_text(self.clone(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use peniko::color::palette::css;

    #[test]
    fn absent_text_is_empty_text() {
        let none: Option<String> = None;
        let builder = none.stylize();
        assert_eq!(builder.count(), 0);
        assert_eq!(builder.pending_range(), 0..0);

        let some = Some("abc".to_string());
        assert_eq!(some.stylize().count(), 3);
        assert_eq!(Some("abcd").stylize().count(), 4);
    }

    #[test]
    fn stylize_range_narrows_immediately() {
        let builder = "StringStylizer".stylize_range(6..usize::MAX);
        assert_eq!(builder.pending_range(), 6..14);
        assert!(builder.pending().is_empty());

        let owned = "abc".to_string().stylize_range(5..);
        assert_eq!(owned.pending_range(), 3..3);
    }

    #[test]
    fn rich_text_can_be_restyled() {
        let first = "abcdef".stylize_range(..3).color(css::RED).finalize();
        let second = first.stylize_range(3..).color(css::BLUE).finalize();

        assert_eq!(second.assignments_len(), 2);
        assert_eq!(second.attributes_at(0).foreground_color(), Some(css::RED));
        assert_eq!(second.attributes_at(5).foreground_color(), Some(css::BLUE));
    }
}
