// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font descriptions carried by the font attribute.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use hashbrown::HashSet;

/// The family half of a [`Font`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's default user interface font.
    #[default]
    System,
    /// A font looked up by name, e.g. `"HelveticaNeue-Bold"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the family name, or `None` for [`FontFamily::System`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::System => None,
            Self::Named(name) => Some(&**name),
        }
    }
}

impl From<&str> for FontFamily {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

impl From<String> for FontFamily {
    fn from(value: String) -> Self {
        Self::named(value)
    }
}

impl From<FontName> for FontFamily {
    fn from(value: FontName) -> Self {
        Self::named(value.as_str())
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system-ui"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// A font: a family at a point size.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// The font family.
    pub family: FontFamily,
    /// The point size.
    pub size: f32,
}

impl Font {
    /// Creates a font from a family and a point size.
    pub fn new(family: impl Into<FontFamily>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The system font at `size`.
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
        }
    }

    /// Returns this font with a different size, keeping the family.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Returns this font with a different family, keeping the size.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.family = family.into();
        self
    }
}

macro_rules! font_names {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        /// Well-known named fonts, spelled with their PostScript names.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum FontName {
            $($(#[$meta])* $variant,)*
        }

        impl FontName {
            /// Every known font name.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the PostScript name of this font.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

font_names! {
    /// `AmericanTypewriter`
    AmericanTypewriter => "AmericanTypewriter",
    /// `Arial-BoldMT`
    ArialBold => "Arial-BoldMT",
    /// `ArialMT`
    Arial => "ArialMT",
    /// `Avenir-Book`
    AvenirBook => "Avenir-Book",
    /// `Avenir-Heavy`
    AvenirHeavy => "Avenir-Heavy",
    /// `Baskerville`
    Baskerville => "Baskerville",
    /// `ChalkboardSE-Regular`
    ChalkboardSe => "ChalkboardSE-Regular",
    /// `Copperplate`
    Copperplate => "Copperplate",
    /// `Copperplate-Light`
    CopperplateLight => "Copperplate-Light",
    /// `Courier`
    Courier => "Courier",
    /// `Courier-Bold`
    CourierBold => "Courier-Bold",
    /// `Didot`
    Didot => "Didot",
    /// `Futura-Medium`
    FuturaMedium => "Futura-Medium",
    /// `Georgia`
    Georgia => "Georgia",
    /// `Georgia-Bold`
    GeorgiaBold => "Georgia-Bold",
    /// `GillSans`
    GillSans => "GillSans",
    /// `Helvetica`
    Helvetica => "Helvetica",
    /// `Helvetica-Bold`
    HelveticaBold => "Helvetica-Bold",
    /// `HelveticaNeue`
    HelveticaNeue => "HelveticaNeue",
    /// `HelveticaNeue-Bold`
    HelveticaNeueBold => "HelveticaNeue-Bold",
    /// `HelveticaNeue-Italic`
    HelveticaNeueItalic => "HelveticaNeue-Italic",
    /// `HelveticaNeue-Light`
    HelveticaNeueLight => "HelveticaNeue-Light",
    /// `MarkerFelt-Thin`
    MarkerFeltThin => "MarkerFelt-Thin",
    /// `Menlo-Regular`
    Menlo => "Menlo-Regular",
    /// `Noteworthy-Light`
    NoteworthyLight => "Noteworthy-Light",
    /// `Optima-Regular`
    Optima => "Optima-Regular",
    /// `Palatino-Roman`
    Palatino => "Palatino-Roman",
    /// `TimesNewRomanPSMT`
    TimesNewRoman => "TimesNewRomanPSMT",
    /// `Verdana`
    Verdana => "Verdana",
    /// `Zapfino`
    Zapfino => "Zapfino",
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of font family names known to be installed.
///
/// When a [`StylizerConfig`](crate::StylizerConfig) carries a catalog, only names in the catalog
/// resolve; anything else falls back to the configured fallback family.
#[derive(Clone, Debug, Default)]
pub struct FontCatalog {
    names: HashSet<Arc<str>>,
}

impl FontCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog containing every [`FontName`].
    pub fn well_known() -> Self {
        FontName::ALL.iter().map(|name| name.as_str()).collect()
    }

    /// Adds a family name.
    pub fn insert(&mut self, name: impl Into<Arc<str>>) {
        self.names.insert(name.into());
    }

    /// Returns `true` if `name` is in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The number of catalogued names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the catalog holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<Arc<str>>> FromIterator<S> for FontCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns `true` if `name` could name a font at all.
///
/// Empty or whitespace-only names and names containing control characters can never resolve.
pub(crate) fn is_plausible_family_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn font_name_spells_postscript_names() {
        assert_eq!(FontName::HelveticaNeueBold.as_str(), "HelveticaNeue-Bold");
        assert_eq!(FontName::CopperplateLight.to_string(), "Copperplate-Light");
        assert_eq!(
            FontFamily::from(FontName::Helvetica),
            FontFamily::named("Helvetica")
        );
    }

    #[test]
    fn font_setters_preserve_the_other_half() {
        let font = Font::new("Georgia", 12.0).with_size(17.0);
        assert_eq!(font.family.name(), Some("Georgia"));
        assert_eq!(font.size, 17.0);

        let font = Font::system(9.0).with_family(FontName::Courier);
        assert_eq!(font.family.name(), Some("Courier"));
        assert_eq!(font.size, 9.0);
    }

    #[test]
    fn catalog_lookup() {
        let catalog = FontCatalog::well_known();
        assert_eq!(catalog.len(), FontName::ALL.len());
        assert!(catalog.contains("Helvetica"));
        assert!(!catalog.contains("Comic Sans MS"));

        let mut custom: FontCatalog = ["Inter"].into_iter().collect();
        custom.insert("Roboto");
        assert!(custom.contains("Inter"));
        assert!(custom.contains("Roboto"));
        assert!(!custom.is_empty());
    }

    #[test]
    fn implausible_names_are_rejected() {
        assert!(is_plausible_family_name("Helvetica"));
        assert!(is_plausible_family_name("Times New Roman"));
        assert!(!is_plausible_family_name(""));
        assert!(!is_plausible_family_name("   "));
        assert!(!is_plausible_family_name("Bad\u{0}Name"));
    }
}
