// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::font::{FontCatalog, FontFamily, is_plausible_family_name};

/// Point size of the platform's default system font.
pub const SYSTEM_FONT_SIZE: f32 = 14.0;

/// Settings shared by every builder derived from one entry point.
///
/// ```
/// use string_stylizer::{FontCatalog, FontFamily, StylizerConfig};
///
/// let config = StylizerConfig::new()
///     .with_default_font_size(12.0)
///     .with_catalog(FontCatalog::well_known());
///
/// assert_eq!(
///     config.resolve_family(FontFamily::named("Menlo-Regular")),
///     FontFamily::named("Menlo-Regular")
/// );
/// assert_eq!(
///     config.resolve_family(FontFamily::named("NoSuchFont")),
///     FontFamily::System
/// );
/// ```
#[derive(Clone, Debug)]
pub struct StylizerConfig {
    /// Size given to a font whose family is set before any size is.
    pub default_font_size: f32,
    /// Family used in place of a named family that cannot be resolved.
    pub fallback_family: FontFamily,
    /// Installed families. When `None`, every well-formed name resolves.
    pub catalog: Option<FontCatalog>,
}

impl Default for StylizerConfig {
    fn default() -> Self {
        Self {
            default_font_size: SYSTEM_FONT_SIZE,
            fallback_family: FontFamily::System,
            catalog: None,
        }
    }
}

impl StylizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`StylizerConfig::default_font_size`].
    #[must_use]
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// Sets [`StylizerConfig::fallback_family`].
    #[must_use]
    pub fn with_fallback_family(mut self, family: impl Into<FontFamily>) -> Self {
        self.fallback_family = family.into();
        self
    }

    /// Sets [`StylizerConfig::catalog`].
    #[must_use]
    pub fn with_catalog(mut self, catalog: FontCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Returns `family` if it resolves, and the fallback family otherwise.
    pub fn resolve_family(&self, family: FontFamily) -> FontFamily {
        let FontFamily::Named(name) = &family else {
            return family;
        };
        if !is_plausible_family_name(name) {
            log::debug!("font family {name:?} is malformed; using {}", self.fallback_family);
            return self.fallback_family.clone();
        }
        if let Some(catalog) = &self.catalog {
            if !catalog.contains(name) {
                log::debug!(
                    "font family {name:?} is not installed; using {}",
                    self.fallback_family
                );
                return self.fallback_family.clone();
            }
        }
        family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_a_catalog_any_wellformed_name_resolves() {
        let config = StylizerConfig::default();
        assert_eq!(
            config.resolve_family(FontFamily::named("Anything Goes")),
            FontFamily::named("Anything Goes")
        );
        assert_eq!(
            config.resolve_family(FontFamily::named("")),
            FontFamily::System
        );
        assert_eq!(config.resolve_family(FontFamily::System), FontFamily::System);
    }

    #[test]
    fn custom_fallback_is_used() {
        let config = StylizerConfig::new()
            .with_catalog(["Inter"].into_iter().collect())
            .with_fallback_family("Helvetica");
        assert_eq!(
            config.resolve_family(FontFamily::named("Inter")),
            FontFamily::named("Inter")
        );
        assert_eq!(
            config.resolve_family(FontFamily::named("Roboto")),
            FontFamily::named("Helvetica")
        );
    }
}
