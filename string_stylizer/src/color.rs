// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers for building colors from packed RGB integers.

pub use peniko::Color;

/// Builds an opaque color from a packed `0xRRGGBB` integer.
///
/// Bits above the low 24 are ignored.
///
/// ```
/// use string_stylizer::color::rgb;
///
/// assert_eq!(rgb(0xff0000).components, [1.0, 0.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn rgb(rgb: u32) -> Color {
    rgba(rgb, 1.0)
}

/// Builds a color from a packed `0xRRGGBB` integer and a separate alpha in `0.0..=1.0`.
///
/// Alpha values outside that range are clamped.
#[inline]
pub fn rgba(rgb: u32, alpha: f32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::new([
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        alpha.clamp(0.0, 1.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::{rgb, rgba};
    use peniko::color::palette::css;

    #[test]
    fn unpacks_channels() {
        let c = rgb(0x2200ee);
        assert_eq!(c.components, [34.0 / 255.0, 0.0, 238.0 / 255.0, 1.0]);
    }

    #[test]
    fn white_matches_palette() {
        assert_eq!(rgb(0xffffff), css::WHITE);
        assert_eq!(rgb(0x000000), css::BLACK);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(rgba(0x000000, 0.5).components[3], 0.5);
        assert_eq!(rgba(0x000000, 3.0).components[3], 1.0);
        assert_eq!(rgba(0x000000, -1.0).components[3], 0.0);
    }

    #[test]
    fn high_bits_are_ignored() {
        assert_eq!(rgb(0xFF00_FF00), rgb(0x00ff00));
    }
}
