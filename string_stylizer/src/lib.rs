// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fluent builder for rich text, built on [`attributed_text`].
//!
//! - [`Stylize`] starts a [`Stylizer`] from a `str`, a `String`, an absent (`None`) text or an
//!   existing [`RichText`].
//! - [`Stylizer`] collects [`Attributes`] for a pending range. Narrowing with
//!   [`range`](Stylizer::range) or [`search`](Stylizer::search) commits them and picks the next
//!   range; [`finalize`](Stylizer::finalize) commits the last set.
//! - [`RichText`] is the finished value. It can be read back per position or as coalesced runs,
//!   and concatenated with other rich text or an inline [`ImageAttachment`].
//!
//! ## Indices
//!
//! All ranges are half-open and counted in **UTF-16 code units**, so they stay valid when texts
//! are concatenated: the right-hand assignments are shifted by the left-hand length. Ranges passed
//! to the builder never fail; they are clamped to the text.
//!
//! ## Overlaps
//!
//! Each narrowing commits one assignment. When assignments overlap, every key resolves to the
//! value of the latest assignment that sets it; keys a later assignment does not set keep their
//! earlier values.
//!
//! ## Example
//!
//! ```
//! use string_stylizer::{ImageAttachment, LineStyle, Stylize};
//! use string_stylizer::color::rgb;
//!
//! let title = "StringStylizer"
//!     .stylize()
//!     .color(rgb(0x333333))
//!     .size(18.0)
//!     .search("Stylizer")
//!     .underline([LineStyle::SINGLE])
//!     .color(rgb(0xcc0000))
//!     .finalize();
//!
//! let icon = ImageAttachment::with_dimensions(1, 18.0, 18.0);
//! let line = icon.then(&title);
//!
//! assert_eq!(line.len(), 15);
//! let tail = line.attributes_at(7);
//! assert_eq!(tail.foreground_color(), Some(rgb(0xcc0000)));
//! assert_eq!(tail.font().map(|font| font.size), Some(18.0));
//! assert_eq!(tail.underline_style(), Some(LineStyle::SINGLE));
//! assert_eq!(line.attributes_at(1).underline_style(), None);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library in dependencies.
//! - `libm`: Use `libm` for floating point math in `peniko` on `no_std` targets.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod color;

mod attachment;
mod attributes;
mod builder;
mod config;
mod decoration;
mod font;
mod paragraph;
mod rich_text;
mod stylize;


pub use attributed_text;
pub use peniko;

pub use attachment::{ImageAttachment, OBJECT_REPLACEMENT};
pub use attributes::{Attribute, AttributeKey, Attributes};
pub use builder::{NarrowDown, State, Styling, Stylizer};
pub use color::{rgb, rgba};
pub use config::{SYSTEM_FONT_SIZE, StylizerConfig};
pub use decoration::{LineStyle, Shadow};
pub use font::{Font, FontCatalog, FontFamily, FontName};
pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment, WritingDirection};
pub use rich_text::{AttributeRun, RichText};
pub use stylize::Stylize;
