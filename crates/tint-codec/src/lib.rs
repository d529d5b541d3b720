//! # tint-codec
//!
//! Conversions between tint color containers and packed wire formats.
//!
//! - [`packed`] - RGB24, RGBA32, RGB565 and RGB555 encoders and decoders
//! - [`names`] - color name lookup through a pluggable [`NameTable`]
//!
//! ```
//! use tint_codec::{PackedFormat, packed};
//!
//! let c = packed::from_rgb24(0x336699).unwrap();
//! assert_eq!(PackedFormat::Rgba32.encode(&c.into()), 0x336699FF);
//! ```
//!
//! ## Feature Flags
//!
//! - `names` (default) - Built-in CSS color name table

#![warn(missing_docs)]

pub mod names;
pub mod packed;

pub use names::{from_name_in, NameTable};
#[cfg(feature = "names")]
pub use names::{from_name, lookup, CssNames};
pub use packed::{
    expand_rgb555, expand_rgb565, from_rgb24, from_rgb555, from_rgb565, from_rgba32, from_yuv,
    to_rgb24, to_rgb555, to_rgb565, to_rgba32, PackedFormat,
};
