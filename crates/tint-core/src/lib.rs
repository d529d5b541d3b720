//! # tint-core
//!
//! Color value types and their canonical packed-integer form.
//!
//! This crate provides the foundational types used throughout tint:
//!
//! - [`bits`] - byte and bit-field extraction from packed integers
//! - [`scalar`] - dual-domain components ([`Red`], [`Hue`], [`Saturation`], ...)
//! - [`model`] - fixed-arity containers ([`Rgb`], [`Rgba`], [`Hsl`], [`Hsv`], [`Yuv`])
//! - [`Error`] - construction failures
//!
//! ## Design Philosophy
//!
//! Every construction path ends in one canonical representation. A component
//! given as a fraction and the same component given as a magnitude are the
//! same value, and every comparison or bitwise operator on a byte-packed
//! container goes through its packed integer:
//!
//! ```
//! use tint_core::prelude::*;
//!
//! assert_eq!(Red::new(1.0), Red::new(255));
//! assert_eq!(Rgb::new(1.0, 0, 0), 0xFF0000);
//! assert_eq!(Rgb::new(0xFF, 0xF0, 0x0F) ^ 1, 0xFFF00E);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-codec (packed formats, color names)
//!    +-- tint-cli   (command-line front end)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for components and containers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bits;
pub mod error;
pub mod model;
pub mod scalar;

pub use error::{Error, Result};
pub use model::{Components, Hsl, Hsv, Input, Operand, PackedColor, Rgb, Rgba, Yuv};
pub use scalar::{
    Alpha, Blue, ChromaU, ChromaV, Component, Green, Hue, Level, Lightness, Luma, Percent, Red,
    Saturation, Value,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::model::{Components, Hsl, Hsv, Input, Operand, PackedColor, Rgb, Rgba, Yuv};
    pub use crate::scalar::{
        Alpha, Blue, ChromaU, ChromaV, Component, Green, Hue, Lightness, Luma, Red, Saturation,
        Value,
    };
}
