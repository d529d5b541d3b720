//! Packed-integer wire formats.
//!
//! # Formats
//!
//! | Format | Bits | Layout (MSB to LSB) |
//! |---|---|---|
//! | [`PackedFormat::Rgb24`] | 24 | R(8) G(8) B(8) |
//! | [`PackedFormat::Rgba32`] | 32 | R(8) G(8) B(8) A(8) |
//! | [`PackedFormat::Rgb565`] | 16 | R(5) G(6) B(5) |
//! | [`PackedFormat::Rgb555`] | 15 | R(5) G(5) B(5) |
//!
//! # Native Widths
//!
//! The 16-bit decoders keep each field at its native width: a full-scale
//! RGB565 red decodes to `31`, not `255`. Use [`expand_rgb565`] or
//! [`expand_rgb555`] to rescale to 8 bits. The encoders are exact inverses
//! of the decoders and mask each component to its field width.
//!
//! ```
//! use tint_codec::packed::{from_rgb565, to_rgb565, expand_rgb565};
//!
//! let c = from_rgb565(0xFFFF);
//! assert_eq!(c.to_array(), [31, 63, 31]);
//! assert_eq!(to_rgb565(&c), 0xFFFF);
//! assert_eq!(expand_rgb565(0xFFFF).to_array(), [255, 255, 255]);
//! ```

use std::fmt;
use std::str::FromStr;
use tint_core::bits::{get_bits, get_byte, get_bytes};
use tint_core::{Error, Result, Rgb, Rgba, Yuv};
use tracing::trace;

/// Decodes `0xRRGGBB`. Values wider than 24 bits are rejected.
pub fn from_rgb24(value: u32) -> Result<Rgb> {
    trace!(value, "decode rgb24");
    Rgb::from_int(value as i64)
}

/// Decodes `0xRRGGBBAA`.
pub fn from_rgba32(value: u32) -> Rgba {
    trace!(value, "decode rgba32");
    let v = value as i64;
    Rgba::new(get_byte(v, 3), get_byte(v, 2), get_byte(v, 1), get_byte(v, 0))
}

/// Decodes RGB565 into native 5/6/5-bit magnitudes.
pub fn from_rgb565(value: u16) -> Rgb {
    trace!(value, "decode rgb565");
    let v = value as i64;
    Rgb::new(
        get_bits(v, 11, Some(5)),
        get_bits(v, 5, Some(6)),
        get_bits(v, 0, Some(5)),
    )
}

/// Decodes RGB555 into native 5-bit magnitudes. Bit 15 is ignored.
pub fn from_rgb555(value: u16) -> Rgb {
    trace!(value, "decode rgb555");
    let v = value as i64;
    Rgb::new(get_bytes(v, 2, 5), get_bytes(v, 1, 5), get_bytes(v, 0, 5))
}

/// Builds an RGB color from YUV components.
///
/// Declared for completeness; always returns [`Error::Unsupported`].
pub fn from_yuv(y: f64, u: f64, v: f64) -> Result<Rgb> {
    Yuv::new(y, u, v).to_rgb()
}

/// Encodes as `0xRRGGBB`, keeping the low 8 bits of each channel.
pub fn to_rgb24(rgb: &Rgb) -> u32 {
    let [r, g, b] = rgb.to_array();
    (((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)) as u32
}

/// Encodes as `0xRRGGBBAA`, keeping the low 8 bits of each channel.
pub fn to_rgba32(rgba: &Rgba) -> u32 {
    let [r, g, b, a] = rgba.to_array();
    (((r & 0xFF) << 24) | ((g & 0xFF) << 16) | ((b & 0xFF) << 8) | (a & 0xFF)) as u32
}

/// Encodes native 5/6/5-bit magnitudes as RGB565.
pub fn to_rgb565(rgb: &Rgb) -> u16 {
    let [r, g, b] = rgb.to_array();
    (((r & 0x1F) << 11) | ((g & 0x3F) << 5) | (b & 0x1F)) as u16
}

/// Encodes native 5-bit magnitudes as RGB555.
pub fn to_rgb555(rgb: &Rgb) -> u16 {
    let [r, g, b] = rgb.to_array();
    (((r & 0x1F) << 10) | ((g & 0x1F) << 5) | (b & 0x1F)) as u16
}

#[inline]
fn expand5(v: i64) -> i64 {
    (v << 3) | (v >> 2)
}

#[inline]
fn expand6(v: i64) -> i64 {
    (v << 2) | (v >> 4)
}

/// Decodes RGB565 and rescales each field to 8 bits by bit replication.
pub fn expand_rgb565(value: u16) -> Rgb {
    let [r, g, b] = from_rgb565(value).to_array();
    Rgb::new(expand5(r), expand6(g), expand5(b))
}

/// Decodes RGB555 and rescales each field to 8 bits by bit replication.
pub fn expand_rgb555(value: u16) -> Rgb {
    let [r, g, b] = from_rgb555(value).to_array();
    Rgb::new(expand5(r), expand5(g), expand5(b))
}

/// Runtime selection of a packed format.
///
/// # Example
///
/// ```
/// use tint_codec::PackedFormat;
///
/// let fmt: PackedFormat = "rgb555".parse().unwrap();
/// assert_eq!(fmt.bits(), 15);
/// assert_eq!(fmt.max_value(), 0x7FFF);
/// assert!(fmt.validate(0x8000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackedFormat {
    /// 8 bits per channel, no alpha.
    #[default]
    Rgb24,
    /// 8 bits per channel with alpha.
    Rgba32,
    /// 5/6/5 bits, no alpha.
    Rgb565,
    /// 5/5/5 bits, no alpha.
    Rgb555,
}

impl PackedFormat {
    /// All formats, in declaration order.
    pub const ALL: [Self; 4] = [Self::Rgb24, Self::Rgba32, Self::Rgb565, Self::Rgb555];

    /// Total number of significant bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Rgb24 => 24,
            Self::Rgba32 => 32,
            Self::Rgb565 => 16,
            Self::Rgb555 => 15,
        }
    }

    /// Largest valid packed value.
    #[inline]
    pub const fn max_value(&self) -> i64 {
        (1i64 << self.bits()) - 1
    }

    /// Whether the format carries an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba32)
    }

    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb24 => "rgb24",
            Self::Rgba32 => "rgba32",
            Self::Rgb565 => "rgb565",
            Self::Rgb555 => "rgb555",
        }
    }

    /// Checks that `value` fits the format's bit width.
    pub fn validate(&self, value: i64) -> Result<()> {
        if (0..=self.max_value()).contains(&value) {
            Ok(())
        } else {
            Err(Error::out_of_range(self.name(), value, self.max_value()))
        }
    }

    /// Validates and decodes `value`.
    ///
    /// Formats without alpha decode as opaque.
    pub fn decode(&self, value: i64) -> Result<Rgba> {
        self.validate(value)?;
        // validated above, so the narrowing casts are lossless
        Ok(match self {
            Self::Rgb24 => Rgba::from(from_rgb24(value as u32)?),
            Self::Rgba32 => from_rgba32(value as u32),
            Self::Rgb565 => Rgba::from(from_rgb565(value as u16)),
            Self::Rgb555 => Rgba::from(from_rgb555(value as u16)),
        })
    }

    /// Encodes `color`. Formats without alpha ignore it.
    pub fn encode(&self, color: &Rgba) -> i64 {
        let rgb = color.rgb();
        let packed = match self {
            Self::Rgb24 => to_rgb24(&rgb) as i64,
            Self::Rgba32 => to_rgba32(color) as i64,
            Self::Rgb565 => to_rgb565(&rgb) as i64,
            Self::Rgb555 => to_rgb555(&rgb) as i64,
        };
        trace!(format = self.name(), packed, "encode");
        packed
    }
}

impl fmt::Display for PackedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackedFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb24" | "rgb" | "rgb888" => Ok(Self::Rgb24),
            "rgba32" | "rgba" | "rgba8888" => Ok(Self::Rgba32),
            "rgb565" => Ok(Self::Rgb565),
            "rgb555" => Ok(Self::Rgb555),
            _ => Err(Error::unknown_format(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb24_decode() {
        let c = from_rgb24(0x123456).unwrap();
        assert_eq!(c.to_array(), [0x12, 0x34, 0x56]);
        assert!(from_rgb24(0x1000000).unwrap_err().is_range_error());
    }

    #[test]
    fn test_rgba32_decode() {
        let c = from_rgba32(0xDEADBEEF);
        assert_eq!(c.to_array(), [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(to_rgba32(&c), 0xDEADBEEF);
    }

    #[test]
    fn test_rgb565_native_widths() {
        assert_eq!(from_rgb565(0xFFFF).to_array(), [31, 63, 31]);
        assert_eq!(from_rgb565(0xF800).to_array(), [31, 0, 0]);
        assert_eq!(from_rgb565(0x07E0).to_array(), [0, 63, 0]);
        assert_eq!(from_rgb565(0x001F).to_array(), [0, 0, 31]);
    }

    #[test]
    fn test_rgb555_native_widths() {
        assert_eq!(from_rgb555(0x7FFF).to_array(), [31, 31, 31]);
        assert_eq!(from_rgb555(0x7C00).to_array(), [31, 0, 0]);
        // top bit is not part of the format
        assert_eq!(from_rgb555(0x8000).to_array(), [0, 0, 0]);
    }

    #[test]
    fn test_encoders_invert_decoders() {
        for v in [0x0000u16, 0x1234, 0xABCD, 0xFFFF] {
            assert_eq!(to_rgb565(&from_rgb565(v)), v);
            assert_eq!(to_rgb555(&from_rgb555(v)), v & 0x7FFF);
        }
        assert_eq!(to_rgb24(&from_rgb24(0xC0FFEE).unwrap()), 0xC0FFEE);
    }

    #[test]
    fn test_encoders_mask_wide_channels() {
        let c = Rgb::new(255, 255, 255);
        assert_eq!(to_rgb565(&c), 0xFFFF);
        assert_eq!(to_rgb555(&c), 0x7FFF);
        assert_eq!(to_rgb24(&Rgb::new(-1, 0, 0)), 0xFF0000);
    }

    #[test]
    fn test_expand() {
        assert_eq!(expand_rgb565(0xFFFF).to_array(), [255, 255, 255]);
        assert_eq!(expand_rgb565(0x0000).to_array(), [0, 0, 0]);
        // 0b10000 -> 0b10000100
        assert_eq!(expand_rgb555(0x4000).to_array(), [0x84, 0, 0]);
    }

    #[test]
    fn test_from_yuv_unsupported() {
        assert_eq!(from_yuv(0.5, 0.0, 0.0).unwrap_err(), Error::Unsupported("YUV to RGB"));
    }

    #[test]
    fn test_format_bits() {
        assert_eq!(PackedFormat::Rgb24.max_value(), 0xFFFFFF);
        assert_eq!(PackedFormat::Rgba32.max_value(), 0xFFFFFFFF);
        assert_eq!(PackedFormat::Rgb565.max_value(), 0xFFFF);
        assert_eq!(PackedFormat::Rgb555.max_value(), 0x7FFF);
        assert!(PackedFormat::Rgba32.has_alpha());
        assert!(!PackedFormat::Rgb565.has_alpha());
    }

    #[test]
    fn test_format_decode() {
        let c = PackedFormat::Rgb565.decode(0xFFFF).unwrap();
        assert_eq!(c.to_array(), [31, 63, 31, 255]);

        let err = PackedFormat::Rgb565.decode(0x10000).unwrap_err();
        assert_eq!(err, Error::out_of_range("rgb565", 0x10000, 0xFFFF));
        assert!(PackedFormat::Rgb24.decode(-5).is_err());
    }

    #[test]
    fn test_format_encode() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(PackedFormat::Rgb24.encode(&c), 0x123456);
        assert_eq!(PackedFormat::Rgba32.encode(&c), 0x12345678);
        for fmt in PackedFormat::ALL {
            let v = fmt.max_value();
            assert_eq!(fmt.encode(&fmt.decode(v).unwrap()), v);
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("RGB565".parse::<PackedFormat>().unwrap(), PackedFormat::Rgb565);
        assert_eq!("rgba".parse::<PackedFormat>().unwrap(), PackedFormat::Rgba32);
        assert_eq!(PackedFormat::Rgb555.to_string(), "rgb555");
        assert!(matches!("bgr".parse::<PackedFormat>(), Err(Error::UnknownFormat(_))));
    }
}
