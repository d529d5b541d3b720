use super::{exact, impl_component_access, impl_packed_ops, lone_magnitude, positional};
use super::{Input, PackedColor, Rgb};
use crate::bits::get_byte;
use crate::error::{Error, Result};
use crate::scalar::{Alpha, AlphaDomain, Blue, Component, Green, LevelDomain, Red};
use std::fmt;

/// Four-channel 8-bit color with straight (not premultiplied) alpha.
///
/// # Packed Layout
///
/// `R(8) G(8) B(8) A(8)`, red in the most significant byte.
///
/// # Example
///
/// ```
/// use tint_core::prelude::*;
///
/// let c = Rgba::from_int(0x11223380).unwrap();
/// assert_eq!(c.a().value(), 0x80);
/// assert_eq!(c.rgb().to_int(), 0x112233);
///
/// // RGB promotes with an opaque alpha
/// let opaque = Rgba::from(Rgb::new(1, 2, 3));
/// assert_eq!(opaque.a().value(), 0xFF);
/// ```
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    components: [Component; 4],
}

impl Rgba {
    /// Creates a color from four components.
    #[inline]
    pub fn new(
        r: impl Into<Component>,
        g: impl Into<Component>,
        b: impl Into<Component>,
        a: impl Into<Component>,
    ) -> Self {
        Self {
            components: [r.into(), g.into(), b.into(), a.into()],
        }
    }

    /// Creates a color from exactly four components.
    pub fn from_slice(items: &[Component]) -> Result<Self> {
        exact::<4>(<Self as PackedColor>::KIND, items).map(|components| Self { components })
    }

    /// Decodes `0xRRGGBBAA`. Values outside `0..=0xFFFFFFFF` are rejected.
    pub fn from_int(value: i64) -> Result<Self> {
        <Self as PackedColor>::from_int(value)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Combines an RGB color with an explicit alpha.
    #[inline]
    pub fn with_alpha(rgb: Rgb, a: impl Into<Component>) -> Self {
        let [r, g, b] = *rgb.components();
        Self {
            components: [r, g, b, a.into()],
        }
    }

    /// RGB part, discarding alpha.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::from(*self)
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> Red {
        Red::new(self.components[0])
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> Green {
        Green::new(self.components[1])
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> Blue {
        Blue::new(self.components[2])
    }

    /// Alpha channel.
    #[inline]
    pub fn a(&self) -> Alpha {
        Alpha::new(self.components[3])
    }

    /// Packed `0xRRGGBBAA`.
    #[inline]
    pub fn to_int(&self) -> i64 {
        (self.r().value() << 24)
            | (self.g().value() << 16)
            | (self.b().value() << 8)
            | self.a().value()
    }

    /// Normalized channel values.
    #[inline]
    pub fn to_array(&self) -> [i64; 4] {
        [
            self.r().value(),
            self.g().value(),
            self.b().value(),
            self.a().value(),
        ]
    }

    /// Whether alpha is at full scale.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a().value() >= AlphaDomain::MAX
    }

    /// Whether alpha is zero.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a().value() == 0
    }
}

impl_component_access!(Rgba, 4);
impl_packed_ops!(Rgba);

impl PackedColor for Rgba {
    const KIND: &'static str = "RGBA";
    const ARITY: usize = 4;
    const MAX_PACKED: i64 = 0xFF_FF_FF_FF;

    #[inline]
    fn to_int(&self) -> i64 {
        Rgba::to_int(self)
    }

    fn from_int(value: i64) -> Result<Self> {
        if !(0..=Self::MAX_PACKED).contains(&value) {
            return Err(Error::out_of_range(Self::KIND, value, Self::MAX_PACKED));
        }
        let rgb = Rgb::from_int(value >> 8)?;
        Ok(Self::with_alpha(rgb, get_byte(value, 0)))
    }
}

impl From<Rgb> for Rgba {
    /// Promotes with an opaque alpha of `0xFF`.
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::with_alpha(rgb, AlphaDomain::MAX)
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Input> for Rgba {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self> {
        match input {
            Input::Rgb(rgb) => Ok(rgb.into()),
            Input::Rgba(rgba) => Ok(rgba),
            Input::Sequence(items) => Self::from_slice(&items),
            Input::Packed(value) => Self::from_int(value),
            Input::Positional(slots) => match lone_magnitude(&slots) {
                Some(value) => Self::from_int(value),
                None => positional::<4>(Self::KIND, &slots).map(|components| Self { components }),
            },
            other => Err(Error::invalid_shape(Self::KIND, other.shape())),
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rgba")
            .field("r", &self.r().value())
            .field("g", &self.g().value())
            .field("b", &self.b().value())
            .field("a", &self.a().value())
            .finish()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r(), self.g(), self.b(), self.a())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Component::{Fraction, Magnitude};

    #[test]
    fn test_rgba_packing() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_int(), 0x12345678);
        assert_eq!(Rgba::from_int(0x12345678).unwrap().to_array(), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_rgba_from_int_range() {
        assert_eq!(Rgba::from_int(0xFFFFFFFF).unwrap().to_int(), 0xFFFFFFFF);
        assert!(Rgba::from_int(0x1_00_00_00_00).unwrap_err().is_range_error());
        assert!(Rgba::from_int(-1).unwrap_err().is_range_error());
    }

    #[test]
    fn test_rgba_from_rgb_is_opaque() {
        for v in [0, 0x123456, 0xFFFFFF, 0x00FF00] {
            let rgb = Rgb::from_int(v).unwrap();
            let rgba = Rgba::from(rgb);
            assert_eq!(rgba.a().value(), 0xFF);
            assert_eq!(rgba.to_int(), (rgb.to_int() << 8) | 0xFF);
            assert!(rgba.is_opaque());
        }
    }

    #[test]
    fn test_rgba_arity() {
        let three = [Magnitude(1), Magnitude(2), Magnitude(3)];
        assert_eq!(Rgba::from_slice(&three).unwrap_err(), Error::arity_mismatch("RGBA", 4, 3));
        // A three-item sequence is only accepted through an actual RGB value
        let rgb = Rgb::from_slice(&three).unwrap();
        assert_eq!(Rgba::try_from(Input::Rgb(rgb)).unwrap().to_int(), 0x010203FF);
    }

    #[test]
    fn test_rgba_try_from_positional() {
        let c = Rgba::try_from(Input::Positional(vec![Some(Magnitude(0x0A0B0C0D))])).unwrap();
        assert_eq!(c.to_array(), [0x0A, 0x0B, 0x0C, 0x0D]);

        let c = Rgba::try_from(Input::Positional(vec![
            Some(Fraction(1.0)),
            Some(Magnitude(0)),
            Some(Magnitude(0)),
            Some(Fraction(0.5)),
        ]))
        .unwrap();
        assert_eq!(c.to_int(), 0xFF00007F);

        let err = Rgba::try_from(Input::Positional(vec![Some(Magnitude(1)), Some(Magnitude(2)), Some(Magnitude(3))]))
            .unwrap_err();
        assert_eq!(err, Error::missing_value("RGBA", 3));
    }

    #[test]
    fn test_rgba_with_alpha() {
        let c = Rgba::with_alpha(Rgb::new(9, 8, 7), 0);
        assert!(c.is_transparent());
        assert_eq!(c.rgb(), Rgb::new(9, 8, 7));
    }

    #[test]
    fn test_rgba_ordering() {
        let a = Rgba::from_int(0x000000FF).unwrap();
        let b = Rgba::from_int(0x00000100).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(a | b, 0x1FF);
    }

    #[test]
    fn test_rgba_display() {
        assert_eq!(Rgba::new(1, 2, 3, 4).to_string(), "RGBA(1, 2, 3, 4)");
    }
}
