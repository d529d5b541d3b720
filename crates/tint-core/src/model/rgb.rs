use super::{exact, impl_component_access, impl_packed_ops, lone_magnitude, positional};
use super::{Input, PackedColor, Rgba};
use crate::bits::get_byte;
use crate::error::{Error, Result};
use crate::scalar::{Blue, Component, Green, Red};
use std::fmt;

/// Three-channel 8-bit color.
///
/// Components are stored as supplied and normalized on access, so
/// `Rgb::new(1.0, 0, 0)` and `Rgb::new(255, 0, 0)` compare equal.
///
/// # Packed Layout
///
/// `R(8) G(8) B(8)`, red in the most significant byte.
///
/// # Example
///
/// ```
/// use tint_core::prelude::*;
///
/// let c = Rgb::new(0x12, 0x34, 0x56);
/// assert_eq!(c.to_int(), 0x123456);
/// assert_eq!(Rgb::from_int(0x123456).unwrap(), c);
///
/// // Opaque RGBA, then back
/// let rgba = Rgba::from(c);
/// assert_eq!(rgba.to_int(), 0x123456FF);
/// assert_eq!(Rgb::from(rgba), c);
/// ```
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    components: [Component; 3],
}

impl Rgb {
    /// Creates a color from three components.
    #[inline]
    pub fn new(r: impl Into<Component>, g: impl Into<Component>, b: impl Into<Component>) -> Self {
        Self {
            components: [r.into(), g.into(), b.into()],
        }
    }

    /// Creates a color from exactly three components.
    pub fn from_slice(items: &[Component]) -> Result<Self> {
        exact::<3>(<Self as PackedColor>::KIND, items).map(|components| Self { components })
    }

    /// Decodes `0xRRGGBB`. Values outside `0..=0xFFFFFF` are rejected.
    pub fn from_int(value: i64) -> Result<Self> {
        <Self as PackedColor>::from_int(value)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
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

    /// Packed `0xRRGGBB`.
    #[inline]
    pub fn to_int(&self) -> i64 {
        (self.r().value() << 16) | (self.g().value() << 8) | self.b().value()
    }

    /// Normalized channel values.
    #[inline]
    pub fn to_array(&self) -> [i64; 3] {
        [self.r().value(), self.g().value(), self.b().value()]
    }
}

impl_component_access!(Rgb, 3);
impl_packed_ops!(Rgb);

impl PackedColor for Rgb {
    const KIND: &'static str = "RGB";
    const ARITY: usize = 3;
    const MAX_PACKED: i64 = 0xFF_FF_FF;

    #[inline]
    fn to_int(&self) -> i64 {
        Rgb::to_int(self)
    }

    fn from_int(value: i64) -> Result<Self> {
        if !(0..=Self::MAX_PACKED).contains(&value) {
            return Err(Error::out_of_range(Self::KIND, value, Self::MAX_PACKED));
        }
        Ok(Self::new(get_byte(value, 2), get_byte(value, 1), get_byte(value, 0)))
    }
}

impl From<Rgba> for Rgb {
    /// Drops alpha.
    #[inline]
    fn from(rgba: Rgba) -> Self {
        let [r, g, b, _] = *rgba.components();
        Self {
            components: [r, g, b],
        }
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Input> for Rgb {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self> {
        match input {
            Input::Rgba(rgba) => Ok(rgba.into()),
            Input::Rgb(rgb) => Ok(rgb),
            Input::Sequence(items) => Self::from_slice(&items),
            Input::Packed(value) => Self::from_int(value),
            Input::Positional(slots) => match lone_magnitude(&slots) {
                Some(value) => Self::from_int(value),
                None => positional::<3>(Self::KIND, &slots).map(|components| Self { components }),
            },
            other => Err(Error::invalid_shape(Self::KIND, other.shape())),
        }
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rgb")
            .field("r", &self.r().value())
            .field("g", &self.g().value())
            .field("b", &self.b().value())
            .finish()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r(), self.g(), self.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operand;
    use crate::scalar::Component::{Fraction, Magnitude};

    #[test]
    fn test_rgb_packing() {
        let c = Rgb::new(0xAB, 0xCD, 0xEF);
        assert_eq!(c.to_int(), 0xABCDEF);
        assert_eq!(c.to_array(), [0xAB, 0xCD, 0xEF]);
        assert_eq!(format!("{c:06X}"), "ABCDEF");
    }

    #[test]
    fn test_rgb_from_int_roundtrip() {
        for v in (0..=0xFF_FF_FF).step_by(0x1_01_07).chain([0, 0xFF_FF_FF]) {
            assert_eq!(Rgb::from_int(v).unwrap().to_int(), v);
        }
    }

    #[test]
    fn test_rgb_from_int_range() {
        assert!(Rgb::from_int(-1).unwrap_err().is_range_error());
        assert!(Rgb::from_int(0x1_00_00_00).unwrap_err().is_range_error());
    }

    #[test]
    fn test_rgb_fraction_components() {
        assert_eq!(Rgb::new(1.0, 0.5, 0), Rgb::new(255, 127, 0));
        assert_eq!(Rgb::new(2.0, 300, 0).to_int(), 0xFFFF00);
    }

    #[test]
    fn test_rgb_arity() {
        let two = [Magnitude(1), Magnitude(2)];
        let four = [Magnitude(1), Magnitude(2), Magnitude(3), Magnitude(4)];
        assert_eq!(Rgb::from_slice(&two).unwrap_err(), Error::arity_mismatch("RGB", 3, 2));
        assert_eq!(Rgb::from_slice(&four).unwrap_err(), Error::arity_mismatch("RGB", 3, 4));
    }

    #[test]
    fn test_rgb_try_from_input() {
        let packed = Rgb::try_from(Input::Positional(vec![Some(Magnitude(0x010203)), None, None])).unwrap();
        assert_eq!(packed.to_array(), [1, 2, 3]);

        let err = Rgb::try_from(Input::Positional(vec![Some(Magnitude(1)), Some(Magnitude(2)), None])).unwrap_err();
        assert_eq!(err, Error::missing_value("RGB", 2));

        let err = Rgb::try_from(Input::Positional(vec![Some(Fraction(0.5)), None, None])).unwrap_err();
        assert_eq!(err, Error::missing_value("RGB", 1));

        let err = Rgb::try_from(Input::Packed(0x1_00_00_00)).unwrap_err();
        assert!(err.is_range_error());

        let hsl = crate::model::Hsl::new(0, 0.5, 0.5);
        let err = Rgb::try_from(Input::Hsl(hsl)).unwrap_err();
        assert_eq!(err, Error::invalid_shape("RGB", "an HSL color"));
    }

    #[test]
    fn test_rgb_from_rgba_drops_alpha() {
        let rgba = Rgba::new(1, 2, 3, 4);
        let rgb = Rgb::from(rgba);
        assert_eq!(rgb.to_int(), rgba.to_int() >> 8);
    }

    #[test]
    fn test_rgb_bitwise() {
        let c = Rgb::from_int(0xFFF00F).unwrap();
        assert_eq!(c << 1, 0x1FFE01E);
        assert_eq!(c >> 1, 0x7FF807);
        assert_eq!(c & 0xFFF000, 0xFFF000);
        assert_eq!(c | 1, 0xFFF00F);
        assert_eq!(c ^ 1, 0xFFF00E);
        assert_eq!(!c, !0xFFF00Fi64);
        assert_eq!(c & Rgb::from_int(0x0F).unwrap(), 0x0F);
    }

    #[test]
    fn test_rgb_comparisons() {
        let a = Rgb::new(0, 255, 0);
        assert_eq!(a, Rgb::new(0, 255, 0));
        assert_eq!(a, 0x00FF00);
        assert_eq!(0x00FF00i64, a);
        assert!(a == 65280.9);
        assert!(a > 0xFF);
        assert!(a < Rgb::new(1, 0, 0));
        assert!(a <= 0x00FF00);
    }

    #[test]
    fn test_rgb_lenient_methods() {
        let a = Rgb::new(0, 255, 0);
        let seq = [Magnitude(0), Magnitude(255), Magnitude(0)];
        assert!(!a.equals(Operand::Sequence(&seq)));
        assert!(!a.greater_than(Operand::Other));
        assert!(!a.less_equal(Operand::Float(f64::NAN)));
        assert!(a.greater_equal(Operand::Color(&Rgb::new(0, 254, 255))));
        assert!(a.bit_or(Operand::Sequence(&seq)).is_err());
        assert_eq!(a.shift_left(Operand::Int(4)).unwrap(), 0x0FF000);
        assert_eq!(a.shift_right(Operand::Float(8.7)).unwrap(), 0xFF);
        assert!(a.shift_left(Operand::Int(-1)).unwrap_err().is_range_error());
    }

    #[test]
    fn test_rgb_indexing() {
        let c = Rgb::new(0.5, 2, 300);
        // Raw stored values, not normalized
        assert_eq!(c[0], Fraction(0.5));
        assert_eq!(c[2], Magnitude(300));
        assert!(c.contains(&Magnitude(2)));
        assert_eq!(c.len(), 3);
        assert_eq!(c.slice(1..).len(), 2);
        assert_eq!(c.iter().count(), 3);
    }

    #[test]
    fn test_rgb_display() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.to_string(), "RGB(1, 2, 3)");
        assert_eq!(format!("{c:?}"), "Rgb { r: 1, g: 2, b: 3 }");
    }
}
