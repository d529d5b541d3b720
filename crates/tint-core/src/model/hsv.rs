use super::{exact, impl_component_access, positional, Input};
use crate::error::{Error, Result};
use crate::scalar::{Component, Hue, Saturation, Value};
use std::fmt;

/// Hue, saturation, value.
///
/// Unlike [`Hsl`](super::Hsl), components are normalized once when the color
/// is built and stored in canonical form: hue as a magnitude, saturation and
/// value as fractions.
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    components: [Component; 3],
}

impl Hsv {
    const KIND: &'static str = "HSV";

    /// Creates a color from hue, saturation and value.
    pub fn new(h: impl Into<Component>, s: impl Into<Component>, v: impl Into<Component>) -> Self {
        Self::canonical([h.into(), s.into(), v.into()])
    }

    fn canonical([h, s, v]: [Component; 3]) -> Self {
        Self {
            components: [
                Component::from(Hue::new(h)),
                Component::from(Saturation::new(s)),
                Component::from(Value::new(v)),
            ],
        }
    }

    /// Creates a color from exactly three components.
    pub fn from_slice(items: &[Component]) -> Result<Self> {
        exact::<3>(Self::KIND, items).map(Self::canonical)
    }

    /// Hue in degrees.
    #[inline]
    pub fn h(&self) -> Hue {
        Hue::new(self.components[0])
    }

    /// Saturation.
    #[inline]
    pub fn s(&self) -> Saturation {
        Saturation::new(self.components[1])
    }

    /// Value (brightness).
    #[inline]
    pub fn v(&self) -> Value {
        Value::new(self.components[2])
    }
}

impl_component_access!(Hsv, 3);

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        self.h() == other.h() && self.s() == other.s() && self.v() == other.v()
    }
}

impl TryFrom<Input> for Hsv {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self> {
        match input {
            Input::Hsv(hsv) => Ok(hsv),
            Input::Sequence(items) => Self::from_slice(&items),
            Input::Positional(slots) => positional::<3>(Self::KIND, &slots).map(Self::canonical),
            other => Err(Error::invalid_shape(Self::KIND, other.shape())),
        }
    }
}

impl fmt::Debug for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hsv")
            .field("h", &self.h().value())
            .field("s", &self.s().value())
            .field("v", &self.v().value())
            .finish()
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({}, {}, {})", self.h(), self.s(), self.v())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Component::{Fraction, Magnitude};

    #[test]
    fn test_hsv_stores_canonical() {
        let c = Hsv::new(400, 0.1, 7);
        assert_eq!(c[0], Magnitude(360));
        assert_eq!(c[1], Fraction(0.1));
        assert_eq!(c[2], Fraction(1.0));
    }

    #[test]
    fn test_hsv_equality() {
        assert_eq!(Hsv::new(0, 0.1, 0), Hsv::new(0, 0.1, 0));
        assert_eq!(Hsv::new(360, 1, 1), Hsv::new(1.0, 1.0, 1.0));
        assert_ne!(Hsv::new(360, 1, 1), Hsv::new(0, 0.1, 0));
    }

    #[test]
    fn test_hsv_shapes() {
        let err = Hsv::try_from(Input::Sequence(vec![Magnitude(1); 4])).unwrap_err();
        assert_eq!(err, Error::arity_mismatch("HSV", 3, 4));

        let err = Hsv::try_from(Input::Positional(vec![Some(Magnitude(1)), Some(Fraction(0.5))])).unwrap_err();
        assert_eq!(err, Error::missing_value("HSV", 2));

        let rgb = crate::model::Rgb::new(0, 0, 0);
        assert!(Hsv::try_from(Input::Rgb(rgb)).unwrap_err().is_shape_error());
    }
}
