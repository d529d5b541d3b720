use super::{exact, impl_component_access, positional, Input, Rgb};
use crate::error::{Error, Result};
use crate::scalar::{ChromaU, ChromaV, Component, Luma};
use std::fmt;

/// Luma plus two chroma components.
///
/// Only storage is defined: each component is clamped to `1.0` when the
/// color is built. Conversion to RGB needs a YUV standard (BT.470, BT.709,
/// ...) which is not modelled, so [`Yuv::to_rgb`] reports
/// [`Error::Unsupported`].
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Yuv {
    components: [Component; 3],
}

impl Yuv {
    const KIND: &'static str = "YUV";

    /// Creates a color from luma and chroma.
    pub fn new(y: impl Into<Component>, u: impl Into<Component>, v: impl Into<Component>) -> Self {
        Self::canonical([y.into(), u.into(), v.into()])
    }

    fn canonical([y, u, v]: [Component; 3]) -> Self {
        Self {
            components: [
                Component::from(Luma::new(y)),
                Component::from(ChromaU::new(u)),
                Component::from(ChromaV::new(v)),
            ],
        }
    }

    /// Creates a color from exactly three components.
    pub fn from_slice(items: &[Component]) -> Result<Self> {
        exact::<3>(Self::KIND, items).map(Self::canonical)
    }

    /// Luma.
    #[inline]
    pub fn y(&self) -> Luma {
        Luma::new(self.components[0])
    }

    /// Blue-difference chroma.
    #[inline]
    pub fn u(&self) -> ChromaU {
        ChromaU::new(self.components[1])
    }

    /// Red-difference chroma.
    #[inline]
    pub fn v(&self) -> ChromaV {
        ChromaV::new(self.components[2])
    }

    /// Not implemented; always returns [`Error::Unsupported`].
    pub fn to_rgb(&self) -> Result<Rgb> {
        Err(Error::Unsupported("YUV to RGB"))
    }
}

impl_component_access!(Yuv, 3);

impl PartialEq for Yuv {
    fn eq(&self, other: &Self) -> bool {
        self.y() == other.y() && self.u() == other.u() && self.v() == other.v()
    }
}

impl TryFrom<Input> for Yuv {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self> {
        match input {
            Input::Yuv(yuv) => Ok(yuv),
            Input::Sequence(items) => Self::from_slice(&items),
            Input::Positional(slots) => positional::<3>(Self::KIND, &slots).map(Self::canonical),
            other => Err(Error::invalid_shape(Self::KIND, other.shape())),
        }
    }
}

impl fmt::Debug for Yuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Yuv")
            .field("y", &self.y().value())
            .field("u", &self.u().value())
            .field("v", &self.v().value())
            .finish()
    }
}

impl fmt::Display for Yuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YUV({}, {}, {})", self.y(), self.u(), self.v())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Component::{Fraction, Magnitude};
    use approx::assert_relative_eq;

    #[test]
    fn test_yuv_clamps_on_build() {
        let c = Yuv::new(0, 1, 0);
        assert_eq!(c, Yuv::new(0.0, 1.0, 0.0));
        let c = Yuv::new(3, 0.5, -0.25);
        assert_relative_eq!(c.y().value(), 1.0);
        assert_relative_eq!(c.u().value(), 0.5);
        assert_relative_eq!(c.v().value(), -0.25);
        assert_eq!(c[0], Fraction(1.0));
    }

    #[test]
    fn test_yuv_to_rgb_unsupported() {
        let err = Yuv::new(0.5, 0.0, 0.0).to_rgb().unwrap_err();
        assert_eq!(err, Error::Unsupported("YUV to RGB"));
    }

    #[test]
    fn test_yuv_shapes() {
        let c = Yuv::try_from(Input::Positional(vec![Some(Magnitude(0)), Some(Magnitude(1)), Some(Magnitude(0))]))
            .unwrap();
        assert_eq!(c, Yuv::new(0, 1, 0));
        assert!(Yuv::try_from(Input::Packed(0)).unwrap_err().is_shape_error());
        assert!(Yuv::from_slice(&[Fraction(0.1), Fraction(0.2)]).is_err());
    }
}
