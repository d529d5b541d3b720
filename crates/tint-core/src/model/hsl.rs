use super::{exact, impl_component_access, positional, Input};
use crate::error::{Error, Result};
use crate::scalar::{Component, Hue, Lightness, Saturation};
use std::fmt;

/// Hue, saturation, lightness.
///
/// Components are stored raw and normalized on access. HSL has no packed
/// integer form, so it only compares against other HSL values, component by
/// component after normalization.
///
/// ```
/// use tint_core::prelude::*;
///
/// let a = Hsl::new(120, 1.0, 0.5);
/// assert_eq!(a.h().value(), 120);
/// // 255 as a magnitude clamps to a saturation of 1.0
/// assert_eq!(a, Hsl::new(120, 255, 0.5));
/// ```
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    components: [Component; 3],
}

impl Hsl {
    const KIND: &'static str = "HSL";

    /// Creates a color from hue, saturation and lightness.
    #[inline]
    pub fn new(h: impl Into<Component>, s: impl Into<Component>, l: impl Into<Component>) -> Self {
        Self {
            components: [h.into(), s.into(), l.into()],
        }
    }

    /// Creates a color from exactly three components.
    pub fn from_slice(items: &[Component]) -> Result<Self> {
        exact::<3>(Self::KIND, items).map(|components| Self { components })
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

    /// Lightness.
    #[inline]
    pub fn l(&self) -> Lightness {
        Lightness::new(self.components[2])
    }
}

impl_component_access!(Hsl, 3);

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        self.h() == other.h() && self.s() == other.s() && self.l() == other.l()
    }
}

impl TryFrom<Input> for Hsl {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self> {
        match input {
            Input::Hsl(hsl) => Ok(hsl),
            Input::Sequence(items) => Self::from_slice(&items),
            Input::Positional(slots) => positional::<3>(Self::KIND, &slots).map(|components| Self { components }),
            other => Err(Error::invalid_shape(Self::KIND, other.shape())),
        }
    }
}

impl fmt::Debug for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hsl")
            .field("h", &self.h().value())
            .field("s", &self.s().value())
            .field("l", &self.l().value())
            .finish()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSL({}, {}, {})", self.h(), self.s(), self.l())
    }
}
