//! Fixed-arity color containers.
//!
//! # Types
//!
//! - [`Rgb`], [`Rgba`] - byte-packed containers with a canonical integer
//! - [`Hsl`], [`Hsv`], [`Yuv`] - three-component containers without packing
//! - [`Input`] - every construction shape, dispatched through `TryFrom`
//! - [`Operand`] - right-hand side for the lenient comparison methods
//! - [`Components`] - raw view returned by slicing a container
//!
//! # Canonical Integer
//!
//! Byte-packed containers implement [`PackedColor`]. Equality, ordering and
//! bitwise operators all go through [`PackedColor::to_int`]:
//!
//! ```
//! use tint_core::prelude::*;
//!
//! let c = Rgb::from_int(0xFFF00F).unwrap();
//! assert_eq!(c, 0xFFF00F);
//! assert_eq!(c << 1, 0x1FFE01E);
//! assert_eq!(c & 0xFFF000, 0xFFF000);
//! assert!(Rgb::new(0, 0, 1) < Rgb::new(0, 1, 0));
//! ```
//!
//! Comparing against something that has no integer form is not an error.
//! The lenient methods simply answer `false`:
//!
//! ```
//! use tint_core::prelude::*;
//!
//! let c = Rgb::new(0, 255, 0);
//! let seq = [Component::Magnitude(0), Component::Magnitude(255), Component::Magnitude(0)];
//! assert!(!c.equals(Operand::Sequence(&seq)));
//! assert!(!c.less_than(Operand::Sequence(&seq)));
//! ```

mod hsl;
mod hsv;
mod rgb;
mod rgba;
mod yuv;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
pub use rgba::Rgba;
pub use yuv::Yuv;

use crate::error::{Error, Result};
use crate::scalar::Component;
use std::ops::{Bound, Deref, RangeBounds};

/// Construction shapes accepted by every container.
///
/// Each container implements `TryFrom<Input>`. Shapes a kind does not
/// understand fail with [`Error::InvalidShape`].
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Positional arguments. `None` marks a position that was not supplied.
    ///
    /// A lone magnitude in the first slot of a byte-packed container is read
    /// as a packed integer.
    Positional(Vec<Option<Component>>),
    /// One sequence whose length must equal the container arity.
    Sequence(Vec<Component>),
    /// One packed integer.
    Packed(i64),
    /// An existing RGB color.
    Rgb(Rgb),
    /// An existing RGBA color.
    Rgba(Rgba),
    /// An existing HSL color.
    Hsl(Hsl),
    /// An existing HSV color.
    Hsv(Hsv),
    /// An existing YUV color.
    Yuv(Yuv),
}

impl Input {
    /// Short description used in [`Error::InvalidShape`].
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Positional(_) => "positional components",
            Self::Sequence(_) => "a sequence",
            Self::Packed(_) => "a packed integer",
            Self::Rgb(_) => "an RGB color",
            Self::Rgba(_) => "an RGBA color",
            Self::Hsl(_) => "an HSL color",
            Self::Hsv(_) => "an HSV color",
            Self::Yuv(_) => "a YUV color",
        }
    }
}

impl From<Vec<Component>> for Input {
    fn from(items: Vec<Component>) -> Self {
        Self::Sequence(items)
    }
}

impl From<&[Component]> for Input {
    fn from(items: &[Component]) -> Self {
        Self::Sequence(items.to_vec())
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Self::Packed(value)
    }
}

/// Unpacks a sequence of exactly `N` items.
pub(crate) fn exact<const N: usize>(kind: &'static str, items: &[Component]) -> Result<[Component; N]> {
    <[Component; N]>::try_from(items).map_err(|_| Error::arity_mismatch(kind, N, items.len()))
}

/// Resolves positional slots, failing on the first empty one.
pub(crate) fn positional<const N: usize>(
    kind: &'static str,
    slots: &[Option<Component>],
) -> Result<[Component; N]> {
    if slots.len() > N {
        return Err(Error::arity_mismatch(kind, N, slots.len()));
    }
    let mut out = [Component::Magnitude(0); N];
    for (i, item) in out.iter_mut().enumerate() {
        *item = slots
            .get(i)
            .copied()
            .flatten()
            .ok_or_else(|| Error::missing_value(kind, i))?;
    }
    Ok(out)
}

/// Returns the packed integer if only the first slot holds a magnitude.
pub(crate) fn lone_magnitude(slots: &[Option<Component>]) -> Option<i64> {
    match slots.split_first() {
        Some((Some(Component::Magnitude(v)), rest)) if rest.iter().all(Option::is_none) => Some(*v),
        _ => None,
    }
}

/// Raw component view produced by slicing a container.
///
/// Unlike the containers it has no fixed arity and no packed form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components(Vec<Component>);

impl Components {
    /// Copies `items[range]`, clamping the range to the slice.
    pub(crate) fn slice(items: &[Component], range: impl RangeBounds<usize>) -> Self {
        let len = items.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return Self::default();
        }
        Self(items[start..end].to_vec())
    }

    /// Consumes the view, returning the components.
    pub fn into_vec(self) -> Vec<Component> {
        self.0
    }
}

impl Deref for Components {
    type Target = [Component];

    fn deref(&self) -> &[Component] {
        &self.0
    }
}

impl From<Components> for Input {
    fn from(view: Components) -> Self {
        Self::Sequence(view.0)
    }
}

/// Right-hand side of a lenient comparison or bitwise method.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, C> {
    /// Plain integer.
    Int(i64),
    /// Float, truncated toward zero before use.
    Float(f64),
    /// Container of the same kind, coerced through `to_int`.
    Color(&'a C),
    /// A bare sequence. Never coercible.
    Sequence(&'a [Component]),
    /// Anything else. Never coercible.
    Other,
}

impl<C> From<i64> for Operand<'_, C> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl<C> From<f64> for Operand<'_, C> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<'a, C> From<&'a [Component]> for Operand<'a, C> {
    fn from(v: &'a [Component]) -> Self {
        Self::Sequence(v)
    }
}

/// Largest shift the bitwise methods accept.
pub const MAX_SHIFT: i64 = 63;

/// Shifts left, dropping bits pushed past bit 63.
#[inline]
pub(crate) fn shl_int(value: i64, amount: u32) -> i64 {
    value.checked_shl(amount).unwrap_or(0)
}

/// Arithmetic shift right; saturates to the sign for wide shifts.
#[inline]
pub(crate) fn shr_int(value: i64, amount: u32) -> i64 {
    match value.checked_shr(amount) {
        Some(v) => v,
        None if value < 0 => -1,
        None => 0,
    }
}

/// Containers with a canonical packed-integer projection.
///
/// The operator traits (`==`, `<`, `&`, `<<`, ...) on implementors are strict
/// and typed. The methods here take a dynamic [`Operand`] instead: relational
/// methods answer `false` for operands with no integer form, while bitwise
/// methods report [`Error::InvalidShape`].
pub trait PackedColor: Copy + Sized {
    /// Kind name used in errors.
    const KIND: &'static str;

    /// Number of components.
    const ARITY: usize;

    /// Largest valid packed value.
    const MAX_PACKED: i64;

    /// Packs the components most-significant first.
    fn to_int(&self) -> i64;

    /// Decodes a packed integer, most-significant byte first.
    fn from_int(value: i64) -> Result<Self>;

    /// Integer form of `other`, if it has one.
    fn coerce(&self, other: Operand<'_, Self>) -> Option<i64> {
        match other {
            Operand::Int(v) => Some(v),
            Operand::Float(f) if f.is_finite() => Some(f as i64),
            Operand::Color(c) => Some(c.to_int()),
            Operand::Float(_) | Operand::Sequence(_) | Operand::Other => None,
        }
    }

    /// `to_int() == other`, `false` when `other` has no integer form.
    fn equals(&self, other: Operand<'_, Self>) -> bool {
        self.coerce(other).is_some_and(|v| self.to_int() == v)
    }

    /// `to_int() < other`, `false` when `other` has no integer form.
    fn less_than(&self, other: Operand<'_, Self>) -> bool {
        self.coerce(other).is_some_and(|v| self.to_int() < v)
    }

    /// `to_int() > other`, `false` when `other` has no integer form.
    fn greater_than(&self, other: Operand<'_, Self>) -> bool {
        self.coerce(other).is_some_and(|v| self.to_int() > v)
    }

    /// `equals(other) || less_than(other)`.
    fn less_equal(&self, other: Operand<'_, Self>) -> bool {
        self.equals(other) || self.less_than(other)
    }

    /// `equals(other) || greater_than(other)`.
    fn greater_equal(&self, other: Operand<'_, Self>) -> bool {
        self.equals(other) || self.greater_than(other)
    }

    /// Integer form of `other` or [`Error::InvalidShape`].
    fn require_int(&self, other: Operand<'_, Self>) -> Result<i64> {
        self.coerce(other)
            .ok_or_else(|| Error::invalid_shape(Self::KIND, "a non-numeric operand"))
    }

    /// `to_int() & other`.
    fn bit_and(&self, other: Operand<'_, Self>) -> Result<i64> {
        Ok(self.to_int() & self.require_int(other)?)
    }

    /// `to_int() | other`.
    fn bit_or(&self, other: Operand<'_, Self>) -> Result<i64> {
        Ok(self.to_int() | self.require_int(other)?)
    }

    /// `to_int() ^ other`.
    fn bit_xor(&self, other: Operand<'_, Self>) -> Result<i64> {
        Ok(self.to_int() ^ self.require_int(other)?)
    }

    /// `to_int() << other`. Shift counts outside `0..=63` are rejected.
    fn shift_left(&self, other: Operand<'_, Self>) -> Result<i64> {
        let amount = shift_amount(self.require_int(other)?)?;
        Ok(shl_int(self.to_int(), amount))
    }

    /// `to_int() >> other`. Shift counts outside `0..=63` are rejected.
    fn shift_right(&self, other: Operand<'_, Self>) -> Result<i64> {
        let amount = shift_amount(self.require_int(other)?)?;
        Ok(shr_int(self.to_int(), amount))
    }

    /// `!to_int()`.
    fn invert(&self) -> i64 {
        !self.to_int()
    }
}

fn shift_amount(v: i64) -> Result<u32> {
    if (0..=MAX_SHIFT).contains(&v) {
        Ok(v as u32)
    } else {
        Err(Error::out_of_range("shift", v, MAX_SHIFT))
    }
}

/// Indexing, slicing and iteration over the raw stored components.
macro_rules! impl_component_access {
    ($ty:ident, $n:expr) => {
        impl $ty {
            /// Number of components.
            pub const LEN: usize = $n;

            /// Raw stored components.
            #[inline]
            pub fn components(&self) -> &[$crate::scalar::Component; $n] {
                &self.components
            }

            /// Raw component at `index`.
            #[inline]
            pub fn get(&self, index: usize) -> Option<&$crate::scalar::Component> {
                self.components.get(index)
            }

            /// Number of components.
            #[inline]
            pub const fn len(&self) -> usize {
                $n
            }

            /// Always `false`; containers are never empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                false
            }

            /// Whether any raw component equals `item`.
            #[inline]
            pub fn contains(&self, item: &$crate::scalar::Component) -> bool {
                self.components.contains(item)
            }

            /// Iterates the raw components.
            #[inline]
            pub fn iter(&self) -> std::slice::Iter<'_, $crate::scalar::Component> {
                self.components.iter()
            }

            /// Raw view over a sub-range. Out-of-range bounds are clamped.
            pub fn slice(&self, range: impl std::ops::RangeBounds<usize>) -> $crate::model::Components {
                $crate::model::Components::slice(&self.components, range)
            }
        }

        impl std::ops::Index<usize> for $ty {
            type Output = $crate::scalar::Component;

            #[inline]
            fn index(&self, index: usize) -> &$crate::scalar::Component {
                &self.components[index]
            }
        }

        impl<'a> IntoIterator for &'a $ty {
            type Item = &'a $crate::scalar::Component;
            type IntoIter = std::slice::Iter<'a, $crate::scalar::Component>;

            fn into_iter(self) -> Self::IntoIter {
                self.components.iter()
            }
        }
    };
}

/// Relational and bitwise operator traits over the canonical integer.
macro_rules! impl_packed_ops {
    ($ty:ident) => {
        impl PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.to_int() == other.to_int()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.to_int().hash(state);
            }
        }

        impl PartialOrd for $ty {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            #[inline]
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.to_int().cmp(&other.to_int())
            }
        }

        impl PartialEq<i64> for $ty {
            #[inline]
            fn eq(&self, other: &i64) -> bool {
                self.to_int() == *other
            }
        }

        impl PartialEq<$ty> for i64 {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                *self == other.to_int()
            }
        }

        impl PartialOrd<i64> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &i64) -> Option<std::cmp::Ordering> {
                Some(self.to_int().cmp(other))
            }
        }

        impl PartialEq<f64> for $ty {
            #[inline]
            fn eq(&self, other: &f64) -> bool {
                $crate::model::PackedColor::equals(self, $crate::model::Operand::Float(*other))
            }
        }

        impl PartialOrd<f64> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
                $crate::model::PackedColor::coerce(self, $crate::model::Operand::Float(*other))
                    .map(|v| self.to_int().cmp(&v))
            }
        }

        impl std::ops::BitAnd<i64> for $ty {
            type Output = i64;

            #[inline]
            fn bitand(self, rhs: i64) -> i64 {
                self.to_int() & rhs
            }
        }

        impl std::ops::BitAnd for $ty {
            type Output = i64;

            #[inline]
            fn bitand(self, rhs: Self) -> i64 {
                self.to_int() & rhs.to_int()
            }
        }

        impl std::ops::BitOr<i64> for $ty {
            type Output = i64;

            #[inline]
            fn bitor(self, rhs: i64) -> i64 {
                self.to_int() | rhs
            }
        }

        impl std::ops::BitOr for $ty {
            type Output = i64;

            #[inline]
            fn bitor(self, rhs: Self) -> i64 {
                self.to_int() | rhs.to_int()
            }
        }

        impl std::ops::BitXor<i64> for $ty {
            type Output = i64;

            #[inline]
            fn bitxor(self, rhs: i64) -> i64 {
                self.to_int() ^ rhs
            }
        }

        impl std::ops::BitXor for $ty {
            type Output = i64;

            #[inline]
            fn bitxor(self, rhs: Self) -> i64 {
                self.to_int() ^ rhs.to_int()
            }
        }

        impl std::ops::Shl<u32> for $ty {
            type Output = i64;

            #[inline]
            fn shl(self, rhs: u32) -> i64 {
                $crate::model::shl_int(self.to_int(), rhs)
            }
        }

        impl std::ops::Shr<u32> for $ty {
            type Output = i64;

            #[inline]
            fn shr(self, rhs: u32) -> i64 {
                $crate::model::shr_int(self.to_int(), rhs)
            }
        }

        impl std::ops::Not for $ty {
            type Output = i64;

            #[inline]
            fn not(self) -> i64 {
                !self.to_int()
            }
        }

        impl std::fmt::LowerHex for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::LowerHex::fmt(&self.to_int(), f)
            }
        }

        impl std::fmt::UpperHex for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::UpperHex::fmt(&self.to_int(), f)
            }
        }
    };
}

pub(crate) use impl_component_access;
pub(crate) use impl_packed_ops;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Component::{Fraction, Magnitude};

    #[test]
    fn test_exact_arity() {
        let ok: [Component; 3] = exact("RGB", &[Magnitude(1), Magnitude(2), Magnitude(3)]).unwrap();
        assert_eq!(ok[2], Magnitude(3));

        let err = exact::<3>("RGB", &[Magnitude(1), Magnitude(2)]).unwrap_err();
        assert_eq!(err, Error::arity_mismatch("RGB", 3, 2));
    }

    #[test]
    fn test_positional_missing() {
        let err = positional::<3>("HSL", &[Some(Magnitude(1)), None, Some(Fraction(0.5))]).unwrap_err();
        assert_eq!(err, Error::missing_value("HSL", 1));

        let err = positional::<3>("HSL", &[Some(Magnitude(1))]).unwrap_err();
        assert_eq!(err, Error::missing_value("HSL", 1));
    }

    #[test]
    fn test_positional_too_many() {
        let slots = vec![Some(Magnitude(0)); 5];
        let err = positional::<4>("RGBA", &slots).unwrap_err();
        assert_eq!(err, Error::arity_mismatch("RGBA", 4, 5));
    }

    #[test]
    fn test_lone_magnitude() {
        assert_eq!(lone_magnitude(&[Some(Magnitude(7)), None, None]), Some(7));
        assert_eq!(lone_magnitude(&[Some(Magnitude(7))]), Some(7));
        assert_eq!(lone_magnitude(&[Some(Fraction(0.5)), None, None]), None);
        assert_eq!(lone_magnitude(&[Some(Magnitude(7)), Some(Magnitude(1)), None]), None);
        assert_eq!(lone_magnitude(&[]), None);
    }

    #[test]
    fn test_components_slice_clamps() {
        let items = [Magnitude(1), Magnitude(2), Magnitude(3)];
        assert_eq!(&*Components::slice(&items, 1..), &[Magnitude(2), Magnitude(3)]);
        assert_eq!(&*Components::slice(&items, ..=0), &[Magnitude(1)]);
        assert!(Components::slice(&items, 5..9).is_empty());
        assert!(Components::slice(&items, 2..1).is_empty());
        assert_eq!(Components::slice(&items, ..10).len(), 3);
    }

    #[test]
    fn test_wide_shifts() {
        assert_eq!(shl_int(1, 64), 0);
        assert_eq!(shr_int(-8, 70), -1);
        assert_eq!(shr_int(8, 70), 0);
        assert_eq!(shift_amount(64).unwrap_err(), Error::out_of_range("shift", 64, 63));
        assert!(shift_amount(-1).is_err());
    }
}
