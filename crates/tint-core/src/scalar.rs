//! Dual-domain scalar components.
//!
//! A color component can be given either as a fraction of full scale or as an
//! absolute magnitude. Both forms normalize to one canonical stored value, so
//! `Red::new(1.0)` and `Red::new(255)` are the same thing.
//!
//! # Types
//!
//! - [`Component`] - raw input: [`Component::Fraction`] or [`Component::Magnitude`]
//! - [`Level`] - integer scalar bounded by a domain maximum (bytes, degrees)
//! - [`Percent`] - float scalar bounded by `1.0`
//!
//! Domains are zero-sized marker types, so a [`Red`] can never be passed
//! where a [`Green`] is expected.
//!
//! # Clamping
//!
//! Only the upper bound is enforced. A negative magnitude or fraction is kept
//! as-is:
//!
//! ```
//! use tint_core::scalar::{Red, Saturation};
//!
//! assert_eq!(Red::new(300).value(), 255);
//! assert_eq!(Red::new(-4).value(), -4);
//! assert_eq!(Saturation::new(2.5).value(), 1.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Raw, not-yet-normalized component value.
///
/// Floats are fractions of full scale, integers are absolute magnitudes.
/// Containers store components in this form and normalize on access.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    /// Fraction of full scale, nominally `[0.0, 1.0]`.
    Fraction(f64),
    /// Absolute magnitude in the domain's integer range.
    Magnitude(i64),
}

impl Component {
    /// Returns `true` for [`Component::Magnitude`].
    #[inline]
    pub const fn is_magnitude(&self) -> bool {
        matches!(self, Self::Magnitude(_))
    }

    /// Integer view used by packed-integer coercion. Fractions truncate.
    #[inline]
    pub fn truncate(self) -> i64 {
        match self {
            Self::Fraction(f) => f as i64,
            Self::Magnitude(m) => m,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Magnitude(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for Component {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Fraction(v)
    }
}

impl From<f32> for Component {
    #[inline]
    fn from(v: f32) -> Self {
        Self::Fraction(v as f64)
    }
}

impl From<i64> for Component {
    #[inline]
    fn from(v: i64) -> Self {
        Self::Magnitude(v)
    }
}

impl From<i32> for Component {
    #[inline]
    fn from(v: i32) -> Self {
        Self::Magnitude(v as i64)
    }
}

impl From<u32> for Component {
    #[inline]
    fn from(v: u32) -> Self {
        Self::Magnitude(v as i64)
    }
}

impl From<u16> for Component {
    #[inline]
    fn from(v: u16) -> Self {
        Self::Magnitude(v as i64)
    }
}

impl From<u8> for Component {
    #[inline]
    fn from(v: u8) -> Self {
        Self::Magnitude(v as i64)
    }
}

impl<D: LevelDomain> From<Level<D>> for Component {
    #[inline]
    fn from(v: Level<D>) -> Self {
        Self::Magnitude(v.value)
    }
}

impl<D: PercentDomain> From<Percent<D>> for Component {
    #[inline]
    fn from(v: Percent<D>) -> Self {
        Self::Fraction(v.value)
    }
}

/// Marker trait for integer scalar domains.
pub trait LevelDomain: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Scalar name, used in debug output.
    const NAME: &'static str;

    /// Upper bound of the integer domain. A fraction of `1.0` maps here.
    const MAX: i64;
}

/// Marker trait for fraction-only scalar domains.
pub trait PercentDomain: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Scalar name, used in debug output.
    const NAME: &'static str;
}

/// Integer scalar bounded above by `D::MAX`.
///
/// # Construction
///
/// - fraction `x`: `min(MAX, x * MAX)`, truncated toward zero
/// - magnitude `x`: `min(MAX, x)`, never scaled
///
/// ```
/// use tint_core::scalar::{Hue, Red};
///
/// assert_eq!(Red::new(1.0), Red::new(255));
/// assert_eq!(Red::new(0.5), Red::new(127));
/// assert_eq!(Hue::new(0.5).value(), 180);
/// ```
#[derive(Copy, Clone, Default)]
pub struct Level<D: LevelDomain> {
    value: i64,
    _domain: PhantomData<D>,
}

impl<D: LevelDomain> Level<D> {
    /// Domain upper bound.
    pub const MAX: i64 = D::MAX;

    /// Normalizes `x` into the domain.
    #[inline]
    pub fn new(x: impl Into<Component>) -> Self {
        let max = D::MAX;
        let value = match x.into() {
            Component::Fraction(f) => (f * max as f64).min(max as f64) as i64,
            Component::Magnitude(m) => m.min(max),
        };
        Self {
            value,
            _domain: PhantomData,
        }
    }

    /// Canonical stored value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Value as a fraction of `MAX`.
    #[inline]
    pub fn to_fraction(self) -> f64 {
        self.value as f64 / D::MAX as f64
    }
}

impl<D: LevelDomain> PartialEq for Level<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: LevelDomain> Eq for Level<D> {}

impl<D: LevelDomain> PartialOrd for Level<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: LevelDomain> Ord for Level<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<D: LevelDomain> Hash for Level<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<D: LevelDomain> PartialEq<i64> for Level<D> {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl<D: LevelDomain> fmt::Debug for Level<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", D::NAME, self.value)
    }
}

impl<D: LevelDomain> fmt::Display for Level<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Float scalar bounded above by `1.0`.
///
/// Both fractions and magnitudes are taken as-is and clamped to `1.0`, so
/// `Percent::new(255)` is `1.0` and `Percent::new(0)` is `0.0`.
#[derive(Copy, Clone, Default)]
pub struct Percent<D: PercentDomain> {
    value: f64,
    _domain: PhantomData<D>,
}

impl<D: PercentDomain> Percent<D> {
    /// Normalizes `x` into `[.., 1.0]`.
    #[inline]
    pub fn new(x: impl Into<Component>) -> Self {
        let value = match x.into() {
            Component::Fraction(f) => f.min(1.0),
            Component::Magnitude(m) => (m as f64).min(1.0),
        };
        Self {
            value,
            _domain: PhantomData,
        }
    }

    /// Canonical stored value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }
}

impl<D: PercentDomain> PartialEq for Percent<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: PercentDomain> PartialOrd for Percent<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: PercentDomain> PartialEq<f64> for Percent<D> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl<D: PercentDomain> fmt::Debug for Percent<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", D::NAME, self.value)
    }
}

impl<D: PercentDomain> fmt::Display for Percent<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ============================================================================
// Byte Domains
// ============================================================================

/// Red channel, `0..=255`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RedDomain;

impl LevelDomain for RedDomain {
    const NAME: &'static str = "Red";
    const MAX: i64 = 0xFF;
}

/// Green channel, `0..=255`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GreenDomain;

impl LevelDomain for GreenDomain {
    const NAME: &'static str = "Green";
    const MAX: i64 = 0xFF;
}

/// Blue channel, `0..=255`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlueDomain;

impl LevelDomain for BlueDomain {
    const NAME: &'static str = "Blue";
    const MAX: i64 = 0xFF;
}

/// Alpha channel, `0..=255`. `255` is opaque.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlphaDomain;

impl LevelDomain for AlphaDomain {
    const NAME: &'static str = "Alpha";
    const MAX: i64 = 0xFF;
}

// ============================================================================
// Degree Domains
// ============================================================================

/// Hue angle in whole degrees, `0..=360`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HueDomain;

impl LevelDomain for HueDomain {
    const NAME: &'static str = "Hue";
    const MAX: i64 = 360;
}

// ============================================================================
// Percent Domains
// ============================================================================

/// HSL/HSV saturation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SaturationDomain;

impl PercentDomain for SaturationDomain {
    const NAME: &'static str = "Saturation";
}

/// HSL lightness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LightnessDomain;

impl PercentDomain for LightnessDomain {
    const NAME: &'static str = "Lightness";
}

/// HSV value (brightness).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueDomain;

impl PercentDomain for ValueDomain {
    const NAME: &'static str = "Value";
}

/// YUV luma.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LumaDomain;

impl PercentDomain for LumaDomain {
    const NAME: &'static str = "Luma";
}

/// YUV blue-difference chroma.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChromaUDomain;

impl PercentDomain for ChromaUDomain {
    const NAME: &'static str = "ChromaU";
}

/// YUV red-difference chroma.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChromaVDomain;

impl PercentDomain for ChromaVDomain {
    const NAME: &'static str = "ChromaV";
}

/// Red component.
pub type Red = Level<RedDomain>;
/// Green component.
pub type Green = Level<GreenDomain>;
/// Blue component.
pub type Blue = Level<BlueDomain>;
/// Alpha component.
pub type Alpha = Level<AlphaDomain>;
/// Hue component.
pub type Hue = Level<HueDomain>;
/// Saturation component.
pub type Saturation = Percent<SaturationDomain>;
/// Lightness component.
pub type Lightness = Percent<LightnessDomain>;
/// HSV value component.
pub type Value = Percent<ValueDomain>;
/// Luma component.
pub type Luma = Percent<LumaDomain>;
/// U chroma component.
pub type ChromaU = Percent<ChromaUDomain>;
/// V chroma component.
pub type ChromaV = Percent<ChromaVDomain>;
