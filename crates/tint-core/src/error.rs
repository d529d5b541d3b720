//! Error types for tint-core construction.
//!
//! Every failure in this crate happens while building a value: a container
//! fed a sequence of the wrong length, a packed integer wider than its
//! format, a partially supplied set of components, or an input shape the
//! target kind does not accept. Nothing is deferred; the error is returned
//! from the constructor that saw the bad input.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Rgb};
//!
//! let err = Rgb::from_int(0x1_000_000).unwrap_err();
//! assert!(err.is_range_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::model`] - container constructors
//! - `tint-codec` - packed format decoding and name lookup

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing scalars and containers.
///
/// # Categories
///
/// - **Shape errors**: [`ArityMismatch`](Error::ArityMismatch),
///   [`MissingValue`](Error::MissingValue), [`InvalidShape`](Error::InvalidShape)
/// - **Range errors**: [`OutOfRange`](Error::OutOfRange)
/// - **Capability errors**: [`Unsupported`](Error::Unsupported),
///   [`UnknownFormat`](Error::UnknownFormat)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A sequence did not have the number of items the container requires.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Error;
    ///
    /// let err = Error::arity_mismatch("RGB", 3, 4);
    /// assert_eq!(err.to_string(), "RGB requires 3 items, got 4");
    /// ```
    #[error("{kind} requires {expected} items, got {got}")]
    ArityMismatch {
        /// Container kind name
        kind: &'static str,
        /// Required number of items
        expected: usize,
        /// Supplied number of items
        got: usize,
    },

    /// A packed integer does not fit the bit width of its format.
    #[error("{kind} value {value:#X} out of range 0..={max:#X}")]
    OutOfRange {
        /// Container or format name
        kind: &'static str,
        /// Offending value
        value: i64,
        /// Largest accepted value
        max: i64,
    },

    /// Some but not all positional components were supplied.
    #[error("{kind} missing value at position {position}")]
    MissingValue {
        /// Container kind name
        kind: &'static str,
        /// First position left empty
        position: usize,
    },

    /// The input is neither a number nor a sequence this kind accepts.
    #[error("{kind} cannot be built from {shape}")]
    InvalidShape {
        /// Container kind name
        kind: &'static str,
        /// Description of the rejected input
        shape: &'static str,
    },

    /// A declared conversion that has no implementation.
    #[error("unsupported conversion: {0}")]
    Unsupported(&'static str),

    /// A packed format name that is not recognized.
    #[error("unknown packed format: {0}")]
    UnknownFormat(String),
}

impl Error {
    /// Creates an [`Error::ArityMismatch`] error.
    #[inline]
    pub fn arity_mismatch(kind: &'static str, expected: usize, got: usize) -> Self {
        Self::ArityMismatch {
            kind,
            expected,
            got,
        }
    }

    /// Creates an [`Error::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(kind: &'static str, value: i64, max: i64) -> Self {
        Self::OutOfRange { kind, value, max }
    }

    /// Creates an [`Error::MissingValue`] error.
    #[inline]
    pub fn missing_value(kind: &'static str, position: usize) -> Self {
        Self::MissingValue { kind, position }
    }

    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(kind: &'static str, shape: &'static str) -> Self {
        Self::InvalidShape { kind, shape }
    }

    /// Creates an [`Error::UnknownFormat`] error.
    #[inline]
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat(name.into())
    }

    /// Returns `true` if the input had the wrong shape or arity.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::ArityMismatch { .. } | Self::MissingValue { .. } | Self::InvalidShape { .. }
        )
    }

    /// Returns `true` if a packed value exceeded its bit width.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch() {
        let err = Error::arity_mismatch("RGBA", 4, 3);
        let msg = err.to_string();
        assert!(msg.contains("RGBA"));
        assert!(msg.contains("got 3"));
        assert!(err.is_shape_error());
        assert!(!err.is_range_error());
    }

    #[test]
    fn test_out_of_range() {
        let err = Error::out_of_range("RGB", 0x1000000, 0xFFFFFF);
        assert_eq!(err.to_string(), "RGB value 0x1000000 out of range 0..=0xFFFFFF");
        assert!(err.is_range_error());
    }

    #[test]
    fn test_missing_value() {
        let err = Error::missing_value("HSL", 2);
        assert!(err.to_string().contains("position 2"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_unknown_format() {
        let err = Error::unknown_format("rgb888");
        assert!(err.to_string().contains("rgb888"));
        assert!(!err.is_shape_error());
    }
}
