//! Bit-field extraction helpers.
//!
//! Packed color formats place each component at a fixed offset. These
//! functions pull one field back out. They never validate `value`; callers
//! that need range checks do them before extracting.
//!
//! Shifts past the width of `i64` behave like shifting an unbounded integer:
//! every bit is shifted out, leaving `0` (or `-1` for negative inputs).

/// Mask covering the low `size` bits.
#[inline]
const fn low_mask(size: u32) -> i64 {
    if size >= i64::BITS {
        -1
    } else {
        (1i64 << size) - 1
    }
}

#[inline]
const fn shift_right(value: i64, offset: u32) -> i64 {
    match value.checked_shr(offset) {
        Some(v) => v,
        None if value < 0 => -1,
        None => 0,
    }
}

/// Returns the `unit`-bit field of `value` at field index `step`.
///
/// The field starts at bit `unit * step`.
///
/// # Example
///
/// ```
/// use tint_core::bits::get_bytes;
///
/// assert_eq!(get_bytes(0x12_34_56, 2, 8), 0x12);
/// assert_eq!(get_bytes(0x7FFF, 1, 5), 0x1F);
/// ```
#[inline]
pub const fn get_bytes(value: i64, step: u32, unit: u32) -> i64 {
    shift_right(value, unit.saturating_mul(step)) & low_mask(unit)
}

/// Returns byte `step` of `value`, counting from the least significant byte.
#[inline]
pub const fn get_byte(value: i64, step: u32) -> i64 {
    get_bytes(value, step, 8)
}

/// Returns `size` bits of `value` starting at bit `start`.
///
/// `None` keeps every bit above `start`.
///
/// # Example
///
/// ```
/// use tint_core::bits::get_bits;
///
/// assert_eq!(get_bits(0xFFFF, 11, Some(5)), 31);
/// assert_eq!(get_bits(0xFFFF, 4, None), 0xFFF);
/// ```
#[inline]
pub const fn get_bits(value: i64, start: u32, size: Option<u32>) -> i64 {
    let shifted = shift_right(value, start);
    match size {
        Some(size) => shifted & low_mask(size),
        None => shifted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bytes_default_unit() {
        let v = 0xAA_BB_CC;
        assert_eq!(get_byte(v, 0), 0xCC);
        assert_eq!(get_byte(v, 1), 0xBB);
        assert_eq!(get_byte(v, 2), 0xAA);
        assert_eq!(get_byte(v, 3), 0);
    }

    #[test]
    fn test_get_bytes_five_bit_unit() {
        // 0b11111_00000_10101
        let v = 0b111110000010101;
        assert_eq!(get_bytes(v, 0, 5), 0b10101);
        assert_eq!(get_bytes(v, 1, 5), 0);
        assert_eq!(get_bytes(v, 2, 5), 0b11111);
    }

    #[test]
    fn test_get_bits_masked() {
        assert_eq!(get_bits(0xFFFF, 11, Some(5)), 31);
        assert_eq!(get_bits(0xFFFF, 5, Some(6)), 63);
        assert_eq!(get_bits(0xFFFF, 0, Some(5)), 31);
    }

    #[test]
    fn test_get_bits_unmasked() {
        assert_eq!(get_bits(0xABCD, 0, None), 0xABCD);
        assert_eq!(get_bits(0xABCD, 8, None), 0xAB);
    }

    #[test]
    fn test_wide_shift() {
        assert_eq!(get_byte(0x7F, 8), 0);
        assert_eq!(get_bits(-1, 80, None), -1);
        assert_eq!(get_bits(5, 64, Some(3)), 0);
    }
}
