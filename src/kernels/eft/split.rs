//! Dekker splitting of a double into two non-overlapping halves.
//!
//! The multiplicative split by 2^27+1 gives a high part holding the upper
//! ~26 significand bits; `value - high` is then the exact low part. The
//! intermediate `SPLIT * value` overflows for |value| >= 2^996, so the safe
//! entry point rescales large inputs and keeps a raw bit-mask split as the
//! unconditional fallback.

use super::{f64_from_bits, f64_to_bits};

/// Dekker's splitting constant, 2^27 + 1.
pub(crate) const SPLIT: f64 = 134_217_729.0;
/// Smallest magnitude at which `SPLIT * value` can overflow: 2^996.
pub(crate) const SAFE_UPPER: f64 = f64::from_bits(0x7e30_0000_0000_0000);
/// 2^-30, used to bring near-overflow operands into the safe range.
pub(crate) const DOWN_SCALE: f64 = f64::from_bits(0x3e10_0000_0000_0000);
/// 2^30, the inverse rescale.
pub(crate) const UP_SCALE: f64 = f64::from_bits(0x41d0_0000_0000_0000);

const LOW_27_BITS: u64 = (1u64 << 27) - 1;

/// High part of `value` via the multiplicative split, no overflow guard.
///
/// Requires |value| < 2^996; the low part is `value - high_part_unscaled(value)`.
#[inline(always)]
pub fn high_part_unscaled(value: f64) -> f64 {
    let c = SPLIT * value;
    c - (c - value)
}

/// Overflow-safe high part.
///
/// Large inputs are scaled down by 2^-30 before splitting and back up after.
/// If even the rescaled split leaves the normal range (the input was at the
/// very top of the exponent range, or infinite), the raw bit split is used
/// instead. NaN splits to NaN and ±infinity to itself; any finite input
/// yields a finite high part.
#[inline(always)]
pub fn high_part(value: f64) -> f64 {
    if value.abs() >= SAFE_UPPER {
        let hi = high_part_unscaled(value * DOWN_SCALE) * UP_SCALE;
        if !hi.is_finite() {
            return high_part_raw(value);
        }
        return hi;
    }
    high_part_unscaled(value)
}

/// High part by zeroing the low 27 significand bits in the bit pattern.
///
/// Never overflows. The complementary low part keeps 27 bits instead of the
/// multiplicative split's 26+sign, so it may lose one bit of the usual
/// non-overlap margin.
#[inline(always)]
pub fn high_part_raw(value: f64) -> f64 {
    f64_from_bits(f64_to_bits(value) & !LOW_27_BITS)
}
