use super::f64_to_bits;

const EXP_MASK: u64 = 0x7ff;
// Biased exponents of normal finite doubles span 1..=2046.
const MAX_BIASED_EXP_M1: u64 = 0x7fe;

/// True iff `a` is zero, subnormal, infinite, or NaN.
///
/// Shifting the 11-bit biased exponent down by one makes exponent 0 wrap to
/// a huge unsigned value, so one comparison covers both boundary exponents
/// (0 for zero/subnormal, 0x7ff for infinity/NaN). The sign bit is ignored.
#[inline(always)]
pub fn is_not_normal(a: f64) -> bool {
    ((f64_to_bits(a) >> 52) & EXP_MASK).wrapping_sub(1) >= MAX_BIASED_EXP_M1
}
