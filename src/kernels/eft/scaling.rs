//! Exponent extraction, fraction normalisation, and power-of-two scaling.
//!
//! Bit-level views of the IEEE-754 layout used by the scaled multiply path.
//! Subnormals are brought into the normal range by an exact multiply with
//! 2^54 before their exponent or fraction is read.

use super::{f64_from_bits, f64_to_bits, get_exp_bits, SIGN_FRAC_MASK, SIGN_MASK};

/// 2^54, scales the smallest subnormal into the normal range exactly.
pub(crate) const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);
const TWOM54: f64 = f64::from_bits(0x3c90_0000_0000_0000);
const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;

#[inline(always)]
fn copysign(x: f64, y: f64) -> f64 {
    f64_from_bits((f64_to_bits(x) & !SIGN_MASK) | (f64_to_bits(y) & SIGN_MASK))
}

/// Biased exponent of `a`.
///
/// Subnormals are pre-scaled by 2^54 and the result adjusted by -54 so it
/// pairs with [`normalised_fraction`]: `a == normalised_fraction(a) *
/// 2^(biased_exponent(a) - 1022)` for any finite nonzero `a`.
#[inline(always)]
pub(crate) fn biased_exponent(a: f64) -> i32 {
    let e = get_exp_bits(f64_to_bits(a));
    if e == 0 {
        return get_exp_bits(f64_to_bits(a * TWO54)) - 54;
    }
    e
}

/// Sign and significand of `a` with the exponent field forced to 0x3fe,
/// i.e. a magnitude in [0.5, 1).
#[inline(always)]
pub(crate) fn normalised_fraction(a: f64) -> f64 {
    let mut u = f64_to_bits(a);
    if get_exp_bits(u) == 0 {
        u = f64_to_bits(a * TWO54);
    }
    f64_from_bits((u & SIGN_FRAC_MASK) | (0x3feu64 << 52))
}

/// Multiply `x` by 2^n without calling any libm.
///
/// Handles subnormal entry and exit; saturates to a signed huge/tiny product
/// on overflow/underflow just like scalbn.
#[inline(always)]
pub fn scale_by_pow2(mut x: f64, n: i32) -> f64 {
    if n == 0 {
        return x;
    }

    let mut ix = f64_to_bits(x);
    let mut k = get_exp_bits(ix);
    if k == 0 {
        if (ix & !SIGN_MASK) == 0 {
            return x;
        }
        x *= TWO54;
        ix = f64_to_bits(x);
        k = get_exp_bits(ix) - 54;
    }
    if k == 0x7ff {
        // NaN or infinity
        return x + x;
    }
    if n < -50000 {
        return TINY * copysign(TINY, x);
    }
    if n > 50000 || (k as i64 + n as i64) > 0x7fe {
        return HUGE * copysign(HUGE, x);
    }

    k += n;
    if k > 0 {
        return f64_from_bits((ix & SIGN_FRAC_MASK) | ((k as u64) << 52));
    }
    if k <= -54 {
        return TINY * copysign(TINY, x);
    }
    // Subnormal result: build the value 54 binades up, then shift down.
    k += 54;
    f64_from_bits((ix & SIGN_FRAC_MASK) | ((k as u64) << 52)) * TWOM54
}
