//! Error-free transformations for multiplication.
//!
//! Dekker's mul12 computes a product and its exact rounding error from
//! split operands; the Shewchuk four-term correction recovers the error of
//! an already-computed product. The safe entry points rescale operands so
//! the splits never overflow, and short-circuit on non-normal products per
//! the kernel's special-case contract.

use super::classify::is_not_normal;
use super::f64_from_bits;
use super::quad::Quad;
use super::scaling::{biased_exponent, normalised_fraction, scale_by_pow2};
use super::split::{high_part_unscaled, DOWN_SCALE, SAFE_UPPER, UP_SCALE};

/// Exact product of `x` and `y` as a (hi, lo) pair, no overflow guards.
///
/// Requires both operands pre-normalised so that the splits and the
/// component products stay finite (|x|, |y| < 2^996 and the product normal).
#[inline(always)]
pub fn multiply_unscaled(x: f64, y: f64) -> Quad {
    let hx = high_part_unscaled(x);
    let lx = x - hx;
    let hy = high_part_unscaled(y);
    let ly = y - hy;

    let p = hx * hy;
    let q = hx * ly + lx * hy;
    let hi = p + q;
    let lo = p - hi + q + lx * ly;
    Quad::new(hi, lo)
}

/// Exact product over the full finite range.
///
/// `hi` always equals the IEEE-754 product `x * y`. When that product is
/// zero or subnormal, `lo` is exactly 0.0; when it is infinite or NaN, `lo`
/// is NaN (both fall out of `xy - xy`). Otherwise the operands are reduced
/// to normalised fractions in [0.5, 1), multiplied exactly, and the pair is
/// rescaled to the true binade.
pub fn multiply(x: f64, y: f64) -> Quad {
    let xy = x * y;
    if is_not_normal(xy) {
        return Quad::new(xy, xy - xy);
    }

    let xe = biased_exponent(x);
    let ye = biased_exponent(y);
    let f = multiply_unscaled(normalised_fraction(x), normalised_fraction(y));

    // x*y == f * 2^(xe + ye - 2044); as a biased exponent:
    let scale = xe + ye - 1021;
    if scale > 0 && scale <= 0x7fe {
        // The power of two is itself a normal double; scaling the rounded
        // hi is exact because xy is normal.
        let pow = f64_from_bits((scale as u64) << 52);
        return Quad::new(f.hi * pow, f.lo * pow);
    }
    Quad::new(
        scale_by_pow2(f.hi, scale - 1023),
        scale_by_pow2(f.lo, scale - 1023),
    )
}

/// Rounding error of a precomputed product `xy = x * y`, no overflow guards.
///
/// Four-term Dekker/Shewchuk correction over unscaled splits; same operand
/// range requirements as [`multiply_unscaled`].
#[inline(always)]
pub fn product_low_unscaled(x: f64, y: f64, xy: f64) -> f64 {
    let hx = high_part_unscaled(x);
    let lx = x - hx;
    let hy = high_part_unscaled(y);
    let ly = y - hy;

    lx * ly - (((xy - hx * hy) - lx * hy) - hx * ly)
}

/// Rounding error of a precomputed product `xy = x * y`, full range.
///
/// Returns 0.0 when `xy` is zero or subnormal and NaN when it is infinite
/// or NaN. Only the larger operand ever needs rescaling: the product is
/// normal by precondition, so at most one operand can sit above 2^996.
pub fn product_low(x: f64, y: f64, xy: f64) -> f64 {
    if is_not_normal(xy) {
        return xy - xy;
    }
    if x.abs() > SAFE_UPPER {
        return product_low_unscaled(x * DOWN_SCALE, y, xy * DOWN_SCALE) * UP_SCALE;
    }
    if y.abs() > SAFE_UPPER {
        return product_low_unscaled(x, y * DOWN_SCALE, xy * DOWN_SCALE) * UP_SCALE;
    }
    product_low_unscaled(x, y, xy)
}
