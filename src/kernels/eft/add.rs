//! Error-free transformations for addition.
//!
//! `fast_two_sum_low` is Dekker's ordered two-sum (one subtraction, requires
//! the operands magnitude-ordered); `two_sum_low` is Knuth's branch-free
//! form. `sum_low` folds the low words of two double-double operands into
//! the error of their high-part sum.

use super::Quad;

/// Rounding error of `sum = a + b`, given `|a| >= |b|`.
///
/// The ordering requirement is a caller contract and is not checked in
/// release builds; violating it gives a deterministic but inexact result.
#[inline(always)]
pub fn fast_two_sum_low(a: f64, b: f64, sum: f64) -> f64 {
    debug_assert!(!(a.abs() < b.abs()), "fast_two_sum_low requires |a| >= |b|");
    b - (sum - a)
}

/// Rounding error of `sum = a + b`, with no ordering assumption (Knuth).
#[inline(always)]
pub fn two_sum_low(a: f64, b: f64, sum: f64) -> f64 {
    let b_virtual = sum - a;
    let a_virtual = sum - b_virtual;
    (a - a_virtual) + (b - b_virtual)
}

/// Rounded sum of `a` and `b` together with its exact error.
#[inline(always)]
pub fn two_sum(a: f64, b: f64) -> Quad {
    let sum = a + b;
    Quad::new(sum, two_sum_low(a, b, sum))
}

/// Ordered variant of [`two_sum`]; requires `|a| >= |b|`.
#[inline(always)]
pub fn fast_two_sum(a: f64, b: f64) -> Quad {
    let sum = a + b;
    Quad::new(sum, fast_two_sum_low(a, b, sum))
}

/// Low part of the sum of two double-double numbers `(x, xx)` and `(y, yy)`
/// whose high-part sum `r = x + y` is precomputed.
///
/// The magnitude comparison only picks the more accurate folding order; it
/// is not a correctness requirement. Callers rebalance the result with
/// `z = r + s; zz = (r - z) + s`.
#[inline(always)]
pub fn sum_low(x: f64, xx: f64, y: f64, yy: f64, r: f64) -> f64 {
    if x.abs() > y.abs() {
        ((x - r) + y) + yy + xx
    } else {
        ((y - r) + x) + xx + yy
    }
}
