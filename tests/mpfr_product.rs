#![cfg(feature = "mpfr")]

//! Arbitrary-precision cross-check of the error-free transformations.
//!
//! Reconstructs `hi + lo` in 200-bit MPFR arithmetic and compares it with
//! the exact product or sum. Run with `cargo test --features mpfr`.

use exactmaths::eft;
use rug::Float;

const MPFR_PREC: u32 = 200;

fn rand_u64(state: &mut u64) -> u64 {
    const A: u64 = 6364136223846793005;
    const C: u64 = 1442695040888963407;
    *state = state.wrapping_mul(A).wrapping_add(C);
    *state
}

fn rand_f64_normal(state: &mut u64) -> f64 {
    let exp = (rand_u64(state) % 0x7fe) + 1;
    let mant = rand_u64(state) & 0x000f_ffff_ffff_ffff;
    let sign = rand_u64(state) & 0x8000_0000_0000_0000;
    f64::from_bits(sign | (exp << 52) | mant)
}

fn exact(x: f64) -> Float {
    Float::with_val(MPFR_PREC, x)
}

fn assert_pair_is_exact_product(x: f64, y: f64) {
    let q = eft::multiply(x, y);
    assert_eq!(
        q.hi.to_bits(),
        (x * y).to_bits(),
        "multiply({x}, {y}): hi is not the rounded product"
    );
    let reconstructed = exact(q.hi) + exact(q.lo);
    let product = exact(x) * exact(y);
    assert_eq!(
        reconstructed, product,
        "multiply({x}, {y}): hi + lo != exact product (hi={}, lo={})",
        q.hi, q.lo
    );
}

// The pair is an exact decomposition only while the error term stays
// representable; keep the product well inside the normal range.
fn product_is_checkable(x: f64, y: f64) -> bool {
    let xy = x * y;
    xy.is_normal() && xy.abs() >= f64::from_bits(0x0690_0000_0000_0000) // 2^-918
}

#[test]
fn multiply_is_exact_for_boundary_operands() {
    let cases = [
        (2.0, 3.0),
        (0.1, 0.1),
        (1.0 / 3.0, 3.0),
        (1e305, 0.5),
        (0.5, 1e305),
        (-1.75e307, 3.0),
        (1e300, 1e8),
        (f64::MAX, 1.0),
        (f64::MAX, 0.5),
        (f64::from_bits(1), 1e300),
        (f64::from_bits(0x000f_ffff_ffff_ffff), 1e308),
        (f64::MIN_POSITIVE, 1e17),
    ];
    for &(x, y) in &cases {
        assert!(product_is_checkable(x, y), "bad case ({x}, {y})");
        assert_pair_is_exact_product(x, y);
    }
}

#[test]
fn multiply_is_exact_for_random_operands() {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    let mut checked = 0;
    while checked < 20_000 {
        let x = rand_f64_normal(&mut state);
        let y = rand_f64_normal(&mut state);
        if !product_is_checkable(x, y) {
            continue;
        }
        assert_pair_is_exact_product(x, y);
        checked += 1;
    }
}

#[test]
fn product_low_recovers_the_exact_error() {
    let mut state = 0x0123_4567_89ab_cdefu64;
    let mut checked = 0;
    while checked < 20_000 {
        let x = rand_f64_normal(&mut state);
        let y = rand_f64_normal(&mut state);
        if !product_is_checkable(x, y) {
            continue;
        }
        let xy = x * y;
        let low = eft::product_low(x, y, xy);
        let expected = (exact(x) * exact(y) - exact(xy)).to_f64();
        assert_eq!(
            low, expected,
            "product_low({x}, {y}) disagrees with mpfr"
        );
        checked += 1;
    }
}

#[test]
fn two_sum_pair_is_the_exact_sum() {
    let mut state = 0xdead_beefu64;
    let mut checked = 0;
    while checked < 20_000 {
        let a = rand_f64_normal(&mut state);
        let b = rand_f64_normal(&mut state);
        let sum = a + b;
        if !sum.is_normal() {
            continue;
        }
        let q = eft::two_sum(a, b);
        assert_eq!(q.hi.to_bits(), sum.to_bits());
        assert_eq!(
            exact(q.hi) + exact(q.lo),
            exact(a) + exact(b),
            "two_sum({a}, {b}) is not error-free"
        );
        assert_eq!(q.value(), sum);
        checked += 1;
    }
}
