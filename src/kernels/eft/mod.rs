//! Error-free transformations for `f64`.
//!
//! Every operation here computes a correctly rounded double-precision result
//! together with its exact rounding error using only ordinary floating-point
//! operations, following Dekker, Knuth and Shewchuk. The splitting and
//! multiply paths carry overflow/underflow guards so the full finite range is
//! usable; IEEE specials (zero, subnormal, infinity, NaN) map to documented
//! outputs instead of panics.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod add;
mod classify;
mod mul;
mod quad;
mod scaling;
mod split;

pub use add::{fast_two_sum, fast_two_sum_low, sum_low, two_sum, two_sum_low};
pub use classify::is_not_normal;
pub use mul::{multiply, multiply_unscaled, product_low, product_low_unscaled};
pub use quad::Quad;
pub use scaling::scale_by_pow2;
pub use split::{high_part, high_part_raw, high_part_unscaled};

// ========= bit helpers =========

pub(crate) const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
pub(crate) const SIGN_FRAC_MASK: u64 = 0x800f_ffff_ffff_ffffu64;

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}
