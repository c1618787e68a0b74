/// An extended-precision value held as the unevaluated sum `hi + lo`.
///
/// `hi` is the correctly rounded double-precision result of the operation
/// that produced the value and `lo` the exact rounding error, so `hi + lo`
/// represents the true result to roughly twice f64 precision. For normal
/// results the parts never overlap: `|lo| <= 0.5 * ulp(hi)`.
///
/// When `hi` is infinite or NaN the extended chain is no longer meaningful
/// and `lo` is NaN; when `hi` is zero or subnormal, `lo` is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quad {
    pub hi: f64,
    pub lo: f64,
}

impl Quad {
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    #[inline(always)]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Collapse to a single double, discarding the extended bits.
    #[inline(always)]
    pub fn value(self) -> f64 {
        self.hi + self.lo
    }
}
