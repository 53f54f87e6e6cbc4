//! Conversions from raw engine output to wider words and unit-interval floats.
//!
//! Float conversions keep the top 53 (or 52) bits of a `u64`, which is the
//! full precision of an `f64` mantissa.

/// 2^-53
const INV_2_53: f64 = 1.0 / 9007199254740992.0;

/// 2^-52
const INV_2_52: f64 = 1.0 / 4503599627370496.0;

/// Joins two 32-bit words into a `u64`, `hi` occupying the upper half.
#[inline]
pub const fn join_words(hi: u32, lo: u32) -> u64 {
    ((hi as u64) << 32) | lo as u64
}

/// Maps raw bits to a float in `[0, 1)`.
#[inline]
pub fn to_closed_open(bits: u64) -> f64 {
    (bits >> 11) as f64 * INV_2_53
}

/// Maps raw bits to a float in `(0, 1)`.
#[inline]
pub fn to_open_open(bits: u64) -> f64 {
    ((bits >> 12) as f64 + 0.5) * INV_2_52
}

/// Maps raw bits to a float in `(0, 1]`.
#[inline]
pub fn to_open_closed(bits: u64) -> f64 {
    ((bits >> 11) + 1) as f64 * INV_2_53
}

/// Maps raw bits to a float in `[0, 1]`.
#[inline]
pub fn to_closed_closed(bits: u64) -> f64 {
    (bits >> 11) as f64 / 9007199254740991.0
}
