//! Bit-width helpers for bitmask rejection sampling.

/// Returns the number of bits required to represent `num`.
///
/// # Parameters
/// - `num`: The number to analyze.
///
/// # Returns
/// The number of significant bits; `0` for `0`.
pub(crate) const fn bits_required(num: u64) -> u32 {
    u64::BITS - num.leading_zeros()
}

/// Returns the smallest all-ones mask that covers `num`.
///
/// Masking a uniform `u64` with this value yields a uniform integer in
/// `[0, mask]`, which is at most twice the width of `[0, num]`, so
/// rejection sampling accepts at least half of all draws.
pub(crate) const fn mask_for(num: u64) -> u64 {
    match bits_required(num) {
        0 => 0,
        bits => u64::MAX >> (u64::BITS - bits),
    }
}
