//! Generators for common distributions, built on [`raw_bits`].
//!
//! Parameters are validated when the generator is built; drawing from a
//! generator returned here never fails.

use std::f64::consts::TAU;

use crate::error::RandomError;
use crate::random::{from_fn, raw_bits, Random};
use crate::utils::bits::mask_for;
use crate::utils::converter::{to_closed_closed, to_closed_open, to_open_closed, to_open_open};

/// Floats uniformly distributed in `[0, 1)`.
pub fn closed_open() -> impl Random<Output = f64> + Clone {
    raw_bits().map(to_closed_open)
}

/// Floats uniformly distributed in `(0, 1)`.
pub fn open_open() -> impl Random<Output = f64> + Clone {
    raw_bits().map(to_open_open)
}

/// Floats uniformly distributed in `(0, 1]`.
pub fn open_closed() -> impl Random<Output = f64> + Clone {
    raw_bits().map(to_open_closed)
}

/// Floats uniformly distributed in `[0, 1]`.
pub fn closed_closed() -> impl Random<Output = f64> + Clone {
    raw_bits().map(to_closed_closed)
}

/// Unsigned integers uniformly distributed in `[0, max]`.
///
/// Masks each raw draw down to the bit width of `max` and rejects values
/// above it, so every accepted draw is unbiased.
pub(crate) fn up_to(max: u64) -> impl Random<Output = u64> + Clone {
    let mask = mask_for(max);
    from_fn(move |mut state| loop {
        let (bits, next) = raw_bits().next(state);
        state = next;
        let candidate = bits & mask;
        if candidate <= max {
            return (candidate, state);
        }
    })
}

/// Floats uniformly distributed in `[lower, upper)`.
///
/// `lower == upper` always yields `lower`. Draws that round up to `upper`
/// are rejected and redrawn.
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] if either bound is not finite,
/// if `lower > upper`, or if the width of the range overflows.
pub fn uniform(lower: f64, upper: f64) -> Result<impl Random<Output = f64> + Clone, RandomError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(RandomError::InvalidParameter("uniform bounds must be finite"));
    }
    if lower > upper {
        return Err(RandomError::InvalidParameter("lower bound exceeds upper bound"));
    }
    let width = upper - lower;
    if !width.is_finite() {
        return Err(RandomError::InvalidParameter("uniform range is too wide"));
    }
    Ok(from_fn(move |mut state| loop {
        let (u, next) = closed_open().next(state);
        state = next;
        let value = lower + width * u;
        if value < upper || width == 0.0 {
            return (value, state);
        }
    }))
}

/// Integers uniformly distributed in `[lower, upper]`, both inclusive.
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] if `lower > upper`.
///
/// # Examples
///
/// ```
/// use xorgen::distributions::uniform_int;
/// use xorgen::{default_state, Random};
///
/// let die = uniform_int(1, 6).unwrap();
/// let roll = die.get(default_state());
/// assert!((1..=6).contains(&roll));
/// ```
pub fn uniform_int(
    lower: i64,
    upper: i64,
) -> Result<impl Random<Output = i64> + Clone, RandomError> {
    if lower > upper {
        return Err(RandomError::InvalidParameter("lower bound exceeds upper bound"));
    }
    let span = upper.abs_diff(lower);
    Ok(up_to(span).map(move |offset| lower.wrapping_add_unsigned(offset)))
}

/// Booleans that are `true` with probability `p`.
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] if `p` is NaN or outside `[0, 1]`.
pub fn bernoulli(p: f64) -> Result<impl Random<Output = bool> + Clone, RandomError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(RandomError::InvalidParameter("probability must lie in [0, 1]"));
    }
    Ok(closed_open().map(move |u| u < p))
}

/// Fair coin: `true` and `false` with equal probability.
pub fn flip_coin() -> impl Random<Output = bool> + Clone {
    raw_bits().map(|bits| bits >> 63 == 1)
}

/// Normally distributed floats (Box-Muller transform).
///
/// Each draw consumes two raw values.
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] if `mean` or `sd` is not
/// finite, or if `sd` is negative.
pub fn normal(mean: f64, sd: f64) -> Result<impl Random<Output = f64> + Clone, RandomError> {
    if !mean.is_finite() || !sd.is_finite() {
        return Err(RandomError::InvalidParameter("normal parameters must be finite"));
    }
    if sd < 0.0 {
        return Err(RandomError::InvalidParameter("standard deviation must be non-negative"));
    }
    Ok(open_open().zip(closed_open()).map(move |(u1, u2)| {
        let radius = (-2.0 * u1.ln()).sqrt();
        mean + sd * radius * (TAU * u2).cos()
    }))
}

/// Exponentially distributed floats with the given rate (inverse CDF).
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] unless `rate` is finite and
/// strictly positive.
pub fn exponential(rate: f64) -> Result<impl Random<Output = f64> + Clone, RandomError> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(RandomError::InvalidParameter("rate must be finite and positive"));
    }
    Ok(open_closed().map(move |u| -u.ln() / rate))
}
