//! Xorshift128 engine (Marsaglia, 2003).
//!
//! Four 32-bit words of state, advanced with three shift/xor mixes per step.
//! Period is 2^128 - 1 for every non-zero state. The all-zero state is a
//! fixed point: it maps to itself forever and only ever emits zero.

use crate::error::RandomError;

use super::Algorithm;

/// Number of `u32` words in a xorshift128 seed.
pub const XORSHIFT_SEED_WORDS: usize = 4;

/// Four-word xorshift128 seed with named words.
///
/// Seeds are taken verbatim. Callers are responsible for avoiding the
/// all-zero seed, see [`is_degenerate`](Self::is_degenerate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorshiftSeed {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
}

impl XorshiftSeed {
    /// Creates a seed from its four words, in order.
    pub const fn new(x: u32, y: u32, z: u32, w: u32) -> Self {
        XorshiftSeed { x, y, z, w }
    }

    /// Returns `true` for the all-zero seed, which xorshift cannot escape.
    pub const fn is_degenerate(&self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0 && self.w == 0
    }
}

impl From<(u32, u32, u32, u32)> for XorshiftSeed {
    fn from((x, y, z, w): (u32, u32, u32, u32)) -> Self {
        XorshiftSeed::new(x, y, z, w)
    }
}

impl From<[u32; XORSHIFT_SEED_WORDS]> for XorshiftSeed {
    fn from([x, y, z, w]: [u32; XORSHIFT_SEED_WORDS]) -> Self {
        XorshiftSeed::new(x, y, z, w)
    }
}

impl TryFrom<&[u32]> for XorshiftSeed {
    type Error = RandomError;

    /// Builds a seed from exactly four words.
    ///
    /// # Errors
    /// Returns [`RandomError::InvalidSeed`] if `words.len() != 4`.
    fn try_from(words: &[u32]) -> Result<Self, Self::Error> {
        match *words {
            [x, y, z, w] => Ok(XorshiftSeed::new(x, y, z, w)),
            _ => Err(RandomError::InvalidSeed {
                algorithm: Algorithm::Xorshift,
                expected: XORSHIFT_SEED_WORDS,
                actual: words.len(),
            }),
        }
    }
}

/// Immutable xorshift128 state snapshot.
///
/// Obtained from a seed with `From`, or through
/// [`create_state`](super::create_state) wrapped in an
/// [`EngineState`](super::EngineState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorshiftState {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl XorshiftState {
    pub(crate) const fn from_seed(seed: XorshiftSeed) -> Self {
        XorshiftState {
            x: seed.x,
            y: seed.y,
            z: seed.z,
            w: seed.w,
        }
    }

    /// Returns the four state words in order `(x, y, z, w)`.
    pub const fn words(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.z, self.w)
    }

    /// Advances the engine by one step.
    ///
    /// Returns the newly computed word and the successor state; `self` is
    /// left untouched.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> (u32, XorshiftState) {
        let t = self.x ^ (self.x << 11);
        let w = self.w ^ (self.w >> 19) ^ (t ^ (t >> 8));
        (
            w,
            XorshiftState {
                x: self.y,
                y: self.z,
                z: self.w,
                w,
            },
        )
    }
}

impl From<XorshiftSeed> for XorshiftState {
    fn from(seed: XorshiftSeed) -> Self {
        XorshiftState::from_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: XorshiftSeed = XorshiftSeed::new(123456789, 362436069, 521288629, 88675123);

    #[test]
    fn test_reference_sequence() {
        // Marsaglia's published outputs for the reference seed.
        let expected: [u32; 4] = [3701687786, 458299110, 2500872618, 3633119408];
        let mut state = XorshiftState::from_seed(REFERENCE);
        for (i, &exp) in expected.iter().enumerate() {
            let (word, next) = state.step();
            assert_eq!(word, exp, "step {} mismatch", i);
            state = next;
        }
    }

    #[test]
    fn test_step_shifts_words() {
        let state = XorshiftState::from_seed(REFERENCE);
        let (word, next) = state.step();
        assert_eq!(next.words(), (362436069, 521288629, 88675123, word));
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let state = XorshiftState::from_seed(REFERENCE);
        let _ = state.step();
        assert_eq!(state.words(), (123456789, 362436069, 521288629, 88675123));
    }

    #[test]
    fn test_all_zero_state_is_fixed_point() {
        let zero = XorshiftState::from_seed(XorshiftSeed::new(0, 0, 0, 0));
        let (word, next) = zero.step();
        assert_eq!(word, 0);
        assert_eq!(next, zero);
    }

    #[test]
    fn test_is_degenerate() {
        assert!(XorshiftSeed::new(0, 0, 0, 0).is_degenerate());
        assert!(!XorshiftSeed::new(0, 0, 0, 1).is_degenerate());
        assert!(!REFERENCE.is_degenerate());
    }

    #[test]
    fn test_try_from_slice() {
        let words: &[u32] = &[1, 2, 3, 4];
        assert_eq!(
            XorshiftSeed::try_from(words),
            Ok(XorshiftSeed::new(1, 2, 3, 4))
        );
    }

    #[test]
    fn test_try_from_slice_wrong_arity() {
        for words in [&[][..], &[1, 2, 3][..], &[1, 2, 3, 4, 5][..]] {
            assert_eq!(
                XorshiftSeed::try_from(words),
                Err(RandomError::InvalidSeed {
                    algorithm: Algorithm::Xorshift,
                    expected: 4,
                    actual: words.len(),
                })
            );
        }
    }

    #[test]
    fn test_seed_from_tuple_and_array() {
        let a = XorshiftSeed::from((5, 6, 7, 8));
        let b = XorshiftSeed::from([5, 6, 7, 8]);
        assert_eq!(a, b);
    }
}
