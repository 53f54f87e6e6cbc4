//! The raw-bits primitive every other generator is built on.

use super::Random;
use crate::engine::EngineState;
use crate::utils::converter::join_words;

/// Generator of uniformly distributed `u64` values straight from the engine.
///
/// One draw advances a xorshift128 engine by two steps: the first word
/// becomes the high half of the result and the second the low half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawBits;

/// Returns the raw-bits generator.
pub const fn raw_bits() -> RawBits {
    RawBits
}

impl Random for RawBits {
    type Output = u64;

    #[inline]
    fn next(&self, state: EngineState) -> (u64, EngineState) {
        let (hi, state) = state.next_word();
        let (lo, state) = state.next_word();
        (join_words(hi, lo), state)
    }
}
