//! Engine states and seeding.
//!
//! An [`EngineState`] is an immutable snapshot of a PRNG. Generators consume
//! one and hand back its successor; nothing is ever updated in place, so a
//! saved state replays the same values forever.

pub mod xorshift;

use std::fmt;

use tracing::{debug, warn};

use crate::error::RandomError;

pub use xorshift::{XorshiftSeed, XorshiftState, XORSHIFT_SEED_WORDS};

/// Seed behind [`default_state`]: Marsaglia's xorshift128 reference seed.
pub const DEFAULT_SEED: XorshiftSeed = XorshiftSeed::new(123456789, 362436069, 521288629, 88675123);

/// Selects the state-transition function of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// 128-bit xorshift over four `u32` words.
    Xorshift,
}

impl Algorithm {
    /// Number of `u32` words this algorithm needs as seed material.
    pub const fn seed_words(&self) -> usize {
        match self {
            Algorithm::Xorshift => XORSHIFT_SEED_WORDS,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Xorshift => write!(f, "xorshift128"),
        }
    }
}

/// Seed material accepted by [`create_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// A typed xorshift128 seed.
    Xorshift(XorshiftSeed),
    /// Untyped words, checked against the algorithm's arity.
    Words(Vec<u32>),
}

impl From<XorshiftSeed> for Seed {
    fn from(seed: XorshiftSeed) -> Self {
        Seed::Xorshift(seed)
    }
}

impl From<(u32, u32, u32, u32)> for Seed {
    fn from(words: (u32, u32, u32, u32)) -> Self {
        Seed::Xorshift(words.into())
    }
}

impl From<Vec<u32>> for Seed {
    fn from(words: Vec<u32>) -> Self {
        Seed::Words(words)
    }
}

impl From<&[u32]> for Seed {
    fn from(words: &[u32]) -> Self {
        Seed::Words(words.to_vec())
    }
}

/// Immutable snapshot of an engine, tagged with the algorithm that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    Xorshift(XorshiftState),
}

impl EngineState {
    /// The algorithm this state belongs to.
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            EngineState::Xorshift(_) => Algorithm::Xorshift,
        }
    }

    /// Advances the engine by 32 bits of output.
    #[inline]
    pub(crate) fn next_word(self) -> (u32, EngineState) {
        match self {
            EngineState::Xorshift(s) => {
                let (word, next) = s.step();
                (word, EngineState::Xorshift(next))
            }
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        default_state()
    }
}

/// Builds a fresh engine state for `algorithm` from `seed`.
///
/// An all-zero xorshift seed is accepted but never escapes zero; it is
/// reported with a warning and left to the caller.
///
/// # Errors
/// Returns [`RandomError::InvalidSeed`] if the seed has the wrong number of
/// words for `algorithm`.
///
/// # Examples
///
/// ```
/// use xorgen::{create_state, Algorithm};
///
/// let seed = (123456789, 362436069, 521288629, 88675123);
/// let state = create_state(Algorithm::Xorshift, seed).unwrap();
/// assert_eq!(state.algorithm(), Algorithm::Xorshift);
///
/// assert!(create_state(Algorithm::Xorshift, vec![1, 2, 3]).is_err());
/// ```
pub fn create_state(
    algorithm: Algorithm,
    seed: impl Into<Seed>,
) -> Result<EngineState, RandomError> {
    let state = match (algorithm, seed.into()) {
        (Algorithm::Xorshift, Seed::Xorshift(seed)) => xorshift_state(seed),
        (Algorithm::Xorshift, Seed::Words(words)) => {
            xorshift_state(XorshiftSeed::try_from(words.as_slice())?)
        }
    };
    debug!(%algorithm, "engine state created");
    Ok(state)
}

fn xorshift_state(seed: XorshiftSeed) -> EngineState {
    if seed.is_degenerate() {
        warn!("all-zero xorshift seed: the engine will only ever emit zero");
    }
    EngineState::Xorshift(XorshiftState::from_seed(seed))
}

/// Returns the state built from [`DEFAULT_SEED`].
pub const fn default_state() -> EngineState {
    EngineState::Xorshift(XorshiftState::from_seed(DEFAULT_SEED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber that records every event, returning the log.
    fn capture_log(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        log.contents()
    }

    #[test]
    fn test_create_state_typed_seed() {
        let state = create_state(Algorithm::Xorshift, DEFAULT_SEED).unwrap();
        assert_eq!(state, default_state());
    }

    #[test]
    fn test_create_state_words() {
        let words = vec![123456789, 362436069, 521288629, 88675123];
        let state = create_state(Algorithm::Xorshift, words).unwrap();
        assert_eq!(state, default_state());
    }

    #[test]
    fn test_create_state_wrong_arity() {
        let err = create_state(Algorithm::Xorshift, vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            RandomError::InvalidSeed {
                algorithm: Algorithm::Xorshift,
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_create_state_accepts_zero_seed() {
        let state = create_state(Algorithm::Xorshift, (0, 0, 0, 0)).unwrap();
        let (word, next) = state.next_word();
        assert_eq!(word, 0);
        assert_eq!(next, state);
    }

    #[test]
    fn test_zero_seed_logs_warning() {
        let log = capture_log(|| {
            create_state(Algorithm::Xorshift, (0, 0, 0, 0)).unwrap();
        });
        assert!(log.contains("WARN"), "no warning in log: {}", log);
        assert!(log.contains("all-zero xorshift seed"), "unexpected log: {}", log);
    }

    #[test]
    fn test_nonzero_seed_logs_no_warning() {
        let log = capture_log(|| {
            create_state(Algorithm::Xorshift, (0, 0, 0, 1)).unwrap();
        });
        assert!(!log.contains("WARN"), "unexpected warning: {}", log);
        assert!(log.contains("engine state created"), "missing debug event: {}", log);
    }

    #[test]
    fn test_algorithm_tag() {
        assert_eq!(default_state().algorithm(), Algorithm::Xorshift);
        assert_eq!(Algorithm::Xorshift.seed_words(), 4);
        assert_eq!(Algorithm::Xorshift.to_string(), "xorshift128");
    }

    #[test]
    fn test_default_impl_matches_default_state() {
        assert_eq!(EngineState::default(), default_state());
    }

    #[test]
    fn test_next_word_is_deterministic() {
        let state = default_state();
        assert_eq!(state.next_word(), state.next_word());
        assert_eq!(state.next_word().0, 3701687786);
    }
}
