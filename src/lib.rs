//! Composable random generators over an immutable xorshift128 engine.
//!
//! A generator is a value describing "a random `T` given an engine state".
//! Drawing from it with an [`EngineState`] returns the value and a new state;
//! the old state is never modified, so any saved state replays the same
//! sequence. Generators compose with [`Random::map`] and [`Random::bind`],
//! which thread the state through each step left to right.
//!
//! # Architecture
//!
//! ```text
//! EngineState (immutable xorshift128 snapshot, created by create_state)
//!     ↓ two 32-bit steps
//! RawBits     (u64 primitive generator)
//!     ↓ map / bind / zip / list
//! distributions, utility (floats, ranges, Bernoulli, normal, shuffle ...)
//! ```
//!
//! # Examples
//!
//! Seed an engine and draw two raw values in sequence:
//!
//! ```
//! use xorgen::{create_state, next, raw_bits, Algorithm};
//!
//! let seed = (123456789, 362436069, 521288629, 88675123);
//! let state = create_state(Algorithm::Xorshift, seed).unwrap();
//! let (r1, s1) = next(&raw_bits(), state);
//! let (r2, _) = next(&raw_bits(), s1);
//! assert_ne!(r1, r2);
//! ```
//!
//! Compose generators without threading the state by hand:
//!
//! ```
//! use xorgen::{default_state, get, raw_bits, Random};
//!
//! let g = raw_bits().map(|x| x.wrapping_add(1));
//! assert_eq!(
//!     get(&g, default_state()),
//!     get(&raw_bits(), default_state()).wrapping_add(1)
//! );
//! ```
//!
//! An all-zero xorshift seed is a fixed point of the engine and only ever
//! produces zero. [`create_state`] accepts it, but callers should avoid it.

#![deny(clippy::all)]

pub mod distributions;
pub mod engine;
pub mod error;
pub mod random;
pub mod utility;
pub mod utils;

pub use engine::{
    create_state, default_state, Algorithm, EngineState, Seed, XorshiftSeed, DEFAULT_SEED,
};
pub use error::RandomError;
pub use random::{from_fn, get, next, pure, raw_bits, zip, BoxedRandom, RawBits, Random};
