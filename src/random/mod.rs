//! Composable random generators.
//!
//! A generator is a pure value describing "a random `T` given an engine
//! state". Drawing from it with a state yields the value and the successor
//! state; nothing is mutated. Generators are combined with [`Random::map`]
//! and [`Random::bind`], which thread the state from one draw into the next
//! strictly left to right.
//!
//! ```
//! use xorgen::{default_state, get, next, raw_bits, Random};
//!
//! let g = raw_bits().bind(|x| raw_bits().map(move |y| (x ^ y).wrapping_add(1)));
//!
//! let (x, s1) = next(&raw_bits(), default_state());
//! let (y, _) = next(&raw_bits(), s1);
//! assert_eq!(get(&g, default_state()), (x ^ y).wrapping_add(1));
//! ```

pub mod combinators;
pub mod raw_bits;

use crate::engine::EngineState;

pub use combinators::{Bind, Draws, FromFn, List, Map, Pure, Zip};
pub use raw_bits::{raw_bits, RawBits};

/// Boxed generator, for composing generators of different concrete types.
pub type BoxedRandom<'a, T> = Box<dyn Random<Output = T> + 'a>;

/// A pure function from an engine state to a value and the next state.
///
/// Implementations must be deterministic: the same generator applied to the
/// same state always returns the same `(value, state)` pair.
pub trait Random {
    /// Type of the values this generator produces.
    type Output;

    /// Draws one value, returning it with the successor state.
    fn next(&self, state: EngineState) -> (Self::Output, EngineState);

    /// Draws one value and discards the successor state.
    fn get(&self, state: EngineState) -> Self::Output {
        self.next(state).0
    }

    /// Transforms every produced value with `f`, leaving the state as the
    /// underlying draw left it.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Feeds every produced value into `f` and draws from the generator it
    /// returns, starting from the state this generator left behind.
    fn bind<G, F>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        G: Random,
        F: Fn(Self::Output) -> G,
    {
        Bind::new(self, f)
    }

    /// Draws from `self`, then from `other`, and pairs the results.
    fn zip<G>(self, other: G) -> Zip<Self, G>
    where
        Self: Sized,
        G: Random,
    {
        Zip::new(self, other)
    }

    /// Draws `len` values in sequence and collects them.
    fn list(self, len: usize) -> List<Self>
    where
        Self: Sized,
    {
        List::new(self, len)
    }

    /// Returns an endless iterator of draws starting at `state`.
    fn draws(self, state: EngineState) -> Draws<Self>
    where
        Self: Sized,
    {
        Draws::new(self, state)
    }

    /// Erases the concrete type of this generator.
    fn boxed<'a>(self) -> BoxedRandom<'a, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<G: Random + ?Sized> Random for &G {
    type Output = G::Output;

    #[inline]
    fn next(&self, state: EngineState) -> (Self::Output, EngineState) {
        (**self).next(state)
    }
}

impl<G: Random + ?Sized> Random for Box<G> {
    type Output = G::Output;

    #[inline]
    fn next(&self, state: EngineState) -> (Self::Output, EngineState) {
        (**self).next(state)
    }
}

/// Draws once from `generator`, returning the value and the next state.
pub fn next<G: Random + ?Sized>(generator: &G, state: EngineState) -> (G::Output, EngineState) {
    generator.next(state)
}

/// Draws once from `generator` and returns only the value.
pub fn get<G: Random + ?Sized>(generator: &G, state: EngineState) -> G::Output {
    generator.next(state).0
}

/// A generator that always yields `value` and leaves the state untouched.
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Pairs the draws of `a` and `b`, drawing `a` first.
pub fn zip<A: Random, B: Random>(a: A, b: B) -> Zip<A, B> {
    Zip::new(a, b)
}

/// Lifts a state-threading closure into a generator.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(EngineState) -> (T, EngineState),
{
    FromFn::new(f)
}
