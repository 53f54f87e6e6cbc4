//! Generator adapters returned by the [`Random`] combinator methods.

use std::fmt;

use super::Random;
use crate::engine::EngineState;

/// Generator returned by [`Random::map`].
#[derive(Clone)]
pub struct Map<G, F> {
    inner: G,
    f: F,
}

impl<G, F> Map<G, F> {
    pub(crate) fn new(inner: G, f: F) -> Self {
        Map { inner, f }
    }
}

impl<G: fmt::Debug, F> fmt::Debug for Map<G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}

impl<U, G, F> Random for Map<G, F>
where
    G: Random,
    F: Fn(G::Output) -> U,
{
    type Output = U;

    #[inline]
    fn next(&self, state: EngineState) -> (U, EngineState) {
        let (value, state) = self.inner.next(state);
        ((self.f)(value), state)
    }
}

/// Generator returned by [`Random::bind`].
#[derive(Clone)]
pub struct Bind<G, F> {
    inner: G,
    f: F,
}

impl<G, F> Bind<G, F> {
    pub(crate) fn new(inner: G, f: F) -> Self {
        Bind { inner, f }
    }
}

impl<G: fmt::Debug, F> fmt::Debug for Bind<G, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bind").field("inner", &self.inner).finish()
    }
}

impl<G, G2, F> Random for Bind<G, F>
where
    G: Random,
    G2: Random,
    F: Fn(G::Output) -> G2,
{
    type Output = G2::Output;

    #[inline]
    fn next(&self, state: EngineState) -> (G2::Output, EngineState) {
        let (value, state) = self.inner.next(state);
        (self.f)(value).next(state)
    }
}

/// Generator returned by [`pure`](super::pure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub(crate) fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<T: Clone> Random for Pure<T> {
    type Output = T;

    #[inline]
    fn next(&self, state: EngineState) -> (T, EngineState) {
        (self.value.clone(), state)
    }
}

/// Generator returned by [`Random::zip`] and [`zip`](super::zip).
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

impl<A: Random, B: Random> Random for Zip<A, B> {
    type Output = (A::Output, B::Output);

    #[inline]
    fn next(&self, state: EngineState) -> (Self::Output, EngineState) {
        let (a, state) = self.a.next(state);
        let (b, state) = self.b.next(state);
        ((a, b), state)
    }
}

/// Generator returned by [`Random::list`].
#[derive(Debug, Clone)]
pub struct List<G> {
    inner: G,
    len: usize,
}

impl<G> List<G> {
    pub(crate) fn new(inner: G, len: usize) -> Self {
        List { inner, len }
    }
}

impl<G: Random> Random for List<G> {
    type Output = Vec<G::Output>;

    fn next(&self, mut state: EngineState) -> (Self::Output, EngineState) {
        let mut values = Vec::with_capacity(self.len);
        for _ in 0..self.len {
            let (value, next) = self.inner.next(state);
            values.push(value);
            state = next;
        }
        (values, state)
    }
}

/// Generator returned by [`from_fn`](super::from_fn).
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> FromFn<F> {
    pub(crate) fn new(f: F) -> Self {
        FromFn { f }
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F> Random for FromFn<F>
where
    F: Fn(EngineState) -> (T, EngineState),
{
    type Output = T;

    #[inline]
    fn next(&self, state: EngineState) -> (T, EngineState) {
        (self.f)(state)
    }
}

/// Endless iterator of draws, returned by [`Random::draws`].
///
/// Each call to `next` draws once and keeps the successor state, which
/// [`state`](Self::state) exposes so a sequence can be resumed elsewhere.
#[derive(Debug, Clone)]
pub struct Draws<G> {
    generator: G,
    state: EngineState,
}

impl<G> Draws<G> {
    pub(crate) fn new(generator: G, state: EngineState) -> Self {
        Draws { generator, state }
    }

    /// The state the next draw will start from.
    pub fn state(&self) -> EngineState {
        self.state
    }
}

impl<G: Random> Iterator for Draws<G> {
    type Item = G::Output;

    #[inline]
    fn next(&mut self) -> Option<G::Output> {
        let (value, state) = self.generator.next(self.state);
        self.state = state;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
