//! Generators over collections: choice, sampling and shuffling.

use crate::distributions::up_to;
use crate::engine::EngineState;
use crate::error::RandomError;
use crate::random::{from_fn, Random};

/// Picks one element of `items` uniformly.
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] if `items` is empty.
pub fn choose<T: Clone>(items: &[T]) -> Result<impl Random<Output = T> + Clone, RandomError> {
    let last = match items.len().checked_sub(1) {
        Some(last) => last as u64,
        None => return Err(RandomError::InvalidParameter("cannot choose from an empty slice")),
    };
    let items = items.to_vec();
    Ok(up_to(last).map(move |index| items[index as usize].clone()))
}

/// Draws `count` distinct elements of `items`, in the order they were drawn.
///
/// # Errors
/// Returns [`RandomError::InvalidParameter`] if `count > items.len()`.
pub fn sample<T: Clone>(
    count: usize,
    items: &[T],
) -> Result<impl Random<Output = Vec<T>> + Clone, RandomError> {
    if count > items.len() {
        return Err(RandomError::InvalidParameter("sample size exceeds the number of items"));
    }
    let items = items.to_vec();
    Ok(from_fn(move |state| {
        let mut pool = items.clone();
        let state = partial_shuffle(&mut pool, count, state);
        pool.truncate(count);
        (pool, state)
    }))
}

/// Uniformly random permutations of `items` (Fisher-Yates).
///
/// # Examples
///
/// ```
/// use xorgen::utility::shuffle;
/// use xorgen::{default_state, Random};
///
/// let mut deck = shuffle((1..=10).collect::<Vec<u32>>()).get(default_state());
/// deck.sort();
/// assert_eq!(deck, (1..=10).collect::<Vec<u32>>());
/// ```
pub fn shuffle<T: Clone>(items: Vec<T>) -> impl Random<Output = Vec<T>> + Clone {
    from_fn(move |state| {
        let mut permuted = items.clone();
        let len = permuted.len();
        let state = partial_shuffle(&mut permuted, len, state);
        (permuted, state)
    })
}

/// Moves `count` uniformly chosen elements to the front of `items`.
///
/// Swaps position `i` with a random position in `i..len` for each `i` below
/// `count`, threading `state` through every index draw.
fn partial_shuffle<T>(items: &mut [T], count: usize, mut state: EngineState) -> EngineState {
    let len = items.len();
    for i in 0..count.min(len.saturating_sub(1)) {
        let (offset, next) = up_to((len - 1 - i) as u64).next(state);
        items.swap(i, i + offset as usize);
        state = next;
    }
    state
}
