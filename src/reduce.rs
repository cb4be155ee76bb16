//! The reduction engine.
//!
//! Two entry points: [`reduce`] seeds itself from the reducer's
//! [`empty`](crate::Reducer::empty) form, [`reduce_seeded`] takes the seed
//! from the caller. Both drive the reducer over the source via its
//! [`Source`] capability and always hand back a bare accumulator; the
//! [`Step`](crate::Step) tag never escapes the engine.

use crate::reducer::Reducer;
use crate::source::Source;

/// Reduce `source` with `reducer`, seeding from `reducer.empty()`.
///
/// Equivalent to [`reduce_seeded`] with the reducer's own identity
/// accumulator as the seed.
///
/// # Example
///
/// ```
/// use xduce::{reduce, reducers::Sum};
///
/// let mut sum = Sum::<i32>::new();
/// assert_eq!(reduce(&mut sum, vec![1, 2, 3]), 6);
/// ```
pub fn reduce<T, R, S>(reducer: &mut R, source: S) -> R::Acc
where
    R: Reducer<T>,
    S: Source<T>,
{
    let seed = reducer.empty();
    reduce_seeded(reducer, source, seed)
}

/// Reduce `source` with `reducer`, starting from `seed`.
///
/// Elements are folded in source order. If any step signals termination,
/// no further elements are pulled and the accumulator captured at that step
/// is returned; otherwise the source runs to exhaustion. Either way the
/// result is unwrapped before it is returned.
///
/// # Example
///
/// ```
/// use xduce::{reduce_seeded, from_fn};
///
/// let mut appender = from_fn(Vec::new, |mut acc: Vec<i32>, x| {
///     acc.push(x);
///     acc
/// });
/// assert_eq!(reduce_seeded(&mut appender, vec![2, 3], vec![1]), vec![1, 2, 3]);
/// ```
pub fn reduce_seeded<T, R, S>(reducer: &mut R, source: S, seed: R::Acc) -> R::Acc
where
    R: Reducer<T>,
    S: Source<T>,
{
    source.drive(reducer, seed).into_inner()
}
