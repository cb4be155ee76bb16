//! Input-source capability.
//!
//! The reduction engine does not care what shape its input has; it only
//! needs the input to know how to push its own elements through a reducer.
//! That capability is the [`Source`] trait. Anything iterable gets it for
//! free via the blanket implementation (the engine's pull loop); types that
//! own a more direct fold can implement it themselves and the engine
//! delegates to them. Callers cannot tell the two paths apart.
//!
//! A value that is neither iterable nor fold-capable simply does not
//! implement `Source`, so "argument not a valid collection" is a compile
//! error rather than a runtime failure.

use crate::reducer::Reducer;
use crate::step::Step;

/// An input that can drive a [`Reducer`] over its elements.
///
/// `drive` folds every element into `acc` in source order, stopping the
/// moment any step returns [`Step::Stop`] and returning that `Stop`
/// untouched. The returned tag tells the caller whether the source was
/// exhausted (`Continue`) or cut short (`Stop`); either way the payload is
/// the accumulator as of the last step taken.
///
/// Every `IntoIterator` is a `Source` already. Implement this directly only
/// for types with a native fold the pull loop can't see, and honor the same
/// contract: stop on `Stop`, touch no further elements after it.
///
/// # Example: a fold-capable, non-iterable source
///
/// ```
/// use xduce::{Reducer, Source, Step};
///
/// /// The integers `1..=n`, generated rather than stored.
/// struct OneTo(u64);
///
/// impl Source<u64> for OneTo {
///     fn drive<R>(self, reducer: &mut R, mut acc: R::Acc) -> Step<R::Acc>
///     where
///         R: Reducer<u64>,
///     {
///         for i in 1..=self.0 {
///             match reducer.step(acc, i) {
///                 Step::Continue(next) => acc = next,
///                 stopped @ Step::Stop(_) => return stopped,
///             }
///         }
///         Step::Continue(acc)
///     }
/// }
///
/// let mut sum = xduce::from_fn(|| 0u64, |a, b| a + b);
/// assert_eq!(xduce::reduce(&mut sum, OneTo(4)), 10);
/// ```
pub trait Source<T> {
    /// Fold this source's elements into `acc` via `reducer`.
    fn drive<R>(self, reducer: &mut R, acc: R::Acc) -> Step<R::Acc>
    where
        R: Reducer<T>;
}

impl<I> Source<I::Item> for I
where
    I: IntoIterator,
{
    fn drive<R>(self, reducer: &mut R, mut acc: R::Acc) -> Step<R::Acc>
    where
        R: Reducer<I::Item>,
    {
        for item in self {
            match reducer.step(acc, item) {
                Step::Continue(next) => acc = next,
                // Stop pulling immediately; the iterator is dropped here
                // with whatever it had left unconsumed.
                stopped @ Step::Stop(_) => return stopped,
            }
        }
        Step::Continue(acc)
    }
}
