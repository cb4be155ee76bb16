//! The reducer contract.
//!
//! A reducer is the typed form of a combining function with three arities:
//! produce an empty accumulator, complete a finished accumulator, and fold
//! one element into an accumulator. The three forms become three named
//! operations on one trait, and the combine form returns a [`Step`] so any
//! reducer can signal early termination.

use crate::step::Step;

/// A combining function over elements of type `T`.
///
/// Reducers are the terminal consumers of a reduction and the building
/// blocks transducers wrap. The receiver is `&mut self` so a reducer (or a
/// transducer-produced wrapper such as [`take`](crate::take)'s) can carry
/// per-application state in plain fields.
///
/// # Contract
///
/// - [`empty`](Reducer::empty) produces the identity accumulator for this
///   reducer's semantics (empty vec, zero, ...). Wrapper reducers delegate
///   to their downstream reducer rather than inventing their own.
/// - [`complete`](Reducer::complete) is called at most once, after the last
///   `step`. The default returns the accumulator unchanged; reducers that
///   buffer may flush here.
/// - [`step`](Reducer::step) folds one element in. The engine guarantees it
///   is never called again after any reducer in the chain returned
///   [`Step::Stop`].
///
/// # Example
///
/// ```
/// use xduce::{Reducer, Step};
///
/// struct Product;
///
/// impl Reducer<u64> for Product {
///     type Acc = u64;
///
///     fn empty(&mut self) -> u64 { 1 }
///
///     fn step(&mut self, acc: u64, item: u64) -> Step<u64> {
///         Step::Continue(acc * item)
///     }
/// }
///
/// let mut r = Product;
/// assert_eq!(xduce::reduce(&mut r, vec![2u64, 3, 4]), 24);
/// ```
pub trait Reducer<T> {
    /// The accumulator this reducer builds.
    type Acc;

    /// Produce the identity/empty accumulator (the zero-arity form).
    fn empty(&mut self) -> Self::Acc;

    /// Finish a reduction (the one-arity form). Identity by default.
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        acc
    }

    /// Fold `item` into `acc` (the two-arity form).
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;
}

impl<T, R: Reducer<T> + ?Sized> Reducer<T> for &mut R {
    type Acc = R::Acc;

    fn empty(&mut self) -> Self::Acc {
        (**self).empty()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        (**self).complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        (**self).step(acc, item)
    }
}

/// A [`Reducer`] assembled from two closures. Built by [`from_fn`].
pub struct FnReducer<E, F> {
    empty: E,
    combine: F,
}

/// Lift a plain binary combine function into a full [`Reducer`].
///
/// `empty` is invoked each time an identity accumulator is requested;
/// `combine` folds one element in and never terminates early. This is the
/// typed form of giving an ordinary binary function the missing zero- and
/// one-arity behaviors: the zero-arity form calls `empty`, the one-arity
/// form (the default [`Reducer::complete`]) returns its argument unchanged,
/// and the two-arity form is `combine`.
///
/// # Example
///
/// ```
/// use xduce::{from_fn, reduce};
///
/// let mut sum = from_fn(|| 0, |a, b: i32| a + b);
/// assert_eq!(reduce(&mut sum, vec![1, 2, 3]), 6);
/// ```
pub fn from_fn<A, T, E, F>(empty: E, combine: F) -> FnReducer<E, F>
where
    E: FnMut() -> A,
    F: FnMut(A, T) -> A,
{
    FnReducer { empty, combine }
}

impl<A, T, E, F> Reducer<T> for FnReducer<E, F>
where
    E: FnMut() -> A,
    F: FnMut(A, T) -> A,
{
    type Acc = A;

    fn empty(&mut self) -> A {
        (self.empty)()
    }

    fn step(&mut self, acc: A, item: T) -> Step<A> {
        Step::Continue((self.combine)(acc, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_covers_all_three_arities() {
        let mut r = from_fn(|| 0, |a, b: i32| a + b);
        assert_eq!(r.empty(), 0);
        assert_eq!(r.complete(41), 41);
        assert_eq!(r.step(1, 2), Step::Continue(3));
    }

    #[test]
    fn from_fn_empty_is_invoked_per_request() {
        let mut calls = 0;
        let mut r = from_fn(
            || {
                calls += 1;
                Vec::new()
            },
            |mut acc: Vec<i32>, x| {
                acc.push(x);
                acc
            },
        );
        let _ = r.empty();
        let _ = r.empty();
        drop(r);
        assert_eq!(calls, 2);
    }
}
