//! Transducer composition and the `transduce` orchestrator.
//!
//! A transducer is a value that turns one reducer into another. Composing
//! transducers therefore composes reducer-transformations, independent of
//! any particular input: the same composed pipeline can run over a `Vec`, a
//! range, or any other [`Source`](crate::Source).

use crate::reducer::Reducer;
use crate::reduce::reduce_seeded;
use crate::source::Source;

/// A transformation from a downstream reducer `R` to an upstream reducer.
///
/// Applying a transducer consumes it, and the produced reducer owns any
/// per-application state outright: applying two pipelines built from the
/// same description can never share a counter or buffer.
///
/// The "run now" form of a transducer (apply it to a reducer and
/// immediately drive the result over a collection) is [`transduce`].
pub trait Transducer<R> {
    /// The reducer produced by wrapping `R`.
    type Output;

    /// Wrap the downstream reducer, producing the upstream reducer.
    fn apply(self, next: R) -> Self::Output;
}

/// The transducer that changes nothing: `apply` returns the reducer it was
/// given. This is the composition of zero transducers, and what
/// [`compose!`](crate::compose!) expands to when called with no arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<R> Transducer<R> for Identity {
    type Output = R;

    fn apply(self, next: R) -> R {
        next
    }
}

/// Two transducers composed; see [`compose`].
#[derive(Clone, Copy, Debug)]
pub struct Comp<F, G> {
    outer: F,
    inner: G,
}

/// Compose two transducers.
///
/// `compose(f, g).apply(r)` is `f.apply(g.apply(r))`: `g` wraps the
/// downstream reducer first, then `f` wraps the result, so during the
/// reduction each element flows through `f`'s step logic first and `g`'s
/// second. Reading a `compose` chain left to right gives the order the data
/// sees the stages:
///
/// ```
/// use xduce::{compose, filter, map, transduce, reducers::Append};
///
/// let evens_doubled = compose(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 2));
/// let out = transduce(evens_doubled, Append::new(), vec![1, 2, 3, 4]);
/// assert_eq!(out, vec![4, 8]);
/// ```
///
/// For more than two stages, nest calls or use the variadic
/// [`compose!`](crate::compose!) macro. Composition is associative:
/// `compose(f, compose(g, h))` and `compose(compose(f, g), h)` build the
/// same reducer chain.
pub fn compose<F, G>(outer: F, inner: G) -> Comp<F, G> {
    Comp { outer, inner }
}

impl<F, G, R> Transducer<R> for Comp<F, G>
where
    G: Transducer<R>,
    F: Transducer<G::Output>,
{
    type Output = F::Output;

    fn apply(self, next: R) -> Self::Output {
        self.outer.apply(self.inner.apply(next))
    }
}

/// Compose any number of transducers, leftmost stage first.
///
/// `compose!()` is [`Identity`], `compose!(f)` is `f`, and
/// `compose!(f, g, h)` is `compose(f, compose(g, h))`.
///
/// ```
/// use xduce::{filter, map, take, transduce, reducers::Append};
///
/// let xf = xduce::compose!(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 2), take(1));
/// assert_eq!(transduce(xf, Append::new(), 1..100), vec![4]);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::Identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($f, $crate::compose!($($rest),+))
    };
}

/// Apply `transducer` to `reducer` and drive the result over `source`,
/// seeding from the chain's [`empty`](Reducer::empty) form.
///
/// This is the top-level entry point most callers use. The reducer chain is
/// built fresh for this call, runs to exhaustion or early termination, and
/// the final accumulator comes back unwrapped.
///
/// # Example
///
/// ```
/// use xduce::{map, transduce, reducers::Append};
///
/// let out = transduce(map(|x: i32| x * 2), Append::new(), vec![1, 2, 3]);
/// assert_eq!(out, vec![2, 4, 6]);
/// ```
pub fn transduce<T, X, R, S>(transducer: X, reducer: R, source: S) -> <X::Output as Reducer<T>>::Acc
where
    X: Transducer<R>,
    X::Output: Reducer<T>,
    S: Source<T>,
{
    let mut chain = transducer.apply(reducer);
    let seed = chain.empty();
    reduce_seeded(&mut chain, source, seed)
}

/// [`transduce`] with a caller-supplied seed instead of the chain's
/// [`empty`](Reducer::empty) form.
///
/// # Example
///
/// ```
/// use xduce::{map, transduce_seeded, reducers::Append};
///
/// let out = transduce_seeded(map(|x: i32| x * 2), Append::new(), vec![2, 3], vec![9]);
/// assert_eq!(out, vec![9, 4, 6]);
/// ```
pub fn transduce_seeded<T, X, R, S>(
    transducer: X,
    reducer: R,
    source: S,
    seed: <X::Output as Reducer<T>>::Acc,
) -> <X::Output as Reducer<T>>::Acc
where
    X: Transducer<R>,
    X::Output: Reducer<T>,
    S: Source<T>,
{
    let mut chain = transducer.apply(reducer);
    reduce_seeded(&mut chain, source, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::Append;
    use crate::transducers::map;

    #[test]
    fn identity_passes_the_reducer_through() {
        let out = transduce(Identity, Append::new(), vec![1, 2, 3]);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn empty_compose_macro_is_identity() {
        let out = transduce(compose!(), Append::new(), vec![1, 2, 3]);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn single_compose_macro_is_the_transducer_itself() {
        let out = transduce(compose!(map(|x: i32| x + 1)), Append::new(), vec![1, 2]);
        assert_eq!(out, vec![2, 3]);
    }
}
