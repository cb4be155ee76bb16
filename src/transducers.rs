//! The primitive transducers: [`map`], [`filter`], [`take`], [`cat`],
//! [`mapcat`].
//!
//! Each primitive is a pair: a small constructor value implementing
//! [`Transducer`], and the reducer it produces when applied. The reducers
//! all follow the same two cross-cutting rules: `empty` and `complete`
//! delegate straight to the downstream reducer, and a termination signal
//! from downstream is passed upward untouched, never re-entering this
//! stage's step logic.

use crate::reducer::Reducer;
use crate::source::Source;
use crate::step::Step;
use crate::transducer::{compose, Comp, Transducer};

/* ===================== map ===================== */

/// The transducer built by [`map`].
#[derive(Clone, Copy, Debug)]
pub struct Map<F> {
    f: F,
}

/// Transform every element with `f` before it reaches the downstream
/// reducer.
///
/// # Example
///
/// ```
/// use xduce::{map, transduce, reducers::Append};
///
/// let out = transduce(map(|x: i32| x * x), Append::new(), vec![1, 2, 3]);
/// assert_eq!(out, vec![1, 4, 9]);
/// ```
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<F, R> Transducer<R> for Map<F> {
    type Output = MapReducer<F, R>;

    fn apply(self, next: R) -> Self::Output {
        MapReducer { f: self.f, next }
    }
}

/// [`map`]'s reducer: applies the mapping function, then delegates.
pub struct MapReducer<F, R> {
    f: F,
    next: R,
}

impl<T, U, F, R> Reducer<T> for MapReducer<F, R>
where
    F: FnMut(T) -> U,
    R: Reducer<U>,
{
    type Acc = R::Acc;

    fn empty(&mut self) -> Self::Acc {
        self.next.empty()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.next.complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        self.next.step(acc, (self.f)(item))
    }
}

/* ===================== filter ===================== */

/// The transducer built by [`filter`].
#[derive(Clone, Copy, Debug)]
pub struct Filter<P> {
    pred: P,
}

/// Drop every element the predicate rejects; accepted elements pass through
/// unchanged, in their original order.
///
/// # Example
///
/// ```
/// use xduce::{filter, transduce, reducers::Append};
///
/// let out = transduce(filter(|x: &i32| x % 2 == 0), Append::new(), vec![1, 2, 3, 4]);
/// assert_eq!(out, vec![2, 4]);
/// ```
pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

impl<P, R> Transducer<R> for Filter<P> {
    type Output = FilterReducer<P, R>;

    fn apply(self, next: R) -> Self::Output {
        FilterReducer { pred: self.pred, next }
    }
}

/// [`filter`]'s reducer: steps downstream only for accepted elements.
pub struct FilterReducer<P, R> {
    pred: P,
    next: R,
}

impl<T, P, R> Reducer<T> for FilterReducer<P, R>
where
    P: FnMut(&T) -> bool,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn empty(&mut self) -> Self::Acc {
        self.next.empty()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.next.complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        if (self.pred)(&item) {
            self.next.step(acc, item)
        } else {
            Step::Continue(acc)
        }
    }
}

/* ===================== take ===================== */

/// The transducer built by [`take`].
#[derive(Clone, Copy, Debug)]
pub struct Take {
    n: usize,
}

/// Pass through at most `n` elements, then terminate the reduction.
///
/// Termination is signaled on the `n`-th delegated element, so the engine
/// never pulls more than `n` elements from the source (for `n = 0`, the
/// first element pulled triggers termination without being emitted). The
/// accumulator returned on termination holds exactly the elements delegated
/// before the cut.
///
/// The counter lives in the reducer produced by `apply`, so reusing a
/// `take(n)` description for two reductions gives each its own count.
///
/// # Example
///
/// ```
/// use xduce::{take, transduce, reducers::Append};
///
/// let out = transduce(take(3), Append::new(), 1..);
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn take(n: usize) -> Take {
    Take { n }
}

impl<R> Transducer<R> for Take {
    type Output = TakeReducer<R>;

    fn apply(self, next: R) -> Self::Output {
        TakeReducer {
            n: self.n,
            taken: 0,
            next,
        }
    }
}

/// [`take`]'s reducer: counts delegated elements, stops at the limit.
pub struct TakeReducer<R> {
    n: usize,
    taken: usize,
    next: R,
}

impl<T, R> Reducer<T> for TakeReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn empty(&mut self) -> Self::Acc {
        self.next.empty()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.next.complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        // Handles take(0) and any step after the limit was already hit.
        if self.taken >= self.n {
            return Step::Stop(acc);
        }
        self.taken += 1;
        let stepped = self.next.step(acc, item);
        if self.taken >= self.n {
            stepped.into_stop()
        } else {
            stepped
        }
    }
}

/* ===================== cat ===================== */

/// The transducer built by [`cat`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cat;

/// Flatten one level: each element must itself be iterable, and its
/// elements are fed to the downstream reducer one by one, threading the
/// outer accumulator straight through the inner reduction.
///
/// If the downstream reducer terminates partway through an inner
/// collection, the signal bubbles out of the inner reduction and stops the
/// outer one as well. An element that is not iterable is rejected at
/// compile time.
///
/// # Example
///
/// ```
/// use xduce::{cat, transduce, reducers::Append};
///
/// let out = transduce(cat(), Append::new(), vec![vec![1], vec![2, 3]]);
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn cat() -> Cat {
    Cat
}

impl<R> Transducer<R> for Cat {
    type Output = CatReducer<R>;

    fn apply(self, next: R) -> Self::Output {
        CatReducer { next }
    }
}

/// [`cat`]'s reducer: reduces downstream over each inner collection.
pub struct CatReducer<R> {
    next: R,
}

impl<C, R> Reducer<C> for CatReducer<R>
where
    C: IntoIterator,
    R: Reducer<C::Item>,
{
    type Acc = R::Acc;

    fn empty(&mut self) -> Self::Acc {
        self.next.empty()
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        self.next.complete(acc)
    }

    fn step(&mut self, acc: Self::Acc, item: C) -> Step<Self::Acc> {
        // An inner Stop comes back tagged and bubbles to the outer engine.
        item.drive(&mut self.next, acc)
    }
}

/* ===================== mapcat ===================== */

/// Map each element to a collection, then flatten one level:
/// `compose(map(f), cat())`.
///
/// # Example
///
/// ```
/// use xduce::{mapcat, transduce, reducers::Append};
///
/// let out = transduce(mapcat(|x: i32| vec![x, x]), Append::new(), vec![1, 2]);
/// assert_eq!(out, vec![1, 1, 2, 2]);
/// ```
pub fn mapcat<F>(f: F) -> Comp<Map<F>, Cat> {
    compose(map(f), cat())
}
