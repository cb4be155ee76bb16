//! Built-in terminal reducers.
//!
//! These are the reducers most reductions end in: collect into a `Vec`, sum,
//! or count. Custom reducers are just [`Reducer`] implementations (or
//! [`from_fn`](crate::from_fn) over a closure pair); nothing here is
//! special-cased by the engine.

use std::marker::PhantomData;
use std::ops::Add;

use crate::reducer::Reducer;
use crate::step::Step;

/* ===================== Append<T> ===================== */

/// Collects elements into a `Vec<T>`, preserving order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Append<T>(PhantomData<T>);

impl<T> Append<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Reducer<T> for Append<T> {
    type Acc = Vec<T>;

    fn empty(&mut self) -> Vec<T> {
        Vec::new()
    }

    fn step(&mut self, mut acc: Vec<T>, item: T) -> Step<Vec<T>> {
        acc.push(item);
        Step::Continue(acc)
    }
}

/* ===================== Sum<T> ===================== */

/// Sums elements; the empty accumulator is `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(PhantomData<T>);

impl<T> Sum<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Reducer<T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    type Acc = T;

    fn empty(&mut self) -> T {
        T::default()
    }

    fn step(&mut self, acc: T, item: T) -> Step<T> {
        Step::Continue(acc + item)
    }
}

/* ===================== Count ===================== */

/// Counts elements, ignoring their values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<T> Reducer<T> for Count {
    type Acc = u64;

    fn empty(&mut self) -> u64 {
        0
    }

    fn step(&mut self, acc: u64, _item: T) -> Step<u64> {
        Step::Continue(acc + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::reduce;

    #[test]
    fn append_preserves_order() {
        let mut r = Append::new();
        assert_eq!(reduce(&mut r, vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn sum_starts_from_default() {
        let mut r = Sum::<i64>::new();
        assert_eq!(r.empty(), 0);
        assert_eq!(reduce(&mut r, vec![1i64, 2, 3]), 6);
    }

    #[test]
    fn count_ignores_values() {
        let mut r = Count;
        assert_eq!(reduce(&mut r, vec!["a", "b", "c"]), 3);
    }
}
