//! Testing utilities for reductions.
//!
//! Two things tests keep needing: an order-sensitive collection assertion
//! with a useful failure message, and a way to observe how many elements a
//! reduction actually pulled from its source (to verify early termination
//! really is early). [`Tracked`] provides the latter: it wraps any iterable
//! source and counts every element handed out.
//!
//! # Example
//!
//! ```
//! use xduce::{take, transduce, reducers::Append};
//! use xduce::testing::{assert_collections_equal, Tracked};
//!
//! let (source, pulls) = Tracked::new(1..100);
//! let out = transduce(take(2), Append::new(), source);
//! assert_collections_equal(&out, &[1, 2]);
//! assert_eq!(pulls.get(), 2);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Shared handle to the number of elements a [`Tracked`] source has
/// produced so far.
#[derive(Clone, Debug, Default)]
pub struct PullCount(Arc<AtomicUsize>);

impl PullCount {
    /// Elements produced so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// An iterable source that counts every element it hands out.
///
/// Built with [`Tracked::new`], which also returns the [`PullCount`] handle
/// the test holds on to. Counting happens per yielded element, so an
/// exhausted-iterator probe (`next()` returning `None`) does not inflate
/// the count.
pub struct Tracked<I> {
    inner: I,
    pulls: PullCount,
}

impl<I: IntoIterator> Tracked<I> {
    /// Wrap `inner`, returning the source and its pull counter.
    pub fn new(inner: I) -> (Self, PullCount) {
        let pulls = PullCount::default();
        (
            Self {
                inner,
                pulls: pulls.clone(),
            },
            pulls,
        )
    }
}

impl<I: IntoIterator> IntoIterator for Tracked<I> {
    type Item = I::Item;
    type IntoIter = TrackedIter<I::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        TrackedIter {
            inner: self.inner.into_iter(),
            pulls: self.pulls,
        }
    }
}

/// Iterator for [`Tracked`].
pub struct TrackedIter<It> {
    inner: It,
    pulls: PullCount,
}

impl<It: Iterator> Iterator for TrackedIter<It> {
    type Item = It::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.pulls.bump();
        }
        item
    }
}
