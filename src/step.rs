//! The early-termination protocol.
//!
//! Every [`Reducer::step`](crate::Reducer::step) call answers with a [`Step`]:
//! either the reduction should continue with the new accumulator, or it is
//! finished and no further input may be consumed. The `Stop` variant carries
//! the final accumulator with it, so termination and the result travel
//! together through the reducer chain.

/// The outcome of a single reduction step.
///
/// `Continue(acc)` means "here is the updated accumulator, keep going".
/// `Stop(acc)` means "here is the final accumulator, pull no more input".
/// The reduction engine honors `Stop` immediately: once any reducer in a
/// chain returns it, no reducer in that chain is stepped again.
///
/// Because `Stop` wraps the bare accumulator (never another `Step`), a
/// terminated result cannot be double-wrapped; re-tagging via
/// [`into_stop`](Step::into_stop) is idempotent.
///
/// # Example
///
/// ```
/// use xduce::Step;
///
/// let s = Step::Continue(3);
/// assert!(!s.is_stop());
/// assert_eq!(s.into_inner(), 3);
///
/// let s = Step::Stop(7);
/// assert!(s.is_stop());
/// assert_eq!(s.into_inner(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step<A> {
    /// Keep reducing with this accumulator.
    Continue(A),
    /// Reduction is finished; this is the final accumulator.
    Stop(A),
}

impl<A> Step<A> {
    /// Whether this step signals termination.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        matches!(self, Step::Stop(_))
    }

    /// Extract the accumulator, discarding the continue/stop tag.
    ///
    /// This is the only way an accumulator leaves the protocol: the engine
    /// calls it once, at the outer boundary, so callers never observe a
    /// still-tagged value.
    #[must_use]
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Stop(acc) => acc,
        }
    }

    /// Re-tag this step as `Stop`, keeping the accumulator.
    ///
    /// Idempotent: a `Stop` stays a `Stop`. Used by bounded transducers
    /// (e.g. [`take`](crate::take)) that must terminate after a step that
    /// itself reported `Continue`.
    #[must_use]
    pub fn into_stop(self) -> Step<A> {
        match self {
            Step::Continue(acc) | Step::Stop(acc) => Step::Stop(acc),
        }
    }

    /// Borrow the accumulator without consuming the step.
    #[must_use]
    pub fn get(&self) -> &A {
        match self {
            Step::Continue(acc) | Step::Stop(acc) => acc,
        }
    }

    /// Transform the accumulator, preserving the continue/stop tag.
    #[must_use]
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Stop(acc) => Step::Stop(f(acc)),
        }
    }
}
