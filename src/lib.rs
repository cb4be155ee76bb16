//! # xduce
//!
//! **Composable, collection-independent reduction transforms** -- transducers
//! for Rust. A transducer wraps a reducer to produce a new reducer, so
//! transformations like map, filter, and take compose without allocating
//! intermediate collections and without caring what shape the input has
//! (vector, range, generator-style source, anything that can drive a
//! reducer).
//!
//! ## Quick Start
//!
//! ```
//! use xduce::{compose, filter, map, transduce, reducers::Append};
//!
//! // Describe the transformation once, independent of any input...
//! let evens_doubled = compose(filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 2));
//!
//! // ...then run it over a concrete source with a terminal reducer.
//! let out = transduce(evens_doubled, Append::new(), vec![1, 2, 3, 4]);
//! assert_eq!(out, vec![4, 8]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Reducer
//!
//! A [`Reducer<T>`] is a combining function with three named operations:
//! [`empty`](Reducer::empty) produces the identity accumulator,
//! [`complete`](Reducer::complete) finishes a reduction (identity by
//! default), and [`step`](Reducer::step) folds one element in. Plain binary
//! closures become reducers via [`from_fn`]; common terminals live in
//! [`reducers`] ([`Append`](reducers::Append), [`Sum`](reducers::Sum),
//! [`Count`](reducers::Count)).
//!
//! ### Step
//!
//! Every `step` call returns a [`Step`]: `Continue(acc)` to keep going or
//! `Stop(acc)` to terminate early. The engine stops pulling input the
//! moment it sees `Stop` and always returns the bare accumulator, so the
//! tag never leaks to callers.
//!
//! ### Transducer
//!
//! A [`Transducer<R>`] turns a downstream reducer into an upstream one.
//! [`compose()`] (or the variadic [`compose!`]) chains them; reading a chain
//! left to right gives the order elements flow through the stages. Applying
//! a transducer builds a fresh reducer chain with its own private state, so
//! one pipeline description can be run many times without interference.
//!
//! ### Source
//!
//! Inputs implement [`Source<T>`]. Every `IntoIterator` qualifies
//! automatically; types with their own native fold implement the trait
//! directly and the engine delegates to them. Either way [`reduce()`] and
//! [`transduce`] behave identically.
//!
//! ## Early termination
//!
//! [`take`] is the built-in early terminator: it delegates at most `n`
//! elements and signals `Stop` on the `n`-th, so upstream stages run
//! exactly as often as the output requires, even over unbounded sources:
//!
//! ```
//! use xduce::{compose, map, take, transduce, reducers::Append};
//!
//! let out = transduce(compose(map(|x: u64| x * x), take(3)), Append::new(), 1..);
//! assert_eq!(out, vec![1, 4, 9]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` -- derive `Serialize`/`Deserialize` on [`Step`].
//!
//! ## Module Overview
//!
//! - [`step`] -- the [`Step`] termination protocol
//! - [`reducer`] -- the [`Reducer`] trait and [`from_fn`]
//! - [`reducers`] -- built-in terminal reducers
//! - [`source`] -- the [`Source`] input capability
//! - [`reduce`](mod@reduce) -- the reduction engine
//! - [`transducer`] -- composition and the [`transduce`] orchestrator
//! - [`transducers`] -- the primitive transducers
//! - [`testing`] -- assertions and a pull-counting source for tests

pub mod reduce;
pub mod reducer;
pub mod reducers;
pub mod source;
pub mod step;
pub mod testing;
pub mod transducer;
pub mod transducers;

pub use reduce::{reduce, reduce_seeded};
pub use reducer::{from_fn, FnReducer, Reducer};
pub use source::Source;
pub use step::Step;
pub use transducer::{compose, transduce, transduce_seeded, Comp, Identity, Transducer};
pub use transducers::{cat, filter, map, mapcat, take, Cat, Filter, Map, Take};
