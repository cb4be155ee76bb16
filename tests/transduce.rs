use xduce::testing::assert_collections_equal;
use xduce::reducers::{Append, Count, Sum};
use xduce::{compose, filter, from_fn, map, take, transduce, transduce_seeded, Reducer, Step};

#[test]
fn round_trip_through_a_single_map() {
    let out = transduce(map(|x: i32| x * 2), Append::new(), vec![1, 2, 3]);
    assert_collections_equal(&out, &[2, 4, 6]);
}

#[test]
fn filter_then_map_scenario() {
    let is_even = |x: &i32| x % 2 == 0;
    let double = |x: i32| x * 2;
    let out = transduce(compose(filter(is_even), map(double)), Append::new(), vec![1, 2, 3, 4]);
    assert_collections_equal(&out, &[4, 8]);
}

#[test]
fn transduce_seeds_from_the_terminal_reducer() {
    let unseeded = transduce(map(|x: i32| x + 1), Append::new(), vec![1, 2]);
    let mut terminal = Append::new();
    let seed = terminal.empty();
    let seeded = transduce_seeded(map(|x: i32| x + 1), terminal, vec![1, 2], seed);
    assert_collections_equal(&unseeded, &seeded);
}

#[test]
fn transduce_seeded_builds_on_the_given_accumulator() {
    let out = transduce_seeded(map(|x: i32| x * 10), Append::new(), vec![2, 3], vec![10]);
    assert_collections_equal(&out, &[10, 20, 30]);
}

#[test]
fn closure_reducers_cover_all_three_forms() {
    let mut r = from_fn(|| 0, |a, b: i32| a + b);

    // Zero-arity: the empty value. One-arity: identity completion.
    // Two-arity: the combine.
    assert_eq!(r.empty(), 0);
    assert_eq!(r.complete(17), 17);
    assert_eq!(r.step(1, 2), Step::Continue(3));

    let total = transduce(filter(|x: &i32| *x > 0), r, vec![-1, 2, -3, 4]);
    assert_eq!(total, 6);
}

#[test]
fn terminal_reducer_choice_is_independent_of_the_pipeline() {
    let xf = || compose(map(|x: u32| x + 1), filter(|x: &u32| x % 2 == 0));

    let collected = transduce(xf(), Append::new(), 0..6u32);
    let counted = transduce(xf(), Count, 0..6u32);
    let summed = transduce(xf(), Sum::<u32>::new(), 0..6u32);

    assert_collections_equal(&collected, &[2, 4, 6]);
    assert_eq!(counted, 3);
    assert_eq!(summed, 12);
}

#[test]
fn pipelines_run_over_any_source_shape() {
    let expected = vec![0, 2, 4];

    let from_vec = transduce(compose(take(3), map(|x: i64| x * 2)), Append::new(), vec![0i64, 1, 2, 3]);
    let from_range = transduce(compose(take(3), map(|x: i64| x * 2)), Append::new(), 0i64..);
    let from_iter = transduce(
        compose(take(3), map(|x: i64| x * 2)),
        Append::new(),
        std::iter::successors(Some(0i64), |n| Some(n + 1)),
    );

    assert_collections_equal(&from_vec, &expected);
    assert_collections_equal(&from_range, &expected);
    assert_collections_equal(&from_iter, &expected);
}
