use xduce::testing::assert_collections_equal;
use xduce::reducers::Append;
use xduce::{compose, filter, map, take, transduce, Identity};

#[test]
fn composing_one_stage_behaves_like_the_stage_alone() {
    let alone = transduce(map(|x: i32| x + 1), Append::new(), vec![1, 2, 3]);
    let composed = transduce(xduce::compose!(map(|x: i32| x + 1)), Append::new(), vec![1, 2, 3]);
    assert_collections_equal(&alone, &composed);
}

#[test]
fn composition_is_associative() {
    let f = || filter(|x: &i32| x % 3 != 0);
    let g = || map(|x: i32| x * 10);
    let h = || take(4);

    let left = transduce(
        compose(compose(f(), g()), h()),
        Append::new(),
        1..100,
    );
    let right = transduce(
        compose(f(), compose(g(), h())),
        Append::new(),
        1..100,
    );
    assert_collections_equal(&left, &right);
    assert_collections_equal(&left, &[10, 20, 40, 50]);
}

#[test]
fn identity_is_a_unit_for_composition() {
    let plain = transduce(map(|x: i32| x - 1), Append::new(), vec![5, 6]);
    let left = transduce(compose(Identity, map(|x: i32| x - 1)), Append::new(), vec![5, 6]);
    let right = transduce(compose(map(|x: i32| x - 1), Identity), Append::new(), vec![5, 6]);
    assert_collections_equal(&plain, &left);
    assert_collections_equal(&plain, &right);
}

#[test]
fn zero_stage_composition_is_the_identity() {
    let out = transduce(xduce::compose!(), Append::new(), vec![7, 8, 9]);
    assert_collections_equal(&out, &[7, 8, 9]);
}

#[test]
fn stages_see_elements_left_to_right() {
    // filter runs before map: the predicate sees raw elements, the mapper
    // only survivors.
    let out = transduce(
        compose(filter(|x: &i32| *x < 3), map(|x: i32| x * 100)),
        Append::new(),
        vec![1, 2, 3, 4],
    );
    assert_collections_equal(&out, &[100, 200]);

    // Swapped order: map runs first, so the predicate sees mapped values.
    let out = transduce(
        compose(map(|x: i32| x * 100), filter(|x: &i32| *x < 3)),
        Append::new(),
        vec![1, 2, 3, 4],
    );
    assert_collections_equal(&out, &[]);
}

#[test]
fn variadic_macro_nests_rightward() {
    let via_macro = transduce(
        xduce::compose!(filter(|x: &i32| x % 2 == 0), map(|x: i32| x / 2), take(2)),
        Append::new(),
        1..20,
    );
    let via_calls = transduce(
        compose(filter(|x: &i32| x % 2 == 0), compose(map(|x: i32| x / 2), take(2))),
        Append::new(),
        1..20,
    );
    assert_collections_equal(&via_macro, &via_calls);
    assert_collections_equal(&via_macro, &[1, 2]);
}
