//! End-to-end checks of the coordinate arithmetic: owning arrays, views,
//! windows and rebased arrays must all agree about where every element is.

use rand::Rng;

use fixedrank::{Array2, Array3, Dims2, Dims3, OffsetArray2, OffsetArray3};

#[test]
fn flat_positions_and_coordinates_agree_on_random_extents() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let dims = Dims2::new(rng.gen_range(1..9), rng.gen_range(1..9));
        for (flat, index) in dims.indices().enumerate() {
            assert_eq!(dims.flatten(index), flat);
            assert_eq!(dims.unflatten(flat), index);
        }
        let dims = Dims3::new(rng.gen_range(1..6), rng.gen_range(1..6), rng.gen_range(1..6));
        for (flat, index) in dims.indices().enumerate() {
            assert_eq!(dims.flatten(index), flat);
            assert_eq!(dims.unflatten(flat), index);
        }
    }
}

#[test]
fn stepping_visits_the_same_coordinates_as_unflattening() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let dims = Dims3::new(rng.gen_range(1..5), rng.gen_range(1..5), rng.gen_range(1..5));
        let mut index = (0, 0, 0);
        let mut stepped = vec![index];
        while dims.step_forward(&mut index) {
            stepped.push(index);
        }
        let decoded: Vec<_> = dims.indices().collect();
        assert_eq!(stepped, decoded);
    }
}

#[test]
fn windows_agree_with_manual_slicing() {
    let a = Array2::from_fn(6, 7, |(i, j)| 100 * i + j);
    let window = a.window((2, 3), Dims2::new(3, 2));
    let mut expected = Vec::new();
    for i in 2..5 {
        for j in 3..5 {
            expected.push(a[(i, j)]);
        }
    }
    let forward: Vec<_> = window.iter().copied().collect();
    assert_eq!(forward, expected);
    let mut backward: Vec<_> = window.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(backward, expected);
    assert_eq!(window.to_owned().as_slice(), &expected[..]);
}

#[test]
fn views_and_arrays_agree_everywhere() {
    let a = Array3::from_fn(3, 4, 5, |(p, r, c)| (p, r, c));
    let view = a.view();
    for (index, item) in view.indexed() {
        assert_eq!(*item, index);
        assert_eq!(a[index], index);
        assert_eq!(view.at(index), &index);
    }
    assert_eq!(a, view);
    assert_eq!(view.to_owned(), a);
}

#[test]
fn rebased_arrays_are_a_relabelling() {
    let inner = Array2::from_fn(4, 4, |(i, j)| 10 * i + j);
    let rebased = OffsetArray2::new((-2, -2), inner.clone());
    for (index, item) in inner.indexed() {
        let shifted = rebased.unrebase(index);
        assert_eq!(rebased[shifted], *item);
        assert_eq!(rebased.rebase(shifted), index);
    }
    assert_eq!(rebased.into_inner(), inner);
}

#[test]
fn rank3_rebasing_round_trips_at_random_bases() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let base = (
            rng.gen_range(-5..5),
            rng.gen_range(-5..5),
            rng.gen_range(-5..5),
        );
        let a = OffsetArray3::from_fn(base, 2, 3, 2, |index| index);
        for (index, item) in a.indexed() {
            assert_eq!(*item, index);
            assert_eq!(a.unrebase(a.rebase(index)), index);
        }
    }
}

#[test]
fn enumerators_reverse_cleanly_mid_stream() {
    let a = Array2::from_fn(3, 3, |(i, j)| 3 * i + j);
    let mut indexed = a.indexed();
    assert_eq!(indexed.next().map(|(_, x)| *x), Some(0));
    assert_eq!(indexed.next_back().map(|(_, x)| *x), Some(8));
    assert_eq!(indexed.next_back().map(|(_, x)| *x), Some(7));
    let rest: Vec<_> = indexed.map(|(_, x)| *x).collect();
    assert_eq!(rest, [1, 2, 3, 4, 5, 6]);
}
