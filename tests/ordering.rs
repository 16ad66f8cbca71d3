//! End-to-end checks of the value tuples and comparer combinators working
//! together: parse, sort by several keys, and hash by identity.

use std::cmp::Ordering;
use std::collections::HashMap;

use rand::Rng;

use fixedrank::compare::{by_key, chain, reverse};
use fixedrank::{Bool8, ByAddress, Int2, Int3};

#[test]
fn tuples_survive_a_format_parse_cycle_at_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let t = Int3::new(rng.gen(), rng.gen(), rng.gen());
        assert_eq!(t.to_string().parse::<Int3>(), Ok(t));
        let flags = Bool8::from_bits(rng.gen());
        assert_eq!(flags.to_string().parse::<Bool8>(), Ok(flags));
    }
}

#[test]
fn multi_key_sort_over_parsed_tuples() {
    let mut points: Vec<Int2> = ["(2, 1)", "(1, 9)", "(2, -3)", "(1, 0)"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    // Second component descending, first component ascending.
    let cmp = chain(vec![
        Box::new(reverse(by_key(|p: &Int2| p.1))) as Box<dyn Fn(&Int2, &Int2) -> Ordering>,
        Box::new(by_key(|p: &Int2| p.0)),
    ]);
    points.sort_by(cmp);
    assert_eq!(points, [
        Int2::new(1, 9),
        Int2::new(2, 1),
        Int2::new(1, 0),
        Int2::new(2, -3),
    ]);
}

#[test]
fn tuples_work_as_map_keys() {
    let mut census = HashMap::new();
    for s in ["(0, 0)", "(1, 2)", "(0, 0)", "(1, 2)", "(0, 0)"] {
        let key: Int2 = s.parse().unwrap();
        *census.entry(key).or_insert(0) += 1;
    }
    assert_eq!(census[&Int2::new(0, 0)], 3);
    assert_eq!(census[&Int2::new(1, 2)], 2);
}

#[test]
fn identity_keys_distinguish_equal_values() {
    let first = Int2::new(7, 7);
    let second = Int2::new(7, 7);
    let mut by_object = HashMap::new();
    by_object.insert(ByAddress(&first), "first");
    by_object.insert(ByAddress(&second), "second");
    assert_eq!(by_object.len(), 2);
    assert_eq!(by_object[&ByAddress(&first)], "first");
    assert_eq!(by_object[&ByAddress(&second)], "second");
}

#[test]
fn flag_sets_compose_bitwise() {
    let weekdays: Bool8 = "11111000".parse().unwrap();
    let rota: Bool8 = "10101010".parse().unwrap();
    let both = weekdays & rota;
    assert_eq!(both.to_string(), "10101000");
    assert_eq!(both.count(), 3);
    assert_eq!(weekdays | rota, "11111010".parse().unwrap());
}
