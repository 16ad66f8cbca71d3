//! Composable comparison functions for multi-key sorting, and comparison by
//! reference identity.
//!
//! The combinators here build `Fn(&T, &T) -> Ordering` closures out of
//! smaller ones, so a multi-key sort reads as a chain of the keys involved:
//!
//! ```
//! use fixedrank::compare::{by_key, reverse, then};
//! let mut scores = vec![("ada", 3), ("bob", 5), ("cyd", 3)];
//! // Highest score first, ties broken alphabetically.
//! let cmp = then(reverse(by_key(|&(_, n): &(&str, i32)| n)), by_key(|&(name, _): &(&str, i32)| name));
//! scores.sort_by(cmp);
//! assert_eq!(scores, [("bob", 5), ("ada", 3), ("cyd", 3)]);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A comparer that orders by the extracted key.
pub fn by_key<T, K: Ord>(key: impl Fn(&T) -> K) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| key(a).cmp(&key(b))
}

/// The opposite of `cmp`.
pub fn reverse<T>(cmp: impl Fn(&T, &T) -> Ordering) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| cmp(a, b).reverse()
}

/// Orders by `first`, consulting `second` only to break ties.
pub fn then<T>(
    first: impl Fn(&T, &T) -> Ordering,
    second: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| first(a, b).then_with(|| second(a, b))
}

/// Lexicographic composition of arbitrarily many comparers.
///
/// The comparers are consulted in order until one of them is decisive. An
/// empty chain considers everything equal.
///
/// ```
/// use fixedrank::compare::{by_key, chain};
/// use std::cmp::Ordering;
/// let mut words = vec!["pear", "fig", "apple", "kiwi"];
/// // Shortest first, ties broken alphabetically.
/// let cmp = chain(vec![
///     Box::new(by_key(|w: &&'static str| w.len())) as Box<dyn Fn(&&'static str, &&'static str) -> Ordering>,
///     Box::new(by_key(|w: &&'static str| *w)),
/// ]);
/// words.sort_by(cmp);
/// assert_eq!(words, ["fig", "kiwi", "pear", "apple"]);
/// ```
pub fn chain<T>(comparers: Vec<Box<dyn Fn(&T, &T) -> Ordering>>) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| {
        for cmp in &comparers {
            match cmp(a, b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

// ----------------------------------------------------------------------------

/// Tests whether `a` and `b` are the same object, not merely equal values.
pub fn same<T: ?Sized>(a: &T, b: &T) -> bool { std::ptr::eq(a, b) }

/// Wraps a reference so that equality and hashing use the referent's
/// address rather than its value.
///
/// Useful for identity-keyed maps and for de-duplicating by object rather
/// than by value:
///
/// ```
/// use fixedrank::ByAddress;
/// use std::collections::HashSet;
/// let a = String::from("same");
/// let b = String::from("same");
/// let mut seen = HashSet::new();
/// assert!(seen.insert(ByAddress(&a)));
/// assert!(seen.insert(ByAddress(&b))); // Equal values, distinct objects.
/// assert!(!seen.insert(ByAddress(&a)));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct ByAddress<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized> PartialEq for ByAddress<'a, T> {
    fn eq(&self, other: &Self) -> bool { std::ptr::eq(self.0, other.0) }
}

impl<'a, T: ?Sized> Eq for ByAddress<'a, T> {}

impl<'a, T: ?Sized> Hash for ByAddress<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) { std::ptr::hash(self.0, state); }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        group: u32,
        name: &'static str,
        rank: i32,
    }

    fn records() -> Vec<Record> {
        vec![
            Record {group: 1, name: "b", rank: 2},
            Record {group: 0, name: "c", rank: 1},
            Record {group: 1, name: "a", rank: 2},
            Record {group: 0, name: "a", rank: 3},
        ]
    }

    #[test]
    fn three_key_sort() {
        let mut items = records();
        let cmp = chain(vec![
            Box::new(by_key(|r: &Record| r.group)) as Box<dyn Fn(&Record, &Record) -> Ordering>,
            Box::new(reverse(by_key(|r: &Record| r.rank))),
            Box::new(by_key(|r: &Record| r.name)),
        ]);
        items.sort_by(cmp);
        let order: Vec<_> = items.iter().map(|r| (r.group, r.rank, r.name)).collect();
        assert_eq!(order, [(0, 3, "a"), (0, 1, "c"), (1, 2, "a"), (1, 2, "b")]);
    }

    #[test]
    fn empty_chain_is_indifferent() {
        let cmp = chain::<Record>(vec![]);
        let items = records();
        assert_eq!(cmp(&items[0], &items[1]), Ordering::Equal);
    }

    #[test]
    fn reverse_inverts_every_outcome() {
        let cmp = by_key(|x: &i32| *x);
        let rev = reverse(by_key(|x: &i32| *x));
        for (a, b) in [(1, 2), (2, 1), (3, 3)] {
            assert_eq!(cmp(&a, &b), rev(&a, &b).reverse());
        }
    }

    #[test]
    fn same_is_identity_not_equality() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        assert!(same(&a, &a));
        assert!(!same(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn by_address_distinguishes_equal_values() {
        let a = String::from("x");
        let b = String::from("x");
        assert_eq!(ByAddress(&a), ByAddress(&a));
        assert_ne!(ByAddress(&a), ByAddress(&b));
    }
}
