//! Sets built from explicit data, without reference to any other set.

use crate::prelude::*;

/// The elements of a set in roster notation.
///
/// Up to four elements are stored inline.
#[derive(Clone, Debug, Deref, From)]
pub(crate) struct Roster<T>(SmallVec<T>);

impl<T> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Empty set Ø.
///
/// Nothing is a member of it.
#[must_use]
pub fn empty<T: ?Sized>() -> impl Fn(&T) -> bool {
    |_: &T| false
}

/// The universal set, i.e. the entire type `T`.
#[must_use]
pub fn universe<T: ?Sized>() -> impl Fn(&T) -> bool {
    |_: &T| true
}

/// Singleton set {x}.
#[must_use]
pub fn pure<T: PartialEq>(value: T) -> impl Fn(&T) -> bool {
    move |x: &T| *x == value
}

/// Set from a list of elements.
///
/// Neither the order of the elements nor their repetitions matter. Membership is tested by
/// comparing against each element in turn. For the variadic form, see
/// [`element_set!`](crate::element_set!).
#[must_use]
pub fn element_set<T: PartialEq, I: IntoIterator<Item = T>>(values: I) -> impl Fn(&T) -> bool {
    let roster: Roster<T> = values.into_iter().collect();
    move |x: &T| roster.contains(x)
}

/// Tests for the constructors.
#[cfg(test)]
mod construct {
    use super::*;

    #[test]
    fn empty() {
        let set = super::empty::<i32>();
        for n in -5..5 {
            assert!(!set(&n));
        }
        assert!(!super::empty::<str>()("anything"));
    }

    #[test]
    fn universe() {
        let set = super::universe::<i32>();
        for n in -5..5 {
            assert!(set(&n));
        }
        assert!(super::universe::<str>()(""));
    }

    #[test]
    fn pure() {
        let set = super::pure(3);
        assert!(set(&3));
        assert!(!set(&2));
        assert!(!set(&4));

        let set = super::pure(String::from("x"));
        assert!(set(&"x".to_owned()));
        assert!(!set(&String::new()));
    }

    #[test]
    fn element_set() {
        let set = super::element_set(vec![1, 3]);
        assert!(set(&1));
        assert!(!set(&2));
        assert!(set(&3));
    }

    #[test]
    fn element_set_spilled() {
        // More elements than fit inline.
        let set = super::element_set(0..10);
        for n in 0..10 {
            assert!(set(&n), "{n} should be a member");
        }
        assert!(!set(&10));
        assert!(!set(&-1));
    }

    #[test]
    fn element_set_order_and_duplicates() {
        let fst = super::element_set([1, 2, 3]);
        let snd = super::element_set([3, 3, 1, 2, 1]);
        for n in -2..6 {
            assert_eq!(fst(&n), snd(&n), "sets disagree at {n}");
        }
    }

    #[test]
    fn element_set_macro() {
        let set = crate::element_set!['a', 'c'];
        assert!(set(&'a'));
        assert!(!set(&'b'));
        assert!(set(&'c'));

        let set = crate::element_set![1, 3,];
        assert!(set(&3));

        let none: Vec<i32> = Vec::new();
        let set = super::element_set(none);
        assert!(!set(&0));
    }

    #[test]
    fn roster() {
        let roster: Roster<_> = [2, 1, 2].into_iter().collect();
        assert_eq!(roster.len(), 3);
        assert!(roster.contains(&1));

        let roster = Roster::from(crate::SmallVec::from_elem(7, 2));
        assert_eq!(roster.as_slice(), &[7, 7]);
    }
}
