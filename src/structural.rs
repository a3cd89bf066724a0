//! Sets built by changing the type of the elements.

/// Cartesian product x × y.
///
/// A pair `(a, b)` is a member iff `a` belongs to `lhs` and `b` belongs to `rhs`. The second set is
/// only queried when the first one succeeds.
#[must_use]
pub fn cartesian_product<A, B, P, Q>(lhs: P, rhs: Q) -> impl Fn(&(A, B)) -> bool
where
    P: Fn(&A) -> bool,
    Q: Fn(&B) -> bool,
{
    move |(a, b): &(A, B)| lhs(a) && rhs(b)
}

/// The preimage of a set under a function.
///
/// An element `x` is a member iff `transform(x)` belongs to `set`. This lets a set over `A` be
/// reused over any type `B` that can be mapped into `A`. Chaining preimages composes the
/// functions: the preimage under `g` of the preimage under `f` is the preimage under `f ∘ g`.
#[must_use]
pub fn contramap<A, B: ?Sized, P, F>(set: P, transform: F) -> impl Fn(&B) -> bool
where
    P: Fn(&A) -> bool,
    F: Fn(&B) -> A,
{
    move |x: &B| set(&transform(x))
}

/// Tests for the structural combinators.
#[cfg(test)]
mod structural {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn cartesian_product() {
        let set = super::cartesian_product(element_set(['b', 'c']), element_set([1, 2]));
        assert!(!set(&('a', 1)));
        assert!(set(&('b', 1)));
        assert!(set(&('b', 2)));
        assert!(set(&('c', 1)));
        assert!(set(&('c', 2)));
        assert!(!set(&('c', 3)));
    }

    #[test]
    fn cartesian_product_nested() {
        // (ℕ × ℕ) × ℕ restricted to even coordinates.
        let even = |n: &u32| n % 2 == 0;
        let set = super::cartesian_product(super::cartesian_product(even, even), even);
        assert!(set(&((0, 2), 4)));
        assert!(!set(&((0, 1), 4)));
    }

    #[test]
    fn contramap() {
        let set = super::contramap(element_set(["2".to_owned(), "3".to_owned()]), |n: &i32| {
            n.to_string()
        });
        assert!(!set(&1));
        assert!(set(&2));
        assert!(set(&3));
        assert!(!set(&4));
    }

    #[test]
    fn contramap_unsized() {
        let set = super::contramap(pure(3), |s: &str| s.len());
        assert!(set("abc"));
        assert!(!set("abcd"));
    }

    #[test]
    fn contramap_compose() {
        let set = |n: &i64| n % 3 == 0;
        let f = |n: &i32| i64::from(*n) * 2;
        let g = |s: &String| i32::try_from(s.len()).unwrap();

        let chained = super::contramap(super::contramap(set, f), g);
        let composed = super::contramap(set, |s: &String| f(&g(s)));
        for len in 0..12 {
            let s = "x".repeat(len);
            assert_eq!(chained(&s), composed(&s), "composition fail at length {len}");
        }
    }
}
