//! # Predicate sets
//!
//! A set is represented by its membership test: any function `Fn(&T) -> bool`. Sets built this way
//! are never enumerated nor stored, which makes it possible to work with infinite or otherwise
//! unenumerable collections, like the even integers or the strings with some property.
//!
//! ```rust
//! use predicate_set::prelude::*;
//!
//! let even = |n: &u32| n % 2 == 0;
//! let small = |n: &u32| *n < 10;
//! let set = even.intersection(small).union(pure(11_u32));
//!
//! assert!(set.contains(&4));
//! assert!(set.contains(&11));
//! assert!(!set.contains(&12));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod boolean;
pub mod construct;
pub mod prelude;
pub mod structural;

pub use boolean::{
    complement, difference, intersection, intersection_all, symmetric_difference, union, union_all,
};
pub use construct::{element_set, empty, pure, universe};
pub use structural::{cartesian_product, contramap};

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// Set from the listed elements, in roster notation.
///
/// This forwards to [`element_set`](construct::element_set), so that
/// `element_set![a, b, c]` and `element_set([a, b, c])` are the same set.
///
/// ```rust
/// use predicate_set::prelude::*;
///
/// let set = element_set!['a', 'c'];
/// assert!(set.contains(&'a'));
/// assert!(!set.contains(&'b'));
/// ```
#[macro_export]
macro_rules! element_set {
    ($($x: expr),* $(,)?) => (
        $crate::element_set([$($x),*])
    );
}

/// A set of `T`, given by its membership test.
///
/// This is implemented for every `Fn(&T) -> bool`, closures and function items alike. The trait
/// only exists to provide method syntax for the free functions in [`construct`], [`boolean`] and
/// [`structural`]: `a.union(b)` is exactly [`union(a, b)`](union).
///
/// Combinators take their sets by value. Since `&F` is itself a membership test whenever `F` is,
/// a set can be reused in many combinations by passing it by reference.
pub trait PredicateSet<T: ?Sized>: Fn(&T) -> bool {
    /// Membership relation ∈.
    fn contains(&self, x: &T) -> bool {
        self(x)
    }

    /// Complement set. See [`complement`].
    #[must_use]
    fn complement(self) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        crate::complement(self)
    }

    /// Union x ∪ y. See [`union`].
    #[must_use]
    fn union<Q: Fn(&T) -> bool>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        crate::union(self, other)
    }

    /// Intersection x ∩ y. See [`intersection`].
    #[must_use]
    fn intersection<Q: Fn(&T) -> bool>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        crate::intersection(self, other)
    }

    /// Difference x \ y. See [`difference`].
    #[must_use]
    fn difference<Q: Fn(&T) -> bool>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        crate::difference(self, other)
    }

    /// Symmetric difference x ∆ y. See [`symmetric_difference`].
    #[must_use]
    fn symmetric_difference<Q: Fn(&T) -> bool>(self, other: Q) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        crate::symmetric_difference(self, other)
    }

    /// Cartesian product x × y. See [`cartesian_product`].
    #[must_use]
    fn product<U, Q: Fn(&U) -> bool>(self, other: Q) -> impl Fn(&(T, U)) -> bool
    where
        Self: Sized,
        T: Sized,
    {
        crate::cartesian_product(self, other)
    }

    /// Preimage of the set under a function. See [`contramap`].
    #[must_use]
    fn contramap<U: ?Sized, F: Fn(&U) -> T>(self, transform: F) -> impl Fn(&U) -> bool
    where
        Self: Sized,
        T: Sized,
    {
        crate::contramap(self, transform)
    }
}

impl<T: ?Sized, P: Fn(&T) -> bool + ?Sized> PredicateSet<T> for P {}
