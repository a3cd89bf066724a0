//! Boolean combinations of sets.
//!
//! Every combinator here evaluates its operands lazily, in the same way as `&&` and `||`: a union
//! never queries its right operand for an element of its left operand, and an intersection never
//! queries its right operand for an element outside its left operand.

use crate::prelude::*;

/// Complement set, i.e. everything not in the set.
///
/// Taking the complement twice gives back a set with the same members.
#[must_use]
pub fn complement<T: ?Sized, P: Fn(&T) -> bool>(set: P) -> impl Fn(&T) -> bool {
    move |x: &T| !set(x)
}

/// Union x ∪ y.
///
/// This is commutative and associative, with [`empty`](crate::empty) as its identity.
#[must_use]
pub fn union<T: ?Sized, P, Q>(lhs: P, rhs: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |x: &T| lhs(x) || rhs(x)
}

/// Intersection x ∩ y.
///
/// This is commutative and associative, with [`universe`](crate::universe) as its identity.
#[must_use]
pub fn intersection<T: ?Sized, P, Q>(lhs: P, rhs: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |x: &T| lhs(x) && rhs(x)
}

/// Difference x \ y, defined as x ∩ yᶜ.
#[must_use]
pub fn difference<T: ?Sized, P, Q>(lhs: P, rhs: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    intersection(lhs, complement(rhs))
}

/// Symmetric difference x ∆ y, defined as (x \ y) ∪ (y \ x).
///
/// An element is a member iff it belongs to exactly one of the sets.
#[must_use]
pub fn symmetric_difference<T: ?Sized, P, Q>(lhs: P, rhs: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    // Each operand appears twice, so we build the combination over borrows on every query. This
    // only moves references around.
    move |x: &T| union(difference(&lhs, &rhs), difference(&rhs, &lhs))(x)
}

/// Union over an iterator of sets.
///
/// The sets are queried in order until one of them contains the element. The union of no sets is
/// the empty set.
#[must_use]
pub fn union_all<T: ?Sized, P, I>(sets: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let sets: SmallVec<P> = sets.into_iter().collect();
    move |x: &T| sets.iter().any(|set| set(x))
}

/// Intersection over an iterator of sets.
///
/// The sets are queried in order until one of them does not contain the element. The
/// intersection of no sets is the universal set.
#[must_use]
pub fn intersection_all<T: ?Sized, P, I>(sets: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let sets: SmallVec<P> = sets.into_iter().collect();
    move |x: &T| sets.iter().all(|set| set(x))
}
