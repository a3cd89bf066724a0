//! Crate prelude.

// The actual prelude.
pub use crate::{
    cartesian_product, complement, contramap, difference, element_set, empty, intersection,
    intersection_all, pure, symmetric_difference, union, union_all, universe, PredicateSet,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use derive_more::{Deref, From};
