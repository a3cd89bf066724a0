//! Infinite sets of numbers are where predicate sets shine: none of the sets below could ever be
//! written down element by element, yet membership in each is decided instantly.
//!
//! We model a rational m&frasl;n as a pair `(m, n)` with `n > 0`, and the real number √2 as its
//! Dedekind cut: the set of rationals strictly smaller than it.

use predicate_set::prelude::*;

/// Rationals, as pairs of an integer and a positive natural in lowest terms.
fn rationals() -> impl Fn(&(i64, u64)) -> bool {
    let fractions = cartesian_product(universe::<i64>(), |n: &u64| *n != 0);
    let lowest = |(m, n): &(i64, u64)| gcd::binary_u64(m.unsigned_abs(), *n) == 1;
    intersection(fractions, lowest)
}

/// The Dedekind cut for √2, i.e. the rationals m&frasl;n with m < 0 or m² < 2n².
fn sqrt_2() -> impl Fn(&(i64, u64)) -> bool {
    let negative = |(m, _): &(i64, u64)| *m < 0;
    let small = |(m, n): &(i64, u64)| {
        let m = i128::from(*m);
        let n = i128::from(*n);
        m * m < 2 * n * n
    };

    intersection(rationals(), union(negative, small))
}

/// The integers, seen as the rationals with denominator 1.
fn integers() -> impl Fn(&i64) -> bool {
    contramap(rationals(), |m: &i64| (*m, 1))
}

/// Print out some approximations of √2 from below and above.
fn main() {
    let cut = sqrt_2();
    let above = difference(rationals(), &cut);

    // Continued fraction convergents of √2.
    let convergents = [(1, 1), (3, 2), (7, 5), (17, 12), (41, 29), (99, 70), (239, 169)];
    for (m, n) in convergents {
        let side = if cut.contains(&(m, n)) { "below" } else { "above" };
        debug_assert_eq!(above.contains(&(m, n)), side == "above");
        println!("{m}/{n} is {side} √2");
    }

    // Not a rational in lowest terms.
    println!("2/2 is a rational: {}", rationals().contains(&(2, 2)));
    println!("-3 is an integer: {}", integers().contains(&-3));
}
