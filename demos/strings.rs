//! Sets of strings, described by their properties rather than their elements.

use predicate_set::prelude::*;

/// Strings that read the same backwards.
fn palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Print out which words belong to a few sets of strings.
fn main() {
    let short = contramap(|n: &usize| *n <= 4, |s: &str| s.chars().count());
    let vowel = contramap(
        element_set!['a', 'e', 'i', 'o', 'u'],
        |s: &str| s.chars().next().unwrap_or_default(),
    );
    let banned = |s: &str| ["kayak", "ewe"].contains(&s);

    let set = union(intersection(palindrome, &short), vowel).difference(banned);

    for word in ["noon", "level", "ewe", "orbit", "kayak", "tree", "", "a"] {
        println!("{word:?}: {}", set.contains(word));
    }

    // Chessboard squares, as a file and a rank.
    let square = cartesian_product(
        |file: &char| ('a'..='h').contains(file),
        |rank: &u8| (1..=8).contains(rank),
    );
    for (file, rank) in [('e', 4), ('i', 1), ('a', 9)] {
        println!("{file}{rank} is a square: {}", square.contains(&(file, rank)));
    }
}
