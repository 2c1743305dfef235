//! Set algebra over hash sets
//!
//! Each operation takes an ordered, non-empty list of operand sets and returns a
//! freshly allocated result. Inputs are never mutated. A single operand is returned
//! unchanged (as a copy), which lets n-ary callers pass whatever they collected
//! without special-casing the one-element list.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

fn split_operands<'s, 'a, T, S>(
    op: &str,
    sets: &'s [&'a HashSet<T, S>],
) -> (&'a HashSet<T, S>, &'s [&'a HashSet<T, S>]) {
    let Some((&first, rest)) = sets.split_first() else {
        panic!("{op} requires at least one set");
    };
    (first, rest)
}

/// Elements appearing in at least one operand
///
/// # Panics
/// Panics if `sets` is empty.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wordle_filter::core::sets::union;
///
/// let a: FxHashSet<u8> = [1, 2].into_iter().collect();
/// let b: FxHashSet<u8> = [2, 3].into_iter().collect();
/// let all = union(&[&a, &b]);
/// assert_eq!(all.len(), 3);
/// ```
#[must_use]
pub fn union<T, S>(sets: &[&HashSet<T, S>]) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    let (first, rest) = split_operands("union", sets);
    let mut result: HashSet<T, S> = first.iter().cloned().collect();
    for set in rest {
        result.extend(set.iter().cloned());
    }
    result
}

/// Elements appearing in every operand
///
/// # Panics
/// Panics if `sets` is empty.
#[must_use]
pub fn intersect<T, S>(sets: &[&HashSet<T, S>]) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    let (first, rest) = split_operands("intersect", sets);
    first
        .iter()
        .filter(|item| rest.iter().all(|set| set.contains(*item)))
        .cloned()
        .collect()
}

/// Elements of the first operand appearing in none of the others
///
/// # Panics
/// Panics if `sets` is empty.
#[must_use]
pub fn difference<T, S>(sets: &[&HashSet<T, S>]) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    let (first, rest) = split_operands("difference", sets);
    first
        .iter()
        .filter(|item| !rest.iter().any(|set| set.contains(*item)))
        .cloned()
        .collect()
}
