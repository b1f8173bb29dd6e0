pub mod criteria;
mod error;
pub mod neutrosophic;
pub mod num;
#[cfg(test)]
mod test;

pub use arrayvec::ArrayVec;
pub use permutation::Permutation;

pub use crate::criteria::{topsis::Closeness, Alternative, Criterion, Direction};
pub use crate::error::{Error, Result};
pub use crate::neutrosophic::Confidence;
pub use crate::num::{Normalized, Weight};

/// Return the permutation that orders `scores` from highest to lowest. The sort is stable, so
/// equal scores keep their input order.
///
/// ```
/// use candidate_ranking::{descending, Normalized};
///
/// let scores = [0.2, 0.7, 0.2, 0.9].map(|s| Normalized::new(s).unwrap());
/// let order = descending(&scores);
/// assert_eq!(order.apply_slice(&[0, 1, 2, 3]), vec![3, 1, 0, 2]);
/// ```
pub fn descending(scores: &[Normalized]) -> Permutation {
    permutation::sort_by(scores, |a, b| b.cmp(a))
}

/// Take up to `LIMIT` of the leading entries of an already ranked slice.
pub fn top<T, const LIMIT: usize>(ranked: &[T]) -> ArrayVec<&T, LIMIT> {
    ranked.iter().take(LIMIT).collect()
}
