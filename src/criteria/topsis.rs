use std::array;

use tracing::{debug, trace};

use crate::criteria::{validated_row, Alternative, Criterion, Direction};
use crate::{Error, Normalized};

/// The outcome of scoring one alternative with
/// [TOPSIS](https://en.wikipedia.org/wiki/TOPSIS).
#[derive(Clone, Copy, Debug)]
pub struct Closeness<const N: usize> {
    /// `distance_to_anti_ideal / (distance_to_ideal + distance_to_anti_ideal)`, higher is better.
    pub score: Normalized,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
    /// Row after per-column vector normalization.
    pub normalized: [f64; N],
    /// Normalized row multiplied by the criteria weights.
    pub weighted: [f64; N],
}

/// Score each alternative by its relative closeness to the ideal point, returning results in
/// input order.
///
/// Columns are divided by their Euclidean norm, then multiplied by their weight. The ideal point
/// takes the best weighted value of each column (minimum for [`Direction::Minimize`], maximum
/// for [`Direction::Maximize`]) and the anti-ideal point takes the worst.
///
/// Degenerate input does not produce NaN:
/// - A column whose norm is zero normalizes to zero, so it contributes nothing to any distance.
/// - An alternative at distance zero from both reference points scores 0.5.
///
/// Column norms are computed without squaring raw values, so any finite input normalizes. A
/// column whose norm still exceeds `f64::MAX` fails with [`Error::DegenerateCriterion`], and a
/// score that is still non-finite (only reachable through overflowing weights) fails with
/// [`Error::Degenerate`].
pub fn closeness<A, const N: usize>(
    alternatives: &[A],
    criteria: &[Criterion; N],
) -> Result<Vec<Closeness<N>>, Error>
where
    A: Alternative<N>,
{
    let matrix = alternatives
        .iter()
        .map(|alternative| validated_row(alternative, criteria))
        .collect::<Result<Vec<[f64; N]>, Error>>()?;
    if matrix.is_empty() {
        return Ok(Vec::new());
    }

    let normalized = normalize(&matrix, criteria)?;
    let weighted: Vec<[f64; N]> = normalized
        .iter()
        .map(|row| array::from_fn(|j| row[j] * criteria[j].weight.as_f64()))
        .collect();
    let (ideal, anti_ideal) = reference_points(&weighted, criteria);
    trace!(?ideal, ?anti_ideal, "reference points");

    alternatives
        .iter()
        .zip(normalized)
        .zip(weighted)
        .map(|((alternative, normalized), weighted)| -> Result<Closeness<N>, Error> {
            let distance_to_ideal = distance(&weighted, &ideal);
            let distance_to_anti_ideal = distance(&weighted, &anti_ideal);
            let span = distance_to_ideal + distance_to_anti_ideal;
            let score = if span == 0.0 {
                debug!(
                    alternative = alternative.name(),
                    "alternative coincides with both reference points"
                );
                Some(Normalized::HALF)
            } else {
                Normalized::new(distance_to_anti_ideal / span)
            };
            let score = score.ok_or_else(|| Error::Degenerate {
                alternative: alternative.name().to_owned(),
            })?;
            Ok(Closeness {
                score,
                distance_to_ideal,
                distance_to_anti_ideal,
                normalized,
                weighted,
            })
        })
        .collect()
}

/// Return the `(ideal, anti_ideal)` points of a weighted matrix. Each column of `weighted` must
/// have at least one entry.
pub fn reference_points<const N: usize>(
    weighted: &[[f64; N]],
    criteria: &[Criterion; N],
) -> ([f64; N], [f64; N]) {
    let mut ideal = [0.0; N];
    let mut anti_ideal = [0.0; N];
    for (j, criterion) in criteria.iter().enumerate() {
        let min = weighted.iter().map(|row| row[j]).fold(f64::INFINITY, f64::min);
        let max = weighted
            .iter()
            .map(|row| row[j])
            .fold(f64::NEG_INFINITY, f64::max);
        (ideal[j], anti_ideal[j]) = match criterion.direction {
            Direction::Minimize => (min, max),
            Direction::Maximize => (max, min),
        };
    }
    (ideal, anti_ideal)
}

fn normalize<const N: usize>(
    matrix: &[[f64; N]],
    criteria: &[Criterion; N],
) -> Result<Vec<[f64; N]>, Error> {
    let mut norms = [0.0; N];
    for (j, criterion) in criteria.iter().enumerate() {
        let norm = column_norm(matrix, j);
        if !norm.is_finite() {
            return Err(Error::DegenerateCriterion {
                criterion: criterion.name,
            });
        }
        if norm == 0.0 {
            debug!(criterion = criterion.name, "zero-norm column");
        }
        norms[j] = norm;
    }
    Ok(matrix
        .iter()
        .map(|row| {
            array::from_fn(|j| match norms[j] {
                norm if norm == 0.0 => 0.0,
                norm => row[j] / norm,
            })
        })
        .collect())
}

/// Euclidean norm of column `j`, with entries scaled by the largest magnitude before squaring.
fn column_norm<const N: usize>(matrix: &[[f64; N]], j: usize) -> f64 {
    let scale = matrix.iter().map(|row| row[j].abs()).fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }
    let sum = matrix
        .iter()
        .map(|row| (row[j] / scale).powi(2))
        .sum::<f64>();
    scale * sum.sqrt()
}

fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
