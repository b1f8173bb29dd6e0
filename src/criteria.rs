pub mod topsis;

use crate::{Error, Result, Weight};

/// Whether lower or higher raw values are preferred for a criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Cost-type criterion: the ideal is the column minimum.
    Minimize,
    /// Benefit-type criterion: the ideal is the column maximum.
    Maximize,
}

#[derive(Clone, Copy, Debug)]
pub struct Criterion {
    pub name: &'static str,
    pub direction: Direction,
    pub weight: Weight,
}

impl Criterion {
    /// Build a criterion from a raw weight, rejecting negative or non-finite weights.
    pub fn new(name: &'static str, direction: Direction, weight: f64) -> Result<Self> {
        let weight = Weight::new(weight).ok_or(Error::InvalidWeight {
            criterion: name,
            value: weight,
        })?;
        Ok(Self {
            name,
            direction,
            weight,
        })
    }
}

/// Something scored against `N` criteria. `values` must be in the same order as the criteria
/// passed alongside it.
pub trait Alternative<const N: usize> {
    fn name(&self) -> &str;
    fn values(&self) -> [f64; N];
}

/// Read the criteria values of `alternative`, failing on the first non-finite value.
pub fn validated_row<A, const N: usize>(
    alternative: &A,
    criteria: &[Criterion; N],
) -> Result<[f64; N]>
where
    A: Alternative<N> + ?Sized,
{
    let row = alternative.values();
    for (value, criterion) in row.iter().zip(criteria) {
        if !value.is_finite() {
            return Err(Error::NonFinite {
                alternative: alternative.name().to_owned(),
                criterion: criterion.name,
                value: *value,
            });
        }
    }
    Ok(row)
}
